/// Configuration for [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Inset of the scroll viewport from each side of the carousel container.
    ///
    /// Non-zero padding lets the neighbors of the current page peek in from the sides. It only
    /// affects the viewport geometry (see [`crate::Carousel::apply_container_width`]), never the
    /// windowing. Negative values are unsupported.
    pub horizontal_padding: f64,

    /// Whether [`crate::KeyCommand`]s navigate. Other navigation paths ignore this flag.
    pub keyboard_navigation: bool,

    /// The page width, when the host already knows it at construction time.
    ///
    /// With a width and a non-empty provider, the window around page 0 is built immediately
    /// instead of on the first layout notification.
    pub initial_page_width: Option<f64>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            horizontal_padding: 0.0,
            keyboard_navigation: true,
            initial_page_width: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizontal_padding(mut self, horizontal_padding: f64) -> Self {
        debug_assert!(
            horizontal_padding >= 0.0,
            "horizontal_padding must not be negative (got {horizontal_padding})"
        );
        self.horizontal_padding = horizontal_padding;
        self
    }

    pub fn with_keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    pub fn with_initial_page_width(mut self, page_width: Option<f64>) -> Self {
        self.initial_page_width = page_width;
        self
    }
}
