/// A lightweight, serializable snapshot of the navigation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_page: Option<usize>,
    pub page_width: Option<f64>,
    /// Last offset reported by the host or commanded by the carousel.
    pub scroll_offset: f64,
    pub is_scrolling: bool,
}
