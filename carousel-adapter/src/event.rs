use carousel::KeyCommand;

/// Something the host's UI layer reports to the carousel.
///
/// Hosts that already translate their toolkit's callbacks into this enum can replay, log or
/// serialize the stream and feed it through [`crate::Controller::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// The scroll viewport (one page) is now `width` wide.
    Layout { width: f64 },
    /// The carousel container is now `width` wide; horizontal padding is subtracted.
    ContainerLayout { width: f64 },
    DragBegan,
    Scrolled { offset: f64 },
    DragEnded { offset: f64, will_decelerate: bool },
    DecelerationEnded { offset: f64 },
    ScrollAnimationEnded { offset: f64 },
    Key(KeyCommand),
    IndicatorTapped { index: usize },
    /// Application-driven navigation.
    Navigate { index: usize },
}
