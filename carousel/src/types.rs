/// A scroll instruction for the host's scroll container.
///
/// The carousel never moves the viewport itself. Operations that need the viewport somewhere
/// else return one of these and the host applies it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    /// Target horizontal content offset.
    pub offset: f64,
    /// `true` for explicit navigation (the host animates), `false` for geometry resets.
    pub animated: bool,
}

impl ScrollCommand {
    pub fn jump(offset: f64) -> Self {
        Self {
            offset,
            animated: false,
        }
    }

    pub fn animate(offset: f64) -> Self {
        Self {
            offset,
            animated: true,
        }
    }
}

/// Where a loaded page sits inside the content area.
///
/// Pages are full-bleed on the cross axis, so only the horizontal extent is described.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFrame {
    pub index: usize,
    /// Leading edge in content coordinates (`index * page_width`).
    pub leading: f64,
    pub width: f64,
}

impl PageFrame {
    pub fn trailing(&self) -> f64 {
        self.leading + self.width
    }
}

/// Navigation state as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No pages, or no usable page width yet.
    Uninitialized,
    Settled(usize),
    Scrolling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCommand {
    Previous,
    Next,
}

/// What a dot-style page indicator needs to draw itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicator {
    pub number_of_pages: usize,
    pub current_page: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleStage {
    WillLoad,
    DidLoad,
    WillUnload,
    DidUnload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifecycleEvent {
    pub stage: LifecycleStage,
    pub index: usize,
}
