use carousel::{Carousel, CarouselDelegate, CarouselOptions, PageProvider, ScrollCommand};

use crate::HostEvent;

/// A framework-neutral controller that wraps a `carousel::Carousel` and routes host events to it.
///
/// This type does not hold any UI objects. Adapters drive it by calling `dispatch` for every
/// layout, drag, scroll and key event, and apply the returned [`ScrollCommand`] to the real
/// scroll container.
///
/// Besides the carousel itself, the controller keeps track of where the host's viewport
/// actually is (`host_offset`) and whether an animated navigation is still in flight.
pub struct Controller<S: PageProvider, D = ()> {
    carousel: Carousel<S, D>,
    host_offset: f64,
    animation_target: Option<f64>,
    last_command: Option<ScrollCommand>,
}

impl<S: PageProvider> Controller<S> {
    pub fn new(provider: S, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(provider, options))
    }
}

impl<S, D> Controller<S, D>
where
    S: PageProvider,
    D: CarouselDelegate<S::Page>,
{
    pub fn with_delegate(provider: S, delegate: D, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::with_delegate(provider, delegate, options))
    }

    pub fn from_carousel(carousel: Carousel<S, D>) -> Self {
        Self {
            host_offset: carousel.scroll_offset(),
            carousel,
            animation_target: None,
            last_command: None,
        }
    }

    pub fn carousel(&self) -> &Carousel<S, D> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<S, D> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<S, D> {
        self.carousel
    }

    /// Where the host's viewport is, as far as reported events and applied jumps tell.
    pub fn host_offset(&self) -> f64 {
        self.host_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation_target.is_some()
    }

    /// The offset an in-flight animated navigation is heading to.
    pub fn animation_target(&self) -> Option<f64> {
        self.animation_target
    }

    /// The most recent command handed to the host.
    ///
    /// This is history, not state: an animated command stays here after a drag cancels it. Use
    /// [`Controller::animation_target`] to ask whether it is still in flight.
    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.last_command
    }

    /// Routes one host event to the carousel.
    ///
    /// Returns the scroll command the host must apply, if any.
    pub fn dispatch(&mut self, event: HostEvent) -> Option<ScrollCommand> {
        let command = match event {
            HostEvent::Layout { width } => self.carousel.set_page_width(width),
            HostEvent::ContainerLayout { width } => self.carousel.apply_container_width(width),
            HostEvent::DragBegan => {
                // The user grabbed the content mid-animation.
                self.animation_target = None;
                self.carousel.on_drag_begin();
                None
            }
            HostEvent::Scrolled { offset } => {
                self.observe(offset);
                self.carousel.on_scroll(offset);
                None
            }
            HostEvent::DragEnded {
                offset,
                will_decelerate,
            } => {
                self.observe(offset);
                self.carousel.on_drag_end(offset, will_decelerate);
                None
            }
            HostEvent::DecelerationEnded { offset } => {
                self.observe(offset);
                self.carousel.on_deceleration_end(offset);
                None
            }
            HostEvent::ScrollAnimationEnded { offset } => {
                self.observe(offset);
                self.animation_target = None;
                self.carousel.on_scroll_animation_end(offset);
                None
            }
            HostEvent::Key(key) => self.carousel.on_key(key),
            HostEvent::IndicatorTapped { index } => self.carousel.select_indicator_page(index),
            HostEvent::Navigate { index } => self.carousel.load_view(index),
        };

        if let Some(cmd) = command {
            self.apply(cmd);
        }
        command
    }

    /// Dispatches every event in order and returns the last command produced, if any.
    pub fn dispatch_all(
        &mut self,
        events: impl IntoIterator<Item = HostEvent>,
    ) -> Option<ScrollCommand> {
        let mut last = None;
        for event in events {
            if let Some(cmd) = self.dispatch(event) {
                last = Some(cmd);
            }
        }
        last
    }

    /// Replaces the page provider; see [`Carousel::set_provider`].
    pub fn set_provider(&mut self, provider: S) -> Option<ScrollCommand> {
        self.animation_target = None;
        let command = self.carousel.set_provider(provider);
        if let Some(cmd) = command {
            self.apply(cmd);
        }
        command
    }

    fn observe(&mut self, offset: f64) {
        if offset.is_finite() {
            self.host_offset = offset;
        }
    }

    fn apply(&mut self, cmd: ScrollCommand) {
        self.last_command = Some(cmd);
        if cmd.animated {
            self.animation_target = Some(cmd.offset);
        } else {
            // Jumps land immediately and cancel any animation.
            self.animation_target = None;
            self.host_offset = cmd.offset;
        }
    }
}

impl<S: PageProvider, D> core::fmt::Debug for Controller<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("carousel", &self.carousel)
            .field("host_offset", &self.host_offset)
            .field("animation_target", &self.animation_target)
            .field("last_command", &self.last_command)
            .finish()
    }
}
