use crate::position::is_usable_width;
use crate::{
    CarouselDelegate, CarouselOptions, CarouselState, KeyCommand, LoadedPage, PageIndicator,
    PagePosition, PageProvider, PageWindow, Phase, ScrollCommand,
};

/// A headless paging engine for a horizontally swiped carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not draw anything. Loaded pages are exposed through [`Carousel::window`] with the
///   frame each one occupies in the content area.
/// - Your host drives it with layout and scroll notifications.
/// - It never moves the viewport itself: operations that need a new scroll position return a
///   [`ScrollCommand`].
///
/// At most the current page and one neighbor on each side are loaded. Pages outside that window
/// are unloaded as soon as the carousel settles elsewhere.
///
/// Invalid input never fails. Out-of-range indexes, navigation before the geometry is known and
/// redundant loads all do nothing.
pub struct Carousel<S: PageProvider, D = ()> {
    options: CarouselOptions,
    provider: S,
    delegate: D,
    window: PageWindow<S::Page>,
    current_page: Option<usize>,
    page_width: Option<f64>,
    scroll_offset: f64,
    is_scrolling: bool,
    // Destination of an animated `load_view` the host has not finished yet.
    animating_to: Option<usize>,
}

impl<S: PageProvider> Carousel<S> {
    /// Creates a carousel without lifecycle hooks.
    pub fn new(provider: S, options: CarouselOptions) -> Self {
        Self::with_delegate(provider, (), options)
    }
}

impl<S, D> Carousel<S, D>
where
    S: PageProvider,
    D: CarouselDelegate<S::Page>,
{
    /// Creates a carousel that reports page attach/detach to `delegate`.
    ///
    /// A non-empty provider starts on page 0. Pages are loaded right away when
    /// `options.initial_page_width` is set, otherwise on the first layout notification.
    pub fn with_delegate(provider: S, delegate: D, options: CarouselOptions) -> Self {
        cdebug!(
            page_count = provider.page_count(),
            horizontal_padding = options.horizontal_padding,
            keyboard_navigation = options.keyboard_navigation,
            "Carousel::new"
        );
        let page_width = options.initial_page_width.filter(|w| is_usable_width(*w));
        let mut c = Self {
            options,
            provider,
            delegate,
            window: PageWindow::new(),
            current_page: None,
            page_width,
            scroll_offset: 0.0,
            is_scrolling: false,
            animating_to: None,
        };
        c.build();
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// The loaded pages.
    pub fn window(&self) -> &PageWindow<S::Page> {
        &self.window
    }

    pub fn loaded_page(&self, index: usize) -> Option<&LoadedPage<S::Page>> {
        self.window.get(index)
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.window.contains(index)
    }

    /// `None` exactly when the provider has no pages.
    pub fn current_page(&self) -> Option<usize> {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.provider.page_count()
    }

    pub fn page_width(&self) -> Option<f64> {
        self.page_width
    }

    pub fn horizontal_padding(&self) -> f64 {
        self.options.horizontal_padding
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// The page an animated navigation is heading to, until the host reports the animation ended
    /// or the user grabs the content.
    pub fn animating_to(&self) -> Option<usize> {
        self.animating_to
    }

    pub fn keyboard_navigation(&self) -> bool {
        self.options.keyboard_navigation
    }

    pub fn set_keyboard_navigation(&mut self, enabled: bool) {
        self.options.keyboard_navigation = enabled;
    }

    /// Offset/page math for the current geometry, if there is one.
    pub fn position(&self) -> Option<PagePosition> {
        PagePosition::new(self.page_width?, self.provider.page_count())
    }

    pub fn phase(&self) -> Phase {
        match (self.position(), self.current_page) {
            (Some(_), Some(_)) if self.is_scrolling => Phase::Scrolling,
            (Some(_), Some(page)) => Phase::Settled(page),
            _ => Phase::Uninitialized,
        }
    }

    /// Total width of the page strip, once the page width is known.
    pub fn content_width(&self) -> Option<f64> {
        self.position().map(|p| p.content_width())
    }

    pub fn indicator(&self) -> PageIndicator {
        PageIndicator {
            number_of_pages: self.provider.page_count(),
            current_page: self.current_page,
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_page: self.current_page,
            page_width: self.page_width,
            scroll_offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Replaces the page provider.
    ///
    /// Every page of the old provider is unloaded (hooks fire with the handles that were attached),
    /// then the carousel restarts on page 0. Returns the offset reset for the host when the page
    /// width is already known and the new provider has pages.
    pub fn set_provider(&mut self, provider: S) -> Option<ScrollCommand> {
        self.window.unload_all(&mut self.delegate);
        self.provider = provider;
        self.is_scrolling = false;
        self.animating_to = None;
        self.scroll_offset = 0.0;
        cdebug!(page_count = self.provider.page_count(), "set_provider");

        self.build();
        let position = self.position()?;
        self.scroll_offset = position.offset_for_page(0);
        Some(ScrollCommand::jump(self.scroll_offset))
    }

    /// Layout notification: the scroll viewport is now `page_width` wide.
    ///
    /// Page frames depend on the width, so a change unloads every page and rebuilds the window
    /// around the current page. The returned command puts the viewport back on the current page
    /// without animation. Unchanged, non-finite and non-positive widths are ignored.
    pub fn set_page_width(&mut self, page_width: f64) -> Option<ScrollCommand> {
        if !is_usable_width(page_width) {
            ctrace!(page_width, "set_page_width: ignoring unusable width");
            return None;
        }
        if self.page_width == Some(page_width) {
            return None;
        }
        cdebug!(page_width, previous = ?self.page_width, "set_page_width");

        self.window.unload_all(&mut self.delegate);
        self.page_width = Some(page_width);
        self.animating_to = None;

        let current = self.current_page?;
        let position = self.position()?;
        self.window
            .realign(current, position, &self.provider, &mut self.delegate);
        self.scroll_offset = position.offset_for_page(current);
        Some(ScrollCommand::jump(self.scroll_offset))
    }

    /// Layout notification in container coordinates.
    ///
    /// The scroll viewport is inset by `horizontal_padding` on both sides, so the page width is
    /// `container_width - 2 * horizontal_padding`.
    pub fn apply_container_width(&mut self, container_width: f64) -> Option<ScrollCommand> {
        let page_width = container_width - 2.0 * self.options.horizontal_padding;
        self.set_page_width(page_width)
    }

    /// The user put a finger down / started dragging.
    pub fn on_drag_begin(&mut self) {
        if self.phase() == Phase::Uninitialized {
            return;
        }
        ctrace!(animating_to = ?self.animating_to, "on_drag_begin");
        self.animating_to = None;
        self.is_scrolling = true;
    }

    /// Intermediate offset while a scroll is in flight.
    ///
    /// Pre-loads around the page that is more than half visible. This never changes the current
    /// page; only [`Carousel::on_drag_end`] and friends do.
    ///
    /// While an animated [`Carousel::load_view`] is in flight the destination window is already
    /// loaded and stays put; the pages the animation sweeps past are not materialized.
    pub fn on_scroll(&mut self, offset: f64) {
        if !self.accept_offset(offset) {
            return;
        }
        let (Some(position), Some(_)) = (self.position(), self.current_page) else {
            return;
        };
        self.is_scrolling = true;
        if self.animating_to.is_some() {
            return;
        }

        let candidate = position.predictive_candidate(offset);
        if self.window.anchor() == Some(candidate) {
            return;
        }
        ctrace!(offset, candidate, "on_scroll: moving window");
        self.window
            .realign(candidate, position, &self.provider, &mut self.delegate);
    }

    /// The finger lifted. With `will_decelerate` the scroll keeps going and
    /// [`Carousel::on_deceleration_end`] settles it later.
    pub fn on_drag_end(&mut self, offset: f64, will_decelerate: bool) {
        if will_decelerate {
            self.accept_offset(offset);
            return;
        }
        self.settle(offset);
    }

    pub fn on_deceleration_end(&mut self, offset: f64) {
        self.settle(offset);
    }

    /// A programmatic scroll (e.g. from [`Carousel::load_view`]) finished animating.
    pub fn on_scroll_animation_end(&mut self, offset: f64) {
        self.settle(offset);
    }

    /// Navigates to page `index`.
    ///
    /// The destination window is loaded before the animated scroll command is returned, so the
    /// page is already attached when the host starts animating. Returns `None` (and changes
    /// nothing) for an index outside the page range or before the page width is known.
    pub fn load_view(&mut self, index: usize) -> Option<ScrollCommand> {
        let Some(position) = self.position() else {
            ctrace!(index, "load_view: no geometry");
            return None;
        };
        if !position.contains(index) {
            ctrace!(index, page_count = position.page_count(), "load_view: out of range");
            return None;
        }

        self.window
            .realign(index, position, &self.provider, &mut self.delegate);
        self.current_page = Some(index);
        self.animating_to = Some(index);
        self.scroll_offset = position.offset_for_page(index);
        cdebug!(index, offset = self.scroll_offset, "load_view");
        Some(ScrollCommand::animate(self.scroll_offset))
    }

    /// Arrow-key navigation. Does nothing while keyboard navigation is disabled, and never wraps
    /// around at either end.
    pub fn on_key(&mut self, command: KeyCommand) -> Option<ScrollCommand> {
        if !self.options.keyboard_navigation {
            ctrace!(?command, "on_key: keyboard navigation disabled");
            return None;
        }
        let current = self.current_page?;
        let target = match command {
            KeyCommand::Previous => current.checked_sub(1)?,
            KeyCommand::Next => current.checked_add(1)?,
        };
        self.load_view(target)
    }

    /// The user tapped the page indicator at `index`.
    pub fn select_indicator_page(&mut self, index: usize) -> Option<ScrollCommand> {
        self.load_view(index)
    }

    /// Restores a snapshot taken with [`Carousel::state`].
    ///
    /// The page width is applied when usable and the current page when it is in range for the
    /// current provider. Returns the offset the host should jump to.
    pub fn restore_state(&mut self, state: CarouselState) -> Option<ScrollCommand> {
        self.is_scrolling = false;
        self.animating_to = None;
        if let Some(width) = state.page_width.filter(|w| is_usable_width(*w)) {
            if self.page_width != Some(width) {
                self.window.unload_all(&mut self.delegate);
                self.page_width = Some(width);
            }
        }
        if let Some(page) = state
            .current_page
            .filter(|&p| p < self.provider.page_count())
        {
            self.current_page = Some(page);
        }

        let current = self.current_page?;
        let position = self.position()?;
        cdebug!(current, page_width = position.page_width(), "restore_state");
        self.window
            .realign(current, position, &self.provider, &mut self.delegate);
        self.scroll_offset = position.offset_for_page(current);
        Some(ScrollCommand::jump(self.scroll_offset))
    }

    fn build(&mut self) {
        if self.provider.page_count() == 0 {
            self.current_page = None;
            return;
        }
        self.current_page = Some(0);
        if let Some(position) = self.position() {
            self.window
                .realign(0, position, &self.provider, &mut self.delegate);
        }
    }

    fn settle(&mut self, offset: f64) {
        if !self.accept_offset(offset) {
            return;
        }
        self.is_scrolling = false;
        self.animating_to = None;
        let Some(position) = self.position() else {
            return;
        };

        let page = position.page_for_offset(offset);
        cdebug!(page, previous = ?self.current_page, offset, "settled");
        self.current_page = Some(page);
        self.window
            .realign(page, position, &self.provider, &mut self.delegate);
    }

    // Records a host-reported offset. Non-finite offsets are a host bug; they are dropped.
    fn accept_offset(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            cwarn!(offset, "ignoring non-finite scroll offset");
            return false;
        }
        self.scroll_offset = offset;
        true
    }
}

impl<S, D> Clone for Carousel<S, D>
where
    S: PageProvider + Clone,
    S::Page: Clone,
    D: Clone,
{
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            provider: self.provider.clone(),
            delegate: self.delegate.clone(),
            window: self.window.clone(),
            current_page: self.current_page,
            page_width: self.page_width,
            scroll_offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
            animating_to: self.animating_to,
        }
    }
}

impl<S: PageProvider, D> core::fmt::Debug for Carousel<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("page_count", &self.provider.page_count())
            .field("current_page", &self.current_page)
            .field("page_width", &self.page_width)
            .field("scroll_offset", &self.scroll_offset)
            .field("is_scrolling", &self.is_scrolling)
            .field("animating_to", &self.animating_to)
            .field("loaded", &self.window.indexes())
            .finish_non_exhaustive()
    }
}
