use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{CarouselDelegate, PageFrame, PagePosition, PageProvider};

/// A page currently attached to the content area.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPage<P> {
    pub frame: PageFrame,
    pub page: P,
}

/// The set of materialized pages.
///
/// Membership is the only source of truth for "is this page attached": a page is never queried
/// from the provider again while it is loaded. All mutators are idempotent and ignore indexes
/// outside the page range.
///
/// The window itself does not limit how many pages are loaded; [`crate::Carousel`] keeps it at
/// `anchor ± 1` by only ever calling [`PageWindow::realign`] and [`PageWindow::unload_all`].
#[derive(Clone, Debug)]
pub struct PageWindow<P> {
    loaded: BTreeMap<usize, LoadedPage<P>>,
    anchor: Option<usize>,
}

impl<P> Default for PageWindow<P> {
    fn default() -> Self {
        Self {
            loaded: BTreeMap::new(),
            anchor: None,
        }
    }
}

impl<P> PageWindow<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.loaded.contains_key(&index)
    }

    /// The page the window was last built around.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn get(&self, index: usize) -> Option<&LoadedPage<P>> {
        self.loaded.get(&index)
    }

    /// Loaded pages in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedPage<P>> {
        self.loaded.values()
    }

    pub fn indexes(&self) -> Vec<usize> {
        self.loaded.keys().copied().collect()
    }

    /// Attaches page `index` unless it is out of range or already attached.
    pub fn load_page<S, D>(
        &mut self,
        index: usize,
        position: PagePosition,
        provider: &S,
        delegate: &mut D,
    ) where
        S: PageProvider<Page = P> + ?Sized,
        D: CarouselDelegate<P> + ?Sized,
    {
        if !position.contains(index) || self.loaded.contains_key(&index) {
            return;
        }

        let page = provider.page(index);
        delegate.page_will_load(index, &page);

        let frame = PageFrame {
            index,
            leading: position.offset_for_page(index),
            width: position.page_width(),
        };
        ctrace!(index, leading = frame.leading, width = frame.width, "load_page");
        let loaded = self.loaded.entry(index).or_insert(LoadedPage { frame, page });

        delegate.page_did_load(index, &loaded.page);
    }

    /// Detaches page `index` if it is attached.
    pub fn unload_page<D>(&mut self, index: usize, delegate: &mut D)
    where
        D: CarouselDelegate<P> + ?Sized,
    {
        let Some(loaded) = self.loaded.get(&index) else {
            return;
        };
        delegate.page_will_unload(index, &loaded.page);

        let Some(loaded) = self.loaded.remove(&index) else {
            return;
        };
        ctrace!(index, "unload_page");
        delegate.page_did_unload(index, &loaded.page);
    }

    /// Loads `around - 1`, `around`, `around + 1`, in that order.
    pub fn load_window<S, D>(
        &mut self,
        around: usize,
        position: PagePosition,
        provider: &S,
        delegate: &mut D,
    ) where
        S: PageProvider<Page = P> + ?Sized,
        D: CarouselDelegate<P> + ?Sized,
    {
        if let Some(prev) = around.checked_sub(1) {
            self.load_page(prev, position, provider, delegate);
        }
        self.load_page(around, position, provider, delegate);
        if let Some(next) = around.checked_add(1) {
            self.load_page(next, position, provider, delegate);
        }
        if position.contains(around) {
            self.anchor = Some(around);
        }
    }

    /// Unloads every attached page, lowest index first.
    pub fn unload_all<D>(&mut self, delegate: &mut D)
    where
        D: CarouselDelegate<P> + ?Sized,
    {
        for index in self.indexes() {
            self.unload_page(index, delegate);
        }
        self.anchor = None;
    }

    /// Moves the window onto `around`: pages outside `around ± 1` are unloaded first, then the
    /// window around `around` is loaded. A window already built around `around` is left as is.
    pub fn realign<S, D>(
        &mut self,
        around: usize,
        position: PagePosition,
        provider: &S,
        delegate: &mut D,
    ) where
        S: PageProvider<Page = P> + ?Sized,
        D: CarouselDelegate<P> + ?Sized,
    {
        if !position.contains(around) {
            return;
        }
        let first = around.saturating_sub(1);
        let last = around.saturating_add(1);
        let stale: Vec<usize> = self
            .loaded
            .keys()
            .copied()
            .filter(|&i| i < first || i > last)
            .collect();
        for index in stale {
            self.unload_page(index, delegate);
        }
        self.load_window(around, position, provider, delegate);
    }
}
