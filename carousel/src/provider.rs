use alloc::vec::Vec;

/// Supplies the pages a [`crate::Carousel`] pages through.
///
/// `page(index)` is only called for `index < page_count()`, and only when the page is about to be
/// attached. Handles must be stable: asking twice for the same index yields the same content.
pub trait PageProvider {
    /// An opaque handle to a page's content (a view id, an `Rc` to a widget, ...).
    ///
    /// The carousel holds the handle while the page is attached and drops it on detach; it never
    /// owns or destroys the content behind it.
    type Page;

    fn page_count(&self) -> usize;

    fn page(&self, index: usize) -> Self::Page;
}

/// The default provider: an owned list of page handles, handed out by clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageList<P> {
    pages: Vec<P>,
}

impl<P> PageList<P> {
    pub fn new(pages: Vec<P>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<P> {
        self.pages
    }
}

impl<P: Clone> PageProvider for PageList<P> {
    type Page = P;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> P {
        self.pages[index].clone()
    }
}

impl<P> From<Vec<P>> for PageList<P> {
    fn from(pages: Vec<P>) -> Self {
        Self::new(pages)
    }
}

impl<P> FromIterator<P> for PageList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
