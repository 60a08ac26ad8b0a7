use alloc::vec::Vec;

use crate::{LifecycleEvent, LifecycleStage};

/// Hooks fired around every page attach/detach.
///
/// Calls arrive in strict `will → (attach|detach) → did` order for one page at a time. Use them
/// to activate or tear down whatever the host associates with a page. Implementations must not
/// call back into the carousel.
///
/// Every method defaults to doing nothing, and `()` is the no-op delegate.
pub trait CarouselDelegate<P> {
    fn page_will_load(&mut self, _index: usize, _page: &P) {}

    fn page_did_load(&mut self, _index: usize, _page: &P) {}

    fn page_will_unload(&mut self, _index: usize, _page: &P) {}

    fn page_did_unload(&mut self, _index: usize, _page: &P) {}
}

impl<P> CarouselDelegate<P> for () {}

impl<P, D: CarouselDelegate<P> + ?Sized> CarouselDelegate<P> for &mut D {
    fn page_will_load(&mut self, index: usize, page: &P) {
        (**self).page_will_load(index, page);
    }

    fn page_did_load(&mut self, index: usize, page: &P) {
        (**self).page_did_load(index, page);
    }

    fn page_will_unload(&mut self, index: usize, page: &P) {
        (**self).page_will_unload(index, page);
    }

    fn page_did_unload(&mut self, index: usize, page: &P) {
        (**self).page_did_unload(index, page);
    }
}

/// A delegate that records every hook as a [`LifecycleEvent`].
///
/// Handy for debugging hosts and for asserting exact hook sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleLog {
    events: Vec<LifecycleEvent>,
}

impl LifecycleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    /// Returns the recorded events and starts over.
    pub fn take(&mut self) -> Vec<LifecycleEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Indexes that went through `stage`, in hook order.
    pub fn indexes(&self, stage: LifecycleStage) -> Vec<usize> {
        self.events
            .iter()
            .filter(|e| e.stage == stage)
            .map(|e| e.index)
            .collect()
    }

    fn push(&mut self, stage: LifecycleStage, index: usize) {
        self.events.push(LifecycleEvent { stage, index });
    }
}

impl<P> CarouselDelegate<P> for LifecycleLog {
    fn page_will_load(&mut self, index: usize, _page: &P) {
        self.push(LifecycleStage::WillLoad, index);
    }

    fn page_did_load(&mut self, index: usize, _page: &P) {
        self.push(LifecycleStage::DidLoad, index);
    }

    fn page_will_unload(&mut self, index: usize, _page: &P) {
        self.push(LifecycleStage::WillUnload, index);
    }

    fn page_did_unload(&mut self, index: usize, _page: &P) {
        self.push(LifecycleStage::DidUnload, index);
    }
}
