/// Offset ↔ page math for a strip of equally wide pages.
///
/// A `PagePosition` only exists once the geometry is usable: a finite, positive page width and
/// at least one page. Everything that depends on offsets goes through `PagePosition::new`, so
/// the "no geometry yet" case is handled once, by the `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePosition {
    page_width: f64,
    page_count: usize,
}

impl PagePosition {
    pub fn new(page_width: f64, page_count: usize) -> Option<Self> {
        if page_count == 0 || !is_usable_width(page_width) {
            return None;
        }
        Some(Self {
            page_width,
            page_count,
        })
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn last_page(&self) -> usize {
        self.page_count - 1
    }

    /// Width of the whole strip of pages.
    pub fn content_width(&self) -> f64 {
        self.page_width * self.page_count as f64
    }

    /// Target scroll offset that shows `index` flush with the viewport.
    pub fn offset_for_page(&self, index: usize) -> f64 {
        index as f64 * self.page_width
    }

    /// The page a resting viewport at `offset` shows.
    pub fn page_for_offset(&self, offset: f64) -> usize {
        self.clamp_page(floor_to_i64(offset / self.page_width))
    }

    /// The page that should anchor the window while a scroll is still in flight.
    ///
    /// A neighbor becomes the candidate once half of it is inside the viewport.
    pub fn predictive_candidate(&self, offset: f64) -> usize {
        let half = self.page_width / 2.0;
        let page = floor_to_i64((offset - half) / self.page_width).saturating_add(1);
        self.clamp_page(page)
    }

    pub fn clamp_page(&self, page: i64) -> usize {
        if page <= 0 {
            return 0;
        }
        let last = self.last_page();
        match usize::try_from(page) {
            Ok(page) => page.min(last),
            Err(_) => last,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.page_count
    }
}

pub(crate) fn is_usable_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

// `f64::floor` lives in std; offsets only need the integral part.
fn floor_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let truncated = value as i64;
    if (truncated as f64) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
