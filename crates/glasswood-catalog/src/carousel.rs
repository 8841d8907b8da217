//! Circular carousel windowing and the index state machine behind it.
//!
//! [`compute_window`] is pure and stateless; [`Carousel`] owns only the
//! center index and the paused flag. The auto-advance interval itself is an
//! external scheduler concern — the embedding view calls [`Carousel::tick`]
//! on each timer fire and must clear the interval when it tears down.

use glasswood_core::UnifiedProduct;

/// Auto-advance interval the embedding view should use unless configured
/// otherwise.
pub const DEFAULT_AUTOPLAY_MS: u64 = 3000;

/// Neighbors shown on each side of the center slide.
pub const DEFAULT_MAX_OFFSET: usize = 2;

/// One visible carousel slot: its offset from the center, the product, and
/// the absolute index into the backing list.
#[derive(Debug, Clone, Copy)]
pub struct WindowEntry<'a> {
    pub offset: i64,
    pub product: &'a UnifiedProduct,
    pub index: usize,
}

/// Computes the visible window around `center` with circular wraparound.
///
/// The effective half-width is `min(max_offset, len / 2)`, floored at 1 for
/// non-empty lists, so the window is always fully populated when the list
/// has at least one product — duplicate indices are expected for short
/// lists. A `center` beyond the list wraps modulo its length. Empty input
/// yields an empty window.
#[must_use]
pub fn compute_window(
    products: &[UnifiedProduct],
    center: usize,
    max_offset: usize,
) -> Vec<WindowEntry<'_>> {
    let len = products.len();
    if len == 0 {
        return Vec::new();
    }

    let center = center % len;
    let half = std::cmp::max(len / 2, 1);
    let effective = i64::try_from(max_offset.min(half)).unwrap_or(i64::MAX);

    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let center_i = i64::try_from(center).unwrap_or(0);

    (-effective..=effective)
        .map(|offset| {
            let index = usize::try_from((center_i + offset).rem_euclid(len_i)).unwrap_or(0);
            WindowEntry {
                offset,
                product: &products[index],
                index,
            }
        })
        .collect()
}

/// Carousel index state: center slide plus paused flag. All updates are
/// immediate and synchronous; no animation state lives here.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    paused: bool,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Carousel {
            len,
            current: 0,
            paused: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Timer callback: advances one slide unless paused or there is nothing
    /// to rotate through.
    pub fn tick(&mut self) {
        if !self.paused && self.len > 1 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Manual advance; unlike [`Self::tick`] this ignores the paused flag.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jumps to a slide; out-of-range targets wrap.
    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.current = index % self.len;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Re-binds the carousel to a list of a new length. If the center index
    /// fell out of range (the list shrank), it snaps back to the first
    /// slide so the next window never references a stale index.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
    }

    /// The visible window for the current center over `products`.
    #[must_use]
    pub fn window<'a>(
        &self,
        products: &'a [UnifiedProduct],
        max_offset: usize,
    ) -> Vec<WindowEntry<'a>> {
        compute_window(products, self.current, max_offset)
    }
}
