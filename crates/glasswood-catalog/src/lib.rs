//! The catalog view engine: a pure, synchronous pipeline that turns the two
//! raw product feeds into the exact set and order of products to display.
//!
//! Stages compose strictly one-directional:
//!
//! raw records → [`normalize`] → [`classify`] → [`filter_and_facet`] →
//! [`sort_products`] / [`compute_window`].
//!
//! Nothing here performs I/O or holds state beyond caller-supplied
//! parameters; every entry point is safe to re-run on each parameter change.
//! Malformed input degrades to documented defaults — no stage ever fails.

pub mod carousel;
pub mod classify;
pub mod filter;
pub mod normalize;
pub mod sort;
pub mod tags;

pub use carousel::{compute_window, Carousel, WindowEntry, DEFAULT_AUTOPLAY_MS, DEFAULT_MAX_OFFSET};
pub use classify::{classify, descriptive_tags};
pub use filter::{
    filter_and_facet, CatalogSelection, CategoryFilter, Facet, FacetedView, FilterParams,
    PriceBand,
};
pub use normalize::normalize;
pub use sort::{featured_lineup, sort_products, SortMode, FEATURED_LINEUP_LIMIT};
pub use tags::normalize_tags;
