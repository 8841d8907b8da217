//! Ordering of the filtered product set, plus the featured lineup that
//! feeds the home-page carousel.

use chrono::{DateTime, Utc};
use glasswood_core::UnifiedProduct;

/// How many products the home-page featured lineup shows at most.
pub const FEATURED_LINEUP_LIMIT: usize = 8;

/// The sort selector. `Featured` restricts to featured products rather
/// than reordering — a long-standing storefront quirk, preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Recent,
    Featured,
    Lowest,
    Highest,
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortMode::Recent),
            "featured" => Ok(SortMode::Featured),
            "lowest" => Ok(SortMode::Lowest),
            "highest" => Ok(SortMode::Highest),
            other => Err(format!(
                "unknown sort mode \"{other}\" (expected recent, featured, lowest or highest)"
            )),
        }
    }
}

/// Returns a newly ordered list; the input is never mutated. All orderings
/// are stable: equal keys keep their prior relative order.
#[must_use]
pub fn sort_products(products: &[UnifiedProduct], mode: SortMode) -> Vec<UnifiedProduct> {
    match mode {
        SortMode::Featured => products
            .iter()
            .filter(|product| product.is_featured)
            .cloned()
            .collect(),
        SortMode::Recent => {
            let mut sorted = products.to_vec();
            // Missing timestamps sort as the epoch, i.e. sink to the end.
            sorted.sort_by_key(|product| {
                std::cmp::Reverse(product.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
            });
            sorted
        }
        SortMode::Lowest => {
            let mut sorted = products.to_vec();
            sorted.sort_by_key(|product| product.price_amount);
            sorted
        }
        SortMode::Highest => {
            let mut sorted = products.to_vec();
            sorted.sort_by_key(|product| std::cmp::Reverse(product.price_amount));
            sorted
        }
    }
}

/// The carousel feed: featured products first, then the rest, truncated to
/// `limit`. Relative order within each group is preserved.
#[must_use]
pub fn featured_lineup(products: &[UnifiedProduct], limit: usize) -> Vec<UnifiedProduct> {
    let mut lineup: Vec<UnifiedProduct> = products
        .iter()
        .filter(|product| product.is_featured)
        .cloned()
        .collect();
    lineup.extend(
        products
            .iter()
            .filter(|product| !product.is_featured)
            .cloned(),
    );
    lineup.truncate(limit);
    lineup
}
