use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::raw::{RawManualProduct, RawMarketplaceItem};

/// The canonical product shape every pipeline stage operates on, derived
/// from one of the two raw sources by the catalog normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedProduct {
    /// Globally unique id within a catalog snapshot. Manual products are
    /// prefixed `m-` so they can never collide with marketplace ids.
    pub id: String,

    pub title: String,

    /// Empty string when the source record had no description.
    pub description: String,

    /// Zero when the source record had no price.
    pub price_amount: Decimal,

    /// Pre-sale price; `Some(p)` with `p > price_amount` means on sale.
    pub old_price: Option<Decimal>,

    /// ISO 4217 code; manual products default to `"USD"`.
    pub price_currency: String,

    /// Catalog thumbnail: the marketplace image, or the first still image
    /// of a manual product's gallery.
    pub image_url: Option<String>,

    /// Trimmed, deduplicated, non-empty category tags in source order.
    pub category_tags: Vec<String>,

    /// Materials tags, normalized under the same rule as `category_tags`.
    /// Only manual products carry these; used by the type classifier.
    pub materials_tags: Vec<String>,

    pub is_featured: bool,

    /// Parsed creation timestamp; `None` when the source value was missing
    /// or unparseable. Missing timestamps sort as the epoch.
    pub created_at: Option<DateTime<Utc>>,

    /// The untouched raw record, kept for detail-view rendering. The
    /// pipeline never reads back through it.
    pub source: ProductSource,
}

impl UnifiedProduct {
    #[must_use]
    pub fn source_kind(&self) -> SourceKind {
        match self.source {
            ProductSource::Marketplace(_) => SourceKind::Marketplace,
            ProductSource::Manual(_) => SourceKind::Manual,
        }
    }

    /// Returns `true` when the product has a pre-sale price strictly above
    /// its current price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price_amount)
    }
}

/// The raw record a [`UnifiedProduct`] was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProductSource {
    Marketplace(RawMarketplaceItem),
    Manual(RawManualProduct),
}

/// Which origin a product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Marketplace,
    Manual,
}

/// Top-level catalog division. Every product is classified into exactly one
/// line; a product is never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductLine {
    #[serde(rename = "stained-glass")]
    StainedGlass,
    #[serde(rename = "wood-work")]
    WoodWork,
}

impl ProductLine {
    /// Human-readable section heading, as shown on the storefront tabs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProductLine::StainedGlass => "Stained Glass",
            ProductLine::WoodWork => "Wood Work",
        }
    }
}

impl std::fmt::Display for ProductLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductLine::StainedGlass => write!(f, "stained-glass"),
            ProductLine::WoodWork => write!(f, "wood-work"),
        }
    }
}

impl std::str::FromStr for ProductLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stained-glass" => Ok(ProductLine::StainedGlass),
            "wood-work" => Ok(ProductLine::WoodWork),
            other => Err(format!(
                "unknown product line \"{other}\" (expected stained-glass or wood-work)"
            )),
        }
    }
}
