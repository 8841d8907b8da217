//! Raw product record shapes as the storefront REST backend returns them.
//!
//! ## Observed shapes from the live backend
//!
//! ### `category` / `materials`
//! These columns are free-form `TEXT`. Depending on how a record was entered
//! or migrated, the API returns one of:
//! - a JSON array of strings: `["Vase", "Bowl"]`
//! - a string holding a JSON-encoded array: `"[\"Vase\",\"Bowl\"]"`
//! - a comma-separated string: `"Vase, Bowl"`
//! - a bare single-value string: `"Sculpture"`
//! - `null` / absent.
//!
//! [`RawTags`] models this with an untagged enum; resolution to a canonical
//! list happens exactly once, in the catalog normalizer, never downstream.
//!
//! ### `price_amount`
//! Stored as `VARCHAR(50)` server-side, so the API emits either a decimal
//! string (`"80.00"`) or a bare number depending on the write path.
//! `rust_decimal`'s deserializer accepts both, so the field is a plain
//! `Option<Decimal>`.
//!
//! ### `is_featured`
//! An `INTEGER DEFAULT 0` column surfaced as `0`/`1`, but older admin
//! clients wrote JSON `true`/`false` and at least one migration produced
//! `"1"` strings. [`RawFlag`] accepts all of them; coercion to `bool` is the
//! normalizer's job.
//!
//! ### `created_at`
//! A `VARCHAR(50)` timestamp, either RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
//! Kept as a raw string here; lenient parsing happens during normalization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A record identifier that may arrive as a JSON number or a string.
///
/// Marketplace listing ids are numeric upstream but several admin endpoints
/// echo them back as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Int(n) => write!(f, "{n}"),
            RawId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A boolean-like flag: `0`/`1`, `true`/`false`, or `"0"`/`"1"`/`"true"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// A polymorphic category/materials field. See the module docs for the
/// shapes observed in the wild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    Many(Vec<String>),
    One(String),
}

/// A product synced from the linked third-party marketplace feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarketplaceItem {
    /// Marketplace listing id; opaque to this system.
    pub id: RawId,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Current price. `None` when the feed omitted it.
    #[serde(default)]
    pub price_amount: Option<Decimal>,

    /// Pre-sale price; present and greater than `price_amount` means the
    /// item is on sale.
    #[serde(default)]
    pub old_price: Option<Decimal>,

    /// ISO 4217 code, e.g. `"USD"`. May be absent on older rows.
    #[serde(default)]
    pub price_currency: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Canonical listing URL on the marketplace.
    #[serde(default)]
    pub etsy_url: Option<String>,

    #[serde(default)]
    pub category: Option<RawTags>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub is_featured: Option<RawFlag>,
}

/// An operator-entered product from the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawManualProduct {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<RawTags>,

    #[serde(default)]
    pub materials: Option<RawTags>,

    /// Physical dimensions in inches. Optional; only some product kinds
    /// record them.
    #[serde(default)]
    pub width: Option<Decimal>,
    #[serde(default)]
    pub height: Option<Decimal>,
    #[serde(default)]
    pub depth: Option<Decimal>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub old_price: Option<Decimal>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub is_featured: Option<RawFlag>,

    #[serde(default)]
    pub created_at: Option<String>,

    /// Ordered media gallery; the first `image` entry becomes the catalog
    /// thumbnail.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// One entry of a manual product's media gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub image_url: String,

    /// `"image"` or `"video"`; the backend defaults the column to `"image"`.
    #[serde(default = "default_media_type")]
    pub media_type: String,
}

impl ProductImage {
    /// Returns `true` for still images (anything that is not a video).
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type != "video"
    }
}

/// Default for `ProductImage::media_type` when the field is absent.
/// Serde's `default = "..."` attribute requires a function path.
fn default_media_type() -> String {
    "image".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn marketplace_item_deserializes_numeric_and_string_prices() {
        let from_number: RawMarketplaceItem = serde_json::from_value(serde_json::json!({
            "id": 99, "title": "Glass Vase", "price_amount": 80.0
        }))
        .unwrap();
        let from_string: RawMarketplaceItem = serde_json::from_value(serde_json::json!({
            "id": "99", "title": "Glass Vase", "price_amount": "80.00"
        }))
        .unwrap();
        assert_eq!(from_number.price_amount, Some(dec!(80)));
        assert_eq!(from_string.price_amount, Some(dec!(80.00)));
    }

    #[test]
    fn raw_id_displays_both_variants_identically() {
        assert_eq!(RawId::Int(99).to_string(), "99");
        assert_eq!(RawId::Text("99".into()).to_string(), "99");
    }

    #[test]
    fn category_accepts_array_and_string_shapes() {
        let many: RawMarketplaceItem = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "x", "category": ["Vase", "Bowl"]
        }))
        .unwrap();
        let one: RawMarketplaceItem = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "x", "category": "Sculpture"
        }))
        .unwrap();
        let none: RawMarketplaceItem =
            serde_json::from_value(serde_json::json!({ "id": 1, "title": "x", "category": null }))
                .unwrap();
        assert_eq!(
            many.category,
            Some(RawTags::Many(vec!["Vase".into(), "Bowl".into()]))
        );
        assert_eq!(one.category, Some(RawTags::One("Sculpture".into())));
        assert_eq!(none.category, None);
    }

    #[test]
    fn is_featured_accepts_int_bool_and_string() {
        for (raw, expected) in [
            (serde_json::json!(1), RawFlag::Int(1)),
            (serde_json::json!(true), RawFlag::Bool(true)),
            (serde_json::json!("1"), RawFlag::Text("1".into())),
        ] {
            let item: RawMarketplaceItem = serde_json::from_value(serde_json::json!({
                "id": 1, "title": "x", "is_featured": raw
            }))
            .unwrap();
            assert_eq!(item.is_featured, Some(expected));
        }
    }

    #[test]
    fn product_image_media_type_defaults_to_image() {
        let image: ProductImage =
            serde_json::from_value(serde_json::json!({ "image_url": "https://x/1.jpg" })).unwrap();
        assert_eq!(image.media_type, "image");
        assert!(image.is_image());
    }
}
