//! Normalization from the two raw feed shapes to [`UnifiedProduct`].
//!
//! This stage never rejects input: unparseable or missing fields degrade to
//! their documented defaults (zero price, empty description, no image, no
//! timestamp). Re-running it on the same input yields identical output.

use chrono::{DateTime, NaiveDateTime, Utc};
use glasswood_core::{
    ProductSource, RawFlag, RawManualProduct, RawMarketplaceItem, UnifiedProduct,
};

use crate::tags::normalize_tags;

/// Merges both raw feeds into one unified catalog snapshot: manual products
/// first, then marketplace items, preserving each source's relative order.
#[must_use]
pub fn normalize(
    manual: &[RawManualProduct],
    items: &[RawMarketplaceItem],
) -> Vec<UnifiedProduct> {
    manual
        .iter()
        .map(normalize_manual)
        .chain(items.iter().map(normalize_marketplace))
        .collect()
}

fn normalize_manual(product: &RawManualProduct) -> UnifiedProduct {
    UnifiedProduct {
        // Prefixed so manual ids can never collide with marketplace ids.
        id: format!("m-{}", product.id),
        title: product.name.clone(),
        description: product.description.clone().unwrap_or_default(),
        price_amount: product.price.unwrap_or_default(),
        old_price: product.old_price,
        price_currency: "USD".to_string(),
        image_url: product
            .images
            .iter()
            .find(|media| media.is_image())
            .map(|media| media.image_url.clone()),
        category_tags: normalize_tags(product.category.as_ref()),
        materials_tags: normalize_tags(product.materials.as_ref()),
        is_featured: flag_is_true(product.is_featured.as_ref()),
        created_at: parse_timestamp(product.created_at.as_deref()),
        source: ProductSource::Manual(product.clone()),
    }
}

fn normalize_marketplace(item: &RawMarketplaceItem) -> UnifiedProduct {
    UnifiedProduct {
        id: item.id.to_string(),
        title: item.title.clone(),
        description: item.description.clone().unwrap_or_default(),
        price_amount: item.price_amount.unwrap_or_default(),
        old_price: item.old_price,
        price_currency: item
            .price_currency
            .clone()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| "USD".to_string()),
        image_url: item.image_url.clone(),
        category_tags: normalize_tags(item.category.as_ref()),
        materials_tags: Vec::new(),
        is_featured: flag_is_true(item.is_featured.as_ref()),
        created_at: parse_timestamp(item.created_at.as_deref()),
        source: ProductSource::Marketplace(item.clone()),
    }
}

/// Coerces the boolean-like featured flag: `1`, `true`, `"1"`, `"true"`
/// (any case) → true; everything else → false.
fn flag_is_true(flag: Option<&RawFlag>) -> bool {
    match flag {
        Some(RawFlag::Bool(value)) => *value,
        Some(RawFlag::Int(value)) => *value == 1,
        Some(RawFlag::Text(value)) => value == "1" || value.eq_ignore_ascii_case("true"),
        None => false,
    }
}

/// Timestamp formats the backend has been observed to emit, tried in order
/// after RFC 3339.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Lenient timestamp parsing: RFC 3339 first, then the backend's naive
/// `VARCHAR(50)` formats interpreted as UTC. Unparseable values degrade to
/// `None` rather than failing the record.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    tracing::debug!(value = raw, "unparseable created_at; treating as missing");
    None
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
