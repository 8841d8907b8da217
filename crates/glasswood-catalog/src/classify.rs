//! Assignment of each product to its top-level product line.
//!
//! Explicit type tags win when unambiguous; legacy records without them are
//! inferred from keyword matches over their text fields. Products that stay
//! ambiguous default to stained glass — a deliberate product decision that
//! keeps legacy catalog entries visible under one tab, not a classification
//! judgment. Changing the default would silently hide products from the
//! wood-work view.

use std::sync::LazyLock;

use glasswood_core::{ProductLine, UnifiedProduct};
use regex::Regex;

static WOOD_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("wood|woodwork|timber|carv|oak|walnut|maple|cedar").expect("valid wood keyword regex")
});

static GLASS_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("glass|stained|suncatcher|sun catcher|panel|lead came|copper foil")
        .expect("valid glass keyword regex")
});

/// Determines the [`ProductLine`] for a normalized product. Pure, total,
/// deterministic.
#[must_use]
pub fn classify(product: &UnifiedProduct) -> ProductLine {
    let has_glass_tag = product.category_tags.iter().any(|t| is_glass_type_tag(t));
    let has_wood_tag = product.category_tags.iter().any(|t| is_wood_type_tag(t));

    match (has_wood_tag, has_glass_tag) {
        (true, false) => ProductLine::WoodWork,
        (false, true) => ProductLine::StainedGlass,
        // Both or neither: the tags don't decide it.
        _ => infer_from_text(product),
    }
}

/// Keyword inference for records without a decisive type tag.
fn infer_from_text(product: &UnifiedProduct) -> ProductLine {
    let combined = [
        product.category_tags.join(" "),
        product.materials_tags.join(" "),
        product.title.clone(),
        product.description.clone(),
    ]
    .join(" ")
    .to_lowercase();

    let looks_wood = WOOD_KEYWORDS.is_match(&combined);
    let looks_glass = GLASS_KEYWORDS.is_match(&combined);

    match (looks_wood, looks_glass) {
        (true, false) => ProductLine::WoodWork,
        (false, true) => ProductLine::StainedGlass,
        // Ambiguous or no signal: default legacy products to stained glass
        // so existing catalog items remain visible.
        _ => ProductLine::StainedGlass,
    }
}

/// Tags marking the glass product line, matched after canonicalization.
pub(crate) fn is_glass_type_tag(tag: &str) -> bool {
    matches!(canonical(tag).as_str(), "stainedglass" | "glass")
}

/// Tags marking the wood product line, matched after canonicalization.
pub(crate) fn is_wood_type_tag(tag: &str) -> bool {
    matches!(canonical(tag).as_str(), "woodwork" | "wood" | "woodworking")
}

/// Lowercases and strips everything but ASCII alphanumerics, so
/// `"Stained Glass"`, `"stained-glass"` and `"STAINED GLASS"` all compare
/// equal.
fn canonical(tag: &str) -> String {
    tag.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// The product's descriptive category tags: everything that is not a
/// product-line marker. These are what facets and category filters see.
pub fn descriptive_tags(product: &UnifiedProduct) -> impl Iterator<Item = &str> {
    product
        .category_tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !is_glass_type_tag(tag) && !is_wood_type_tag(tag))
}
