//! Resolution of the polymorphic category/materials field into a canonical
//! tag list.
//!
//! The backend stores these fields as free-form text, so four shapes exist
//! in live data (see `glasswood_core::raw`). The rule here is pure and
//! total: a malformed JSON-looking string silently falls through to the
//! comma/single-string branches, and anything empty resolves to no tags.

use glasswood_core::RawTags;

/// Resolves a raw category/materials value into trimmed, deduplicated,
/// non-empty tags in source order.
#[must_use]
pub fn normalize_tags(field: Option<&RawTags>) -> Vec<String> {
    let entries = match field {
        None => Vec::new(),
        Some(RawTags::Many(values)) => values.clone(),
        Some(RawTags::One(text)) => split_text(text),
    };

    let mut tags: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() || tags.iter().any(|t| t == trimmed) {
            continue;
        }
        tags.push(trimmed.to_string());
    }
    tags
}

/// Splits a single string value: JSON-encoded array first, then comma list,
/// then bare single tag.
fn split_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(serde_json::Value::Array(values)) = serde_json::from_str(trimmed) {
            return values
                .into_iter()
                .filter_map(|value| match value {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
        }
        // Not valid JSON after all; fall through to the comma/single rules.
    }

    if trimmed.contains(',') {
        return trimmed.split(',').map(str::to_string).collect();
    }

    vec![trimmed.to_string()]
}
