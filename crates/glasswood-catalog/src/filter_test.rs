use glasswood_core::{ProductSource, RawId, RawMarketplaceItem};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn product(id: &str, tags: &[&str], title: &str, price: Decimal) -> UnifiedProduct {
    UnifiedProduct {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        price_amount: price,
        old_price: None,
        price_currency: "USD".to_string(),
        image_url: None,
        category_tags: tags.iter().map(|t| (*t).to_string()).collect(),
        materials_tags: vec![],
        is_featured: false,
        created_at: None,
        source: ProductSource::Marketplace(RawMarketplaceItem {
            id: RawId::Text(id.to_string()),
            title: title.to_string(),
            description: None,
            price_amount: None,
            old_price: None,
            price_currency: None,
            image_url: None,
            etsy_url: None,
            category: None,
            created_at: None,
            is_featured: None,
        }),
    }
}

fn glass_catalog() -> Vec<UnifiedProduct> {
    vec![
        product("1", &["Stained Glass", "Suncatchers"], "Hummingbird Suncatcher", dec!(85)),
        product("2", &["Stained Glass", "Panels"], "Iris Panel", dec!(320)),
        product("3", &["Stained Glass", "Suncatchers"], "Dragonfly Suncatcher", dec!(95)),
        product("4", &["Wood Work", "Boxes"], "Oak Keepsake Box", dec!(140)),
    ]
}

// ---------------------------------------------------------------------------
// Section restriction and facets
// ---------------------------------------------------------------------------

#[test]
fn facets_counted_over_selected_line_only() {
    let view = filter_and_facet(
        &glass_catalog(),
        &FilterParams::for_line(ProductLine::StainedGlass),
    );

    let labels: Vec<&str> = view.facets.iter().map(|f| f.label.as_str()).collect();
    // "On sale" is zero here and dropped; type-marker tags never appear.
    assert_eq!(labels, vec!["All", "Suncatchers", "Panels"]);
    assert_eq!(view.facets[0].count, 3);
    assert_eq!(view.facets[1].count, 2);
    assert_eq!(view.facets[2].count, 1);
}

#[test]
fn empty_section_yields_no_facets() {
    let catalog = vec![product("1", &["Stained Glass"], "Vase", dec!(50))];
    let view = filter_and_facet(&catalog, &FilterParams::for_line(ProductLine::WoodWork));
    assert!(view.facets.is_empty());
    assert!(view.products.is_empty());
}

#[test]
fn on_sale_facet_counts_discounted_products() {
    let mut catalog = glass_catalog();
    catalog[0].old_price = Some(dec!(110));
    let view = filter_and_facet(&catalog, &FilterParams::for_line(ProductLine::StainedGlass));
    let on_sale = view.facets.iter().find(|f| f.label == "On sale").unwrap();
    assert_eq!(on_sale.count, 1);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
fn category_filter_is_exact_membership() {
    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.category = CategoryFilter::Tag("Suncatchers".to_string());
    let view = filter_and_facet(&glass_catalog(), &params);
    let ids: Vec<&str> = view.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn type_marker_tag_never_matches_as_category() {
    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.category = CategoryFilter::Tag("Stained Glass".to_string());
    let view = filter_and_facet(&glass_catalog(), &params);
    assert!(view.products.is_empty());
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let mut catalog = glass_catalog();
    catalog[1].description = "A tall iris in purple glass".to_string();

    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.search = "IRIS".to_string();
    let view = filter_and_facet(&catalog, &params);
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].id, "2");

    params.search = "purple".to_string();
    let view = filter_and_facet(&catalog, &params);
    assert_eq!(view.products.len(), 1);
}

#[test]
fn price_bands_use_inclusive_boundaries() {
    assert!(PriceBand::Under100.matches(dec!(99.99)));
    assert!(!PriceBand::Under100.matches(dec!(100)));

    assert!(PriceBand::From100To250.matches(dec!(100)));
    assert!(PriceBand::From100To250.matches(dec!(250)));
    assert!(!PriceBand::From100To250.matches(dec!(250.01)));

    assert!(PriceBand::From250To500.matches(dec!(250)));
    assert!(PriceBand::From250To500.matches(dec!(500)));

    assert!(!PriceBand::Over500.matches(dec!(500)));
    assert!(PriceBand::Over500.matches(dec!(500.01)));
}

#[test]
fn filters_combine_with_and_semantics() {
    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.category = CategoryFilter::Tag("Suncatchers".to_string());
    params.search = "dragonfly".to_string();
    params.price = PriceBand::Under100;
    let view = filter_and_facet(&glass_catalog(), &params);
    let ids: Vec<&str> = view.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);
}

#[test]
fn filtered_set_is_subset_of_section() {
    // Every filtered product independently satisfies each predicate.
    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.price = PriceBand::Under100;
    let view = filter_and_facet(&glass_catalog(), &params);
    for p in &view.products {
        assert_eq!(crate::classify(p), ProductLine::StainedGlass);
        assert!(p.price_amount < dec!(100));
    }
}

#[test]
fn empty_result_is_valid() {
    let mut params = FilterParams::for_line(ProductLine::StainedGlass);
    params.search = "no such product anywhere".to_string();
    let view = filter_and_facet(&glass_catalog(), &params);
    assert!(view.products.is_empty());
    assert!(!view.facets.is_empty());
}

// ---------------------------------------------------------------------------
// Price band parsing
// ---------------------------------------------------------------------------

#[test]
fn price_band_parses_selector_values() {
    assert_eq!("any".parse::<PriceBand>().unwrap(), PriceBand::Any);
    assert_eq!("under100".parse::<PriceBand>().unwrap(), PriceBand::Under100);
    assert_eq!("100to250".parse::<PriceBand>().unwrap(), PriceBand::From100To250);
    assert_eq!("250to500".parse::<PriceBand>().unwrap(), PriceBand::From250To500);
    assert_eq!("over500".parse::<PriceBand>().unwrap(), PriceBand::Over500);
    assert!("cheap".parse::<PriceBand>().is_err());
}

// ---------------------------------------------------------------------------
// CatalogSelection
// ---------------------------------------------------------------------------

#[test]
fn switching_line_resets_category() {
    let mut selection = CatalogSelection::default();
    selection.select_category(CategoryFilter::Tag("Suncatchers".to_string()));
    selection.select_line(ProductLine::WoodWork);
    assert_eq!(selection.line(), ProductLine::WoodWork);
    assert_eq!(*selection.category(), CategoryFilter::All);
}

#[test]
fn selection_preserves_search_and_price_across_line_switch() {
    let mut selection = CatalogSelection::default();
    selection.search = "box".to_string();
    selection.price = PriceBand::Under100;
    selection.select_line(ProductLine::WoodWork);
    let params = selection.params();
    assert_eq!(params.search, "box");
    assert_eq!(params.price, PriceBand::Under100);
}

#[test]
fn category_filter_label_round_trip() {
    for filter in [
        CategoryFilter::All,
        CategoryFilter::OnSale,
        CategoryFilter::Tag("Boxes".to_string()),
    ] {
        assert_eq!(CategoryFilter::from_label(filter.label()), filter);
    }
}
