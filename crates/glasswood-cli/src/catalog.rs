//! Subcommand handlers: fetch the two feeds, run the catalog pipeline,
//! print the result.

use glasswood_catalog::{
    featured_lineup, filter_and_facet, normalize, sort_products, Carousel, CategoryFilter,
    FilterParams, PriceBand, SortMode,
};
use glasswood_client::StorefrontClient;
use glasswood_core::{AppConfig, ProductLine, UnifiedProduct};

async fn fetch_unified(client: &StorefrontClient) -> anyhow::Result<Vec<UnifiedProduct>> {
    let (manual, items) = client.fetch_catalog().await?;
    tracing::info!(
        manual = manual.len(),
        marketplace = items.len(),
        "normalizing catalog snapshot"
    );
    Ok(normalize(&manual, &items))
}

pub async fn list(
    client: &StorefrontClient,
    line: ProductLine,
    category: Option<&str>,
    search: &str,
    price: PriceBand,
    sort: SortMode,
    json: bool,
) -> anyhow::Result<()> {
    let unified = fetch_unified(client).await?;

    let params = FilterParams {
        line,
        category: category.map_or(CategoryFilter::All, CategoryFilter::from_label),
        search: search.to_string(),
        price,
    };
    let view = filter_and_facet(&unified, &params);
    let sorted = sort_products(&view.products, sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
        return Ok(());
    }

    if sorted.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    println!("{} — {} product(s)", line.label(), sorted.len());
    for product in &sorted {
        let featured = if product.is_featured { " *" } else { "" };
        println!(
            "  {:<8} {:>10} {}  [{}]{featured}",
            product.id,
            format!("{} {}", product.price_amount, product.price_currency),
            product.title,
            product.category_tags.join(", "),
        );
    }
    Ok(())
}

pub async fn facets(client: &StorefrontClient, line: ProductLine) -> anyhow::Result<()> {
    let unified = fetch_unified(client).await?;
    let view = filter_and_facet(&unified, &FilterParams::for_line(line));

    if view.facets.is_empty() {
        println!("No products in the {} section.", line.label());
        return Ok(());
    }

    println!("{}", line.label());
    for facet in &view.facets {
        println!("  {} ({})", facet.label, facet.count);
    }
    Ok(())
}

pub async fn featured(
    client: &StorefrontClient,
    limit: usize,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let unified = fetch_unified(client).await?;
    let lineup = featured_lineup(&unified, limit);

    if lineup.is_empty() {
        println!("No products to feature.");
        return Ok(());
    }

    println!("Featured lineup ({} slide(s)):", lineup.len());
    for (index, product) in lineup.iter().enumerate() {
        let featured = if product.is_featured { " *" } else { "" };
        println!("  {index}: {}{featured}", product.title);
    }

    let carousel = Carousel::new(lineup.len());
    println!(
        "Initial window (auto-advance every {} ms):",
        config.carousel_autoplay_ms
    );
    for entry in carousel.window(&lineup, config.carousel_max_offset) {
        let marker = if entry.offset == 0 { ">" } else { " " };
        println!(
            " {marker} {:+}: {} (slide {})",
            entry.offset, entry.product.title, entry.index
        );
    }
    Ok(())
}
