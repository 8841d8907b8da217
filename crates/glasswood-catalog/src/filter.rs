//! Facet computation and catalog filtering for one product line.
//!
//! Facet counts are taken over the section (line-restricted) set only, so
//! sidebar counts stay honest while search/price filters narrow the grid.
//! All active filters combine with AND semantics.

use glasswood_core::{ProductLine, UnifiedProduct};
use rust_decimal::Decimal;

use crate::classify::{classify, descriptive_tags};
use crate::sort::SortMode;

/// Sidebar facet labels for the two synthetic entries.
pub const FACET_ALL: &str = "All";
pub const FACET_ON_SALE: &str = "On sale";

/// The category selection: one of the two synthetic facets or a descriptive
/// tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    OnSale,
    Tag(String),
}

impl CategoryFilter {
    /// Parses a facet label back into a filter; inverse of [`Self::label`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            FACET_ALL => CategoryFilter::All,
            FACET_ON_SALE => CategoryFilter::OnSale,
            tag => CategoryFilter::Tag(tag.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => FACET_ALL,
            CategoryFilter::OnSale => FACET_ON_SALE,
            CategoryFilter::Tag(tag) => tag,
        }
    }
}

/// The price-range selector, with the storefront's fixed boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    Any,
    Under100,
    From100To250,
    From250To500,
    Over500,
}

impl PriceBand {
    fn matches(self, price: Decimal) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::Under100 => price < Decimal::from(100),
            PriceBand::From100To250 => {
                price >= Decimal::from(100) && price <= Decimal::from(250)
            }
            PriceBand::From250To500 => {
                price >= Decimal::from(250) && price <= Decimal::from(500)
            }
            PriceBand::Over500 => price > Decimal::from(500),
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(PriceBand::Any),
            "under100" => Ok(PriceBand::Under100),
            "100to250" => Ok(PriceBand::From100To250),
            "250to500" => Ok(PriceBand::From250To500),
            "over500" => Ok(PriceBand::Over500),
            other => Err(format!(
                "unknown price band \"{other}\" (expected any, under100, 100to250, 250to500 or over500)"
            )),
        }
    }
}

/// The full filter state a view hands to [`filter_and_facet`].
#[derive(Debug, Clone)]
pub struct FilterParams {
    pub line: ProductLine,
    pub category: CategoryFilter,
    /// Free-text search; empty matches everything.
    pub search: String,
    pub price: PriceBand,
}

impl FilterParams {
    #[must_use]
    pub fn for_line(line: ProductLine) -> Self {
        FilterParams {
            line,
            category: CategoryFilter::All,
            search: String::new(),
            price: PriceBand::Any,
        }
    }
}

/// One sidebar entry: a facet label and how many section products carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub label: String,
    pub count: usize,
}

/// Output of [`filter_and_facet`]: the sidebar facets and the filtered grid.
#[derive(Debug, Clone)]
pub struct FacetedView {
    /// `All`, `On sale`, then descriptive tags in first-seen order.
    /// Zero-count facets are dropped, `All` included — an empty section
    /// renders no sidebar at all.
    pub facets: Vec<Facet>,
    pub products: Vec<UnifiedProduct>,
}

/// Restricts the catalog to the selected product line, computes facet
/// counts over that section, and applies the category/search/price filters.
///
/// An empty result is a valid, non-error output.
#[must_use]
pub fn filter_and_facet(products: &[UnifiedProduct], params: &FilterParams) -> FacetedView {
    let section: Vec<&UnifiedProduct> = products
        .iter()
        .filter(|product| classify(product) == params.line)
        .collect();

    let facets = compute_facets(&section);

    let search = params.search.to_lowercase();
    let filtered = section
        .into_iter()
        .filter(|product| matches_category(product, &params.category))
        .filter(|product| matches_search(product, &search))
        .filter(|product| params.price.matches(product.price_amount))
        .cloned()
        .collect();

    FacetedView {
        facets,
        products: filtered,
    }
}

/// Facet counts over the section set only; type-marker tags are excluded.
fn compute_facets(section: &[&UnifiedProduct]) -> Vec<Facet> {
    let mut facets = vec![
        Facet {
            label: FACET_ALL.to_string(),
            count: section.len(),
        },
        Facet {
            label: FACET_ON_SALE.to_string(),
            count: section.iter().filter(|p| p.is_on_sale()).count(),
        },
    ];

    for product in section {
        for tag in descriptive_tags(product) {
            if let Some(facet) = facets.iter_mut().find(|f| f.label == tag) {
                facet.count += 1;
            } else {
                facets.push(Facet {
                    label: tag.to_string(),
                    count: 1,
                });
            }
        }
    }

    facets.retain(|facet| facet.count > 0);
    facets
}

fn matches_category(product: &UnifiedProduct, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::OnSale => product.is_on_sale(),
        CategoryFilter::Tag(tag) => descriptive_tags(product).any(|t| t == tag),
    }
}

/// Case-insensitive substring match against title OR description.
/// `search` must be pre-lowercased.
fn matches_search(product: &UnifiedProduct, search: &str) -> bool {
    search.is_empty()
        || product.title.to_lowercase().contains(search)
        || product.description.to_lowercase().contains(search)
}

/// The full view selection a storefront tab holds: line, category, search,
/// price and sort. Exists so the cross-field invariant lives in one place —
/// switching the product line resets the category, so a category selection
/// is never stale relative to the active line.
#[derive(Debug, Clone)]
pub struct CatalogSelection {
    line: ProductLine,
    category: CategoryFilter,
    pub search: String,
    pub price: PriceBand,
    pub sort: SortMode,
}

impl Default for CatalogSelection {
    fn default() -> Self {
        CatalogSelection {
            line: ProductLine::StainedGlass,
            category: CategoryFilter::All,
            search: String::new(),
            price: PriceBand::Any,
            sort: SortMode::Recent,
        }
    }
}

impl CatalogSelection {
    #[must_use]
    pub fn line(&self) -> ProductLine {
        self.line
    }

    #[must_use]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Switches the active product line. Always resets the category back to
    /// `All`, even for a no-op switch.
    pub fn select_line(&mut self, line: ProductLine) {
        self.line = line;
        self.category = CategoryFilter::All;
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    #[must_use]
    pub fn params(&self) -> FilterParams {
        FilterParams {
            line: self.line,
            category: self.category.clone(),
            search: self.search.clone(),
            price: self.price,
        }
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
