use serde::Deserialize;

use crate::models::Product;

/// Number of products revealed per "load more" step.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keeps the input order. Callers pass the catalog newest-first
    /// (`created_at` descending), so this is the identity ordering.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

/// One filter dimension per field; an empty set (or empty search string)
/// places no restriction on that dimension.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub search_query: String,
    pub brands: Vec<String>,
    /// Inclusive `[min, max]` bound on `offer_price`. A range with
    /// `min > max` matches nothing; that is a valid (empty) query, not
    /// an error.
    pub price_range: (f64, f64),
    pub qualities: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            brands: Vec::new(),
            price_range: (0.0, f64::INFINITY),
            qualities: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl FilterSpec {
    pub fn matches(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        let query = self.search_query.to_lowercase();

        (query.is_empty() || product.name.to_lowercase().contains(&query))
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && product.offer_price >= min
            && product.offer_price <= max
            && (self.qualities.is_empty() || self.qualities.contains(&product.quality))
            && (self.categories.is_empty() || self.categories.contains(&product.category))
    }
}

/// Filters and sorts the catalog snapshot. Pure; re-run whenever either
/// input changes. Sorts are stable, so equal offer prices keep their
/// relative input order.
pub fn apply(products: &[Product], filter: &FilterSpec, sort: SortOption) -> Vec<Product> {
    let mut result: Vec<Product> = products.to_vec();

    match sort {
        SortOption::Newest => {}
        SortOption::PriceAsc => {
            result.sort_by(|a, b| a.offer_price.total_cmp(&b.offer_price));
        }
        SortOption::PriceDesc => {
            result.sort_by(|a, b| b.offer_price.total_cmp(&a.offer_price));
        }
    }

    result.retain(|p| filter.matches(p));
    result
}

/// Caller-side pagination cursor over the engine's full ordered output.
///
/// Must be `reset` whenever the filtered result set changes, so a prior
/// scroll position does not leak across filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    count: usize,
}

impl VisibleWindow {
    pub fn new() -> Self {
        Self { count: PAGE_SIZE }
    }

    pub fn reset(&mut self) {
        self.count = PAGE_SIZE;
    }

    pub fn grow(&mut self) {
        self.count += PAGE_SIZE;
    }

    pub fn slice<'a>(&self, items: &'a [Product]) -> &'a [Product] {
        &items[..self.count.min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.count
    }
}

impl Default for VisibleWindow {
    fn default() -> Self {
        Self::new()
    }
}
