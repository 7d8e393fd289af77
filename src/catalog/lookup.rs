use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::models::Product;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Result of resolving a user-typed product query.
#[derive(Debug, Clone, Copy)]
pub enum ProductMatch<'a> {
    /// Matched by id or by exact (case-insensitive) name.
    Exact(&'a Product),
    /// Closest name above the similarity threshold.
    Fuzzy { product: &'a Product, score: f64 },
}

impl<'a> ProductMatch<'a> {
    pub fn product(&self) -> &'a Product {
        match self {
            ProductMatch::Exact(p) => p,
            ProductMatch::Fuzzy { product, .. } => product,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ProductMatch::Exact(_))
    }
}

/// Resolve a query to a product: id first, then exact name, then fuzzy name.
pub fn find_product<'a>(catalog: &'a Catalog, query: &str) -> Option<ProductMatch<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(product) = catalog.get(query) {
        return Some(ProductMatch::Exact(product));
    }

    let needle = query.to_lowercase();
    if let Some(product) = catalog.iter().find(|p| p.name.to_lowercase() == needle) {
        return Some(ProductMatch::Exact(product));
    }

    catalog
        .iter()
        .map(|p| (p, jaro_winkler(&p.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(product, score)| ProductMatch::Fuzzy { product, score })
}
