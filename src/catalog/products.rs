use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::Product;

const BUILTIN_CATALOG: &str = include_str!("../../data/products.json");

/// Read-only, ordered product list with id lookup.
///
/// Ids are unique; the list is never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    /// Product id to position in `products`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid records.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if !product.is_valid() {
                return Err(StoreError::InvalidInput(format!(
                    "invalid product record: {}",
                    product.debug_string()
                )));
            }
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(StoreError::DuplicateProductId(product.id.clone()));
            }
        }

        debug!(products = products.len(), "catalog built");
        Ok(Self { products, index })
    }

    /// The six-pouch catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(BUILTIN_CATALOG)?;
        Self::new(products)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Distinct allergens across the catalog, lowercased and sorted.
    pub fn allergens(&self) -> Vec<String> {
        self.products
            .iter()
            .flat_map(|p| p.allergens.iter())
            .map(|a| a.to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
