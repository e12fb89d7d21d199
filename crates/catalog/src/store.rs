use std::collections::{HashMap, HashSet};

use storefront_core::ProductId;

use crate::product::Product;

/// Maximum number of entries either search query returns.
pub const SEARCH_RESULT_CAP: usize = 10;

/// Catalog store abstraction.
///
/// The catalog is owned exclusively by its caller: mutations take `&mut self`
/// and there is no interior locking. Add/delete misses are reported through
/// boolean returns rather than errors.
pub trait Catalog {
    /// Add a product. Returns `false` (and leaves the stored record
    /// untouched) if a product with the same id already exists.
    fn add(&mut self, product: Product) -> bool;

    /// Delete the product with the given id. Returns `false` if absent.
    fn delete(&mut self, id: &ProductId) -> bool;

    /// Names of products whose `name` contains `needle` (case-sensitive),
    /// capped at [`SEARCH_RESULT_CAP`].
    ///
    /// Products sharing an exact name are disambiguated as
    /// `"<producer> - <name>"`; a uniquely named product appears as its bare
    /// name. The cap truncates to an arbitrary 10 entries of the unordered
    /// set.
    fn search_by_name(&self, needle: &str) -> HashSet<String>;

    /// Names of products whose `producer` contains `needle` (case-sensitive),
    /// ordered ascending by producer, capped at [`SEARCH_RESULT_CAP`].
    fn search_by_producer(&self, needle: &str) -> Vec<String>;
}

/// In-memory catalog keyed by product id.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn add(&mut self, product: Product) -> bool {
        if self.products.contains_key(product.id_typed()) {
            tracing::debug!(id = %product.id_typed(), "rejected duplicate product id");
            return false;
        }

        tracing::debug!(id = %product.id_typed(), name = product.name(), "product added");
        self.products.insert(product.id_typed().clone(), product);
        true
    }

    fn delete(&mut self, id: &ProductId) -> bool {
        let removed = self.products.remove(id).is_some();
        if removed {
            tracing::debug!(%id, "product deleted");
        }
        removed
    }

    fn search_by_name(&self, needle: &str) -> HashSet<String> {
        let matches: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.name().contains(needle))
            .collect();

        let mut name_counts: HashMap<&str, usize> = HashMap::new();
        for product in &matches {
            *name_counts.entry(product.name()).or_insert(0) += 1;
        }

        let mut results = HashSet::new();
        for product in matches {
            if name_counts[product.name()] > 1 {
                results.insert(format!("{} - {}", product.producer(), product.name()));
            } else {
                results.insert(product.name().to_string());
            }
        }

        if results.len() > SEARCH_RESULT_CAP {
            // Arbitrary 10 of an unordered set; no ordering is promised.
            return results.into_iter().take(SEARCH_RESULT_CAP).collect();
        }
        results
    }

    fn search_by_producer(&self, needle: &str) -> Vec<String> {
        let mut matches: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.producer().contains(needle))
            .collect();

        // Stable sort: equal producers keep their scan order.
        matches.sort_by(|a, b| a.producer().cmp(b.producer()));

        matches
            .into_iter()
            .map(|p| p.name().to_string())
            .take(SEARCH_RESULT_CAP)
            .collect()
    }
}
