use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use vendemas_core::{DomainError, DomainResult, Entity, ProductId};

use crate::error::CatalogError;
use crate::product::Product;
use crate::seed::seed_products;

/// Ordered list of products, unique by id.
///
/// Order is the display order of the product grid and never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in menu.
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    p.id_typed()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of `{ "id", "name", "price", "stock" }` (price in centavos).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::from_products(products)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Move a product's stock by `delta`.
    ///
    /// `Ok(Some(level))` is the new stock level, `Ok(None)` means the id is
    /// not in the catalog and nothing moved. A move that would leave the
    /// `i64` range is an error and leaves stock untouched.
    pub fn adjust_stock(&mut self, id: &ProductId, delta: i64) -> DomainResult<Option<i64>> {
        match self.products.iter_mut().find(|p| p.id() == id) {
            Some(product) => product.adjust_stock(delta).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendemas_core::Money;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn product(id: &str, stock: i64) -> Product {
        Product::new(pid(id), format!("Product {id}"), Money::from_pesos(10), stock).unwrap()
    }

    #[test]
    fn seeded_catalog_has_unique_ids() {
        let seeded = Catalog::seeded();
        assert!(!seeded.is_empty());
        assert!(Catalog::from_products(seeded.products().to_vec()).is_ok());
    }

    #[test]
    fn from_products_rejects_duplicates() {
        let err = Catalog::from_products(vec![product("1", 1), product("1", 2)]).unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains("duplicate product id 1") => {}
            other => panic!("Expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn adjust_stock_reports_new_level() {
        let mut catalog = Catalog::from_products(vec![product("1", 10)]).unwrap();
        assert_eq!(catalog.adjust_stock(&pid("1"), -4), Ok(Some(6)));
        assert_eq!(catalog.get(&pid("1")).unwrap().stock(), 6);
    }

    #[test]
    fn adjust_stock_ignores_unknown_ids() {
        let mut catalog = Catalog::from_products(vec![product("1", 10)]).unwrap();
        let before = catalog.clone();
        assert_eq!(catalog.adjust_stock(&pid("999"), -4), Ok(None));
        assert_eq!(catalog, before);
    }

    #[test]
    fn adjust_stock_out_of_range_leaves_catalog_alone() {
        let mut catalog = Catalog::from_products(vec![product("1", i64::MIN + 5)]).unwrap();
        let before = catalog.clone();
        assert!(catalog.adjust_stock(&pid("1"), -10).is_err());
        assert_eq!(catalog, before);
    }

    #[test]
    fn from_json_str_keeps_order() {
        let json = r#"[
            {"id":"b","name":"Sope","price":2800,"stock":5},
            {"id":"a","name":"Tamal","price":2200,"stock":9}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id_typed().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn from_json_str_surfaces_duplicates_as_domain_errors() {
        let json = r#"[
            {"id":"a","name":"Sope","price":2800,"stock":5},
            {"id":"a","name":"Tamal","price":2200,"stock":9}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Domain(DomainError::Conflict(_)))
        ));
    }

    #[test]
    fn from_json_str_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.contains("not/here.json")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
