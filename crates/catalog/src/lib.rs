//! Product catalog for the point of sale.
//!
//! The catalog is the live list of sellable products and their stock. It is
//! seeded once (either the built-in menu or a JSON file) and afterwards only
//! the cart reconciler moves stock.

pub mod catalog;
pub mod error;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use product::Product;
