//! `vendemas-core`: domain building blocks for the VendeMás point of sale.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, ReceiptId};
pub use money::Money;
pub use value_object::ValueObject;
