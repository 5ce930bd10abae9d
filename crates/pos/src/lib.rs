//! Point-of-sale cart/inventory reconciler.
//!
//! [`PosService`] owns the catalog and the cart and keeps them in lock-step:
//! whatever quantity sits in the cart is missing from the product's stock,
//! and goes back when the item leaves the cart.
//!
//! All operations are synchronous, in-memory and infallible. Unknown product
//! ids are silently ignored.

pub mod cart;
pub mod event;
pub mod receipt;
pub mod service;

pub use cart::CartItem;
pub use event::{
    CartCleared, CheckedOut, DrawerChanged, ItemAdded, ItemRemoved, PosEvent, QuantityUpdated,
};
pub use receipt::{CheckoutReceipt, ReceiptLine};
pub use service::PosService;
