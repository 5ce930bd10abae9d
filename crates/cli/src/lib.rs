//! Terminal front end for the VendeMás register.
//!
//! Plays the part of the POS screen: it parses what the cashier types, calls
//! the reconciler, and prints the product grid, the cart and receipts.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, DrawerAction};
pub use config::PosConfig;
pub use session::{Session, Step};
