use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendemas_core::ProductId;
use vendemas_events::Event;

use crate::receipt::CheckoutReceipt;

/// Event: ItemAdded.
///
/// `stock` is the product's stock after the reservation, `None` when the
/// product is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product_id: ProductId,
    pub added: u32,
    pub cart_quantity: u32,
    pub stock: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub product_id: ProductId,
    pub from: u32,
    pub to: u32,
    pub stock: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
    pub quantity: u32,
    pub stock: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub lines: usize,
    pub units_restored: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CheckedOut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedOut {
    pub receipt: CheckoutReceipt,
}

/// Event: DrawerChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerChanged {
    pub open: bool,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosEvent {
    ItemAdded(ItemAdded),
    QuantityUpdated(QuantityUpdated),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
    CheckedOut(CheckedOut),
    DrawerChanged(DrawerChanged),
}

impl Event for PosEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PosEvent::ItemAdded(_) => "pos.cart.item_added",
            PosEvent::QuantityUpdated(_) => "pos.cart.quantity_updated",
            PosEvent::ItemRemoved(_) => "pos.cart.item_removed",
            PosEvent::CartCleared(_) => "pos.cart.cleared",
            PosEvent::CheckedOut(_) => "pos.cart.checked_out",
            PosEvent::DrawerChanged(_) => "pos.drawer.changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PosEvent::ItemAdded(e) => e.occurred_at,
            PosEvent::QuantityUpdated(e) => e.occurred_at,
            PosEvent::ItemRemoved(e) => e.occurred_at,
            PosEvent::CartCleared(e) => e.occurred_at,
            PosEvent::CheckedOut(e) => e.receipt.completed_at,
            PosEvent::DrawerChanged(e) => e.occurred_at,
        }
    }
}
