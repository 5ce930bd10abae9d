use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendemas_core::{Money, ProductId, ReceiptId};

use crate::cart::CartItem;

/// Receipt line: what was sold, at which price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Record of a completed checkout.
///
/// No payment happens here; the receipt is only logged and published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub receipt_id: ReceiptId,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub item_count: u64,
    pub completed_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    pub fn from_cart(cart: &[CartItem], completed_at: DateTime<Utc>) -> Self {
        let lines: Vec<ReceiptLine> = cart
            .iter()
            .map(|item| ReceiptLine {
                product_id: item.product_id().clone(),
                name: item.product.name().to_string(),
                unit_price: item.unit_price(),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            receipt_id: ReceiptId::new(),
            total: lines.iter().map(|l| l.line_total).sum(),
            item_count: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            lines,
            completed_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
