use serde::{Deserialize, Serialize};

use vendemas_catalog::Product;
use vendemas_core::{Money, ProductId};

/// One cart line: a product snapshot and how many units are reserved.
///
/// The snapshot is taken when the product is first added; its `stock` field
/// goes stale immediately and is never read back. Live stock lives in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> &ProductId {
        self.product.id_typed()
    }

    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_price_times_quantity() {
        let product = Product::new(
            ProductId::new("1").unwrap(),
            "Tacos al Pastor",
            Money::from_pesos(25),
            50,
        )
        .unwrap();
        let item = CartItem {
            product,
            quantity: 3,
        };
        assert_eq!(item.line_total(), Money::from_pesos(75));
        assert_eq!(item.product_id().as_str(), "1");
    }
}
