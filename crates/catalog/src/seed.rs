//! The built-in menu the register starts with when no catalog file is given.

use vendemas_core::{Money, ProductId};

use crate::product::Product;

/// `(id, name, price in pesos, stock)`
const SEED: &[(&str, &str, u64, i64)] = &[
    ("1", "Tacos al Pastor", 25, 50),
    ("2", "Quesadilla de Flor de Calabaza", 35, 30),
    ("3", "Torta de Milanesa", 55, 20),
    ("4", "Elote Preparado", 30, 40),
    ("5", "Agua de Horchata", 20, 60),
    ("6", "Café de Olla", 18, 45),
];

pub(crate) fn seed_products() -> Vec<Product> {
    SEED.iter()
        .filter_map(|&(id, name, pesos, stock)| {
            let id = ProductId::new(id).ok()?;
            Product::new(id, name, Money::from_pesos(pesos), stock).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_row_is_valid() {
        assert_eq!(seed_products().len(), SEED.len());
    }

    #[test]
    fn first_product_is_tacos_al_pastor() {
        let products = seed_products();
        let tacos = &products[0];
        assert_eq!(tacos.id_typed().as_str(), "1");
        assert_eq!(tacos.name(), "Tacos al Pastor");
        assert_eq!(tacos.price(), Money::from_pesos(25));
        assert_eq!(tacos.stock(), 50);
    }
}
