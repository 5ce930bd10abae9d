use serde::{Deserialize, Serialize};

use vendemas_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// A sellable product with its current stock.
///
/// `stock` is signed: the register lets a cashier sell past what is on the
/// shelf, and the count then goes negative rather than blocking the sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
}

/// Wire shape of a product; validated into [`Product`] on deserialize.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.id, r.name, r.price, r.stock)
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {id}: name cannot be empty"
            )));
        }
        Ok(Self {
            id,
            name,
            price,
            stock,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Move stock by `delta` (negative = reserve, positive = release).
    ///
    /// A move past the `i64` range is refused and leaves stock untouched.
    pub(crate) fn adjust_stock(&mut self, delta: i64) -> DomainResult<i64> {
        let stock = self.stock.checked_add(delta).ok_or_else(|| {
            DomainError::validation(format!(
                "product {}: stock {} cannot move by {delta}",
                self.id, self.stock
            ))
        })?;
        self.stock = stock;
        Ok(stock)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
