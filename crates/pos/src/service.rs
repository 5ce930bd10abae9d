use std::sync::Arc;

use chrono::Utc;

use vendemas_catalog::{Catalog, Product};
use vendemas_core::{Money, ProductId};
use vendemas_events::{EventBus, InMemoryEventBus, Subscription};

use crate::cart::CartItem;
use crate::event::{
    CartCleared, CheckedOut, DrawerChanged, ItemAdded, ItemRemoved, PosEvent, QuantityUpdated,
};
use crate::receipt::CheckoutReceipt;

/// Cart/inventory reconciler for one register session.
///
/// Invariant, for every catalog product after every call:
/// `stock + (cart quantity of that product) == stock at construction`.
///
/// Stock is *not* guarded against going negative: adding more than is on the
/// shelf is allowed and logged at `warn`.
#[derive(Debug)]
pub struct PosService {
    catalog: Catalog,
    cart: Vec<CartItem>,
    drawer_open: bool,
    bus: Arc<InMemoryEventBus<PosEvent>>,
}

impl PosService {
    /// Register seeded with the built-in menu and an empty cart.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Vec::new(),
            drawer_open: false,
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn subscribe(&self) -> Subscription<PosEvent> {
        self.bus.subscribe()
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn cart_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.product_id() == id)
    }

    pub fn cart_total(&self) -> Money {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    pub fn cart_item_count(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_open(&self) -> bool {
        self.drawer_open
    }

    /// Reserve `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same id. The product does not
    /// have to be in the catalog; if it isn't, no stock moves. A zero
    /// quantity is a no-op.
    ///
    /// A cart line holds at most `u32::MAX` units; only what fits is
    /// reserved, and stock moves by exactly that amount.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        let id = product.id_typed().clone();
        let current = self.cart_item(&id).map_or(0, |item| item.quantity);
        let added = quantity.min(u32::MAX - current);
        if added == 0 {
            if quantity > 0 {
                tracing::warn!(product_id = %id, quantity, "cart line is full; nothing added");
            }
            return;
        }
        if added < quantity {
            tracing::warn!(product_id = %id, requested = quantity, added, "cart line capped");
        }

        let Some(stock) = self.move_stock(&id, -i64::from(added)) else {
            return;
        };

        let cart_quantity = current + added;
        match self.cart.iter_mut().find(|item| item.product_id() == &id) {
            Some(item) => item.quantity = cart_quantity,
            None => self.cart.push(CartItem {
                product: product.clone(),
                quantity: cart_quantity,
            }),
        }
        tracing::debug!(product_id = %id, added, cart_quantity, "item added to cart");

        self.publish(PosEvent::ItemAdded(ItemAdded {
            product_id: id,
            added,
            cart_quantity,
            stock,
            occurred_at: Utc::now(),
        }));
    }

    /// Look `id` up in the catalog and add it. Unknown ids are ignored.
    ///
    /// Returns whether the product was found.
    pub fn add_by_id(&mut self, id: &ProductId, quantity: u32) -> bool {
        let Some(product) = self.catalog.get(id).cloned() else {
            return false;
        };
        self.add_to_cart(&product, quantity);
        true
    }

    /// Set the cart quantity of `id` to an absolute value.
    ///
    /// Stock moves by the difference. A quantity of zero removes the line.
    /// Ids not in the cart are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(id);
            return;
        }

        let Some(from) = self.cart_item(id).map(|item| item.quantity) else {
            return;
        };
        if from == quantity {
            return;
        }

        let delta = i64::from(from) - i64::from(quantity);
        let Some(stock) = self.move_stock(id, delta) else {
            return;
        };
        if let Some(item) = self.cart.iter_mut().find(|item| item.product_id() == id) {
            item.quantity = quantity;
        }
        tracing::debug!(product_id = %id, from, to = quantity, "cart quantity updated");

        self.publish(PosEvent::QuantityUpdated(QuantityUpdated {
            product_id: id.clone(),
            from,
            to: quantity,
            stock,
            occurred_at: Utc::now(),
        }));
    }

    /// Drop the line for `id` and return its units to stock. Ids not in the
    /// cart are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let Some(pos) = self.cart.iter().position(|item| item.product_id() == id) else {
            return;
        };
        let item = self.cart.remove(pos);

        // Releasing what was reserved always fits: stock + reserved is the
        // level the product started with.
        let stock = self.move_stock(id, i64::from(item.quantity)).flatten();
        tracing::debug!(product_id = %id, quantity = item.quantity, "item removed from cart");

        self.publish(PosEvent::ItemRemoved(ItemRemoved {
            product_id: id.clone(),
            quantity: item.quantity,
            stock,
            occurred_at: Utc::now(),
        }));
    }

    /// Return every reserved unit to stock and empty the cart.
    pub fn clear_cart(&mut self) {
        if self.cart.is_empty() {
            return;
        }

        let lines = self.cart.len();
        let mut units_restored = 0u64;
        for item in std::mem::take(&mut self.cart) {
            self.move_stock(item.product_id(), i64::from(item.quantity));
            units_restored += u64::from(item.quantity);
        }
        tracing::debug!(lines, units_restored, "cart cleared");

        self.publish(PosEvent::CartCleared(CartCleared {
            lines,
            units_restored,
            occurred_at: Utc::now(),
        }));
    }

    /// Record the current cart as a sale, then clear it.
    ///
    /// Recording means logging and publishing the receipt; there is no
    /// payment step. Clearing follows [`clear_cart`](Self::clear_cart), so
    /// reserved units go back to stock.
    pub fn checkout(&mut self) -> CheckoutReceipt {
        let receipt = CheckoutReceipt::from_cart(&self.cart, Utc::now());

        match serde_json::to_string(&receipt) {
            Ok(json) => tracing::info!(
                receipt_id = %receipt.receipt_id,
                total = %receipt.total,
                items = receipt.item_count,
                receipt = %json,
                "checkout completed"
            ),
            Err(e) => tracing::warn!(
                receipt_id = %receipt.receipt_id,
                error = %e,
                "checkout completed; receipt not serializable"
            ),
        }

        self.publish(PosEvent::CheckedOut(CheckedOut {
            receipt: receipt.clone(),
        }));
        self.clear_cart();
        receipt
    }

    pub fn toggle_drawer(&mut self) {
        self.set_drawer(!self.drawer_open);
    }

    pub fn open_drawer(&mut self) {
        self.set_drawer(true);
    }

    pub fn close_drawer(&mut self) {
        self.set_drawer(false);
    }

    fn set_drawer(&mut self, open: bool) {
        if self.drawer_open == open {
            return;
        }
        self.drawer_open = open;
        self.publish(PosEvent::DrawerChanged(DrawerChanged {
            open,
            occurred_at: Utc::now(),
        }));
    }

    /// Move stock and report the new level (`Some(None)` for products
    /// outside the catalog). `None` means the move was refused and the
    /// caller must leave the cart as it is.
    fn move_stock(&mut self, id: &ProductId, delta: i64) -> Option<Option<i64>> {
        match self.catalog.adjust_stock(id, delta) {
            Ok(stock) => {
                if let Some(level) = stock.filter(|level| *level < 0 && delta < 0) {
                    tracing::warn!(product_id = %id, stock = level, "stock oversold");
                }
                Some(stock)
            }
            Err(e) => {
                tracing::warn!(product_id = %id, delta, error = %e, "stock move refused");
                None
            }
        }
    }

    fn publish(&self, event: PosEvent) {
        if let Err(e) = self.bus.publish(event) {
            tracing::warn!(error = %e, "failed to publish pos event");
        }
    }
}

impl Default for PosService {
    fn default() -> Self {
        Self::new()
    }
}
