//! Plain-text views of the register state.

use std::io::{self, Write};

use vendemas_catalog::Product;
use vendemas_pos::{CheckoutReceipt, PosService};

pub fn products(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    for p in products {
        writeln!(
            out,
            "{:>4}  {:<32} {:>9}  stock {}",
            p.id_typed().as_str(),
            p.name(),
            p.price().to_string(),
            p.stock()
        )?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, pos: &PosService) -> io::Result<()> {
    let drawer = if pos.is_open() { "open" } else { "closed" };
    if pos.cart().is_empty() {
        return writeln!(out, "cart is empty (drawer {drawer})");
    }

    writeln!(out, "cart (drawer {drawer})")?;
    for item in pos.cart() {
        writeln!(
            out,
            "{:>4}  {:<32} x{:<4} {:>9}",
            item.product_id().as_str(),
            item.product.name(),
            item.quantity,
            item.line_total().to_string()
        )?;
    }
    writeln!(
        out,
        "items: {}  total: {}",
        pos.cart_item_count(),
        pos.cart_total()
    )
}

pub fn receipt(out: &mut impl Write, receipt: &CheckoutReceipt) -> io::Result<()> {
    writeln!(out, "receipt {}", receipt.receipt_id)?;
    for line in &receipt.lines {
        writeln!(
            out,
            "  {} x{} @ {} = {}",
            line.name, line.quantity, line.unit_price, line.line_total
        )?;
    }
    writeln!(
        out,
        "total: {} ({} items)",
        receipt.total, receipt.item_count
    )
}
