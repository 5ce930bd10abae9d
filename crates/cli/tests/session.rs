//! Black-box tests: feed a script to a session, inspect output and state.

use std::io::Cursor;

use vendemas_catalog::Catalog;
use vendemas_cli::{Session, Step};
use vendemas_core::{Money, ProductId};
use vendemas_pos::PosService;

fn pid(s: &str) -> ProductId {
    ProductId::new(s).unwrap()
}

fn run_script(script: &str) -> (PosService, String) {
    let mut session = Session::new(PosService::new(), Vec::new());
    session.run(Cursor::new(script)).unwrap();
    let (pos, out) = session.into_parts();
    (pos, String::from_utf8(out).unwrap())
}

#[test]
fn add_update_remove_walkthrough() {
    let (pos, out) = run_script(
        "add 1 2\n\
         update 1 5\n\
         remove 1\n",
    );

    assert!(out.contains("x2"));
    assert!(out.contains("items: 2  total: $50.00"));
    assert!(out.contains("items: 5  total: $125.00"));
    assert!(out.contains("cart is empty"));
    assert!(pos.cart().is_empty());
    assert_eq!(pos.product(&pid("1")).unwrap().stock(), 50);
}

#[test]
fn update_to_zero_removes_through_the_ui() {
    let (pos, out) = run_script("add 1 3\nupdate 1 0\n");
    assert!(out.ends_with("cart is empty (drawer closed)\n"));
    assert_eq!(pos.product(&pid("1")).unwrap().stock(), 50);
}

#[test]
fn checkout_prints_receipt_and_restores_stock() {
    let (pos, out) = run_script("add 1 2\nadd 5 1\ncheckout\n");

    assert!(out.contains("receipt "));
    assert!(out.contains("Tacos al Pastor x2 @ $25.00 = $50.00"));
    assert!(out.contains("total: $70.00 (3 items)"));
    assert!(pos.cart().is_empty());
    assert_eq!(pos.products(), Catalog::seeded().products());
}

#[test]
fn bad_input_is_reported_and_session_continues() {
    let (pos, out) = run_script("dance\nadd 1 zero\nadd 999\nremove 2\nadd 2\n");

    assert!(out.contains("error: validation failed: cannot understand `dance`"));
    assert!(out.contains("error: validation failed: not a quantity: zero"));
    assert!(out.contains("no product with id 999"));
    assert!(out.contains("2 is not in the cart"));
    assert_eq!(pos.cart_item_count(), 1);
    assert_eq!(pos.cart_total(), Money::from_pesos(35));
}

#[test]
fn quit_stops_reading() {
    let (pos, out) = run_script("add 1\nquit\nadd 1\n");
    assert_eq!(pos.cart_item_count(), 1);
    assert_eq!(out.matches("cart (drawer closed)").count(), 1);
}

#[test]
fn drawer_and_listing() {
    let mut session = Session::new(PosService::new(), Vec::new());
    assert_eq!(session.handle_line("drawer open").unwrap(), Step::Continue);
    assert_eq!(session.handle_line("list").unwrap(), Step::Continue);
    assert_eq!(session.handle_line("# comment").unwrap(), Step::Continue);
    assert_eq!(session.handle_line("").unwrap(), Step::Continue);
    assert_eq!(session.handle_line("exit").unwrap(), Step::Quit);
    assert!(session.pos().is_open());

    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("drawer open"));
    assert!(out.contains("Tacos al Pastor"));
    assert!(out.contains("stock 50"));
}

#[test]
fn custom_catalog_from_json() {
    let catalog = Catalog::from_json_str(
        r#"[{"id":"a","name":"Tamal Verde","price":2200,"stock":2}]"#,
    )
    .unwrap();
    let mut session = Session::new(PosService::with_catalog(catalog), Vec::new());

    session.handle_line("add a 3").unwrap();

    assert_eq!(session.pos().product(&pid("a")).unwrap().stock(), -1);
    assert_eq!(session.pos().cart_total(), Money::from_pesos(66));
}

#[test]
fn full_cart_line_keeps_stock_consistent() {
    let (pos, _) = run_script("add 1 4294967295\nadd 1 1\n");

    let reserved = pos.cart_item(&pid("1")).unwrap().quantity;
    assert_eq!(reserved, u32::MAX);
    assert_eq!(pos.product(&pid("1")).unwrap().stock() + i64::from(reserved), 50);
}
