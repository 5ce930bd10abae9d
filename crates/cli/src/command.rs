//! Register commands as typed by the cashier.

use core::str::FromStr;

use vendemas_core::{DomainError, ProductId};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawerAction {
    Open,
    Close,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the product grid.
    List,
    /// Show the cart.
    Cart,
    Add { id: ProductId, quantity: u32 },
    Update { id: ProductId, quantity: u32 },
    Remove { id: ProductId },
    Clear,
    Checkout,
    Drawer(DrawerAction),
    Help,
    Quit,
}

pub const USAGE: &str = "\
commands:
  list                          show products and stock
  cart                          show the cart
  add <id> [qty]                add qty (default 1) of a product
  update <id> <qty>             set the quantity of a cart line (0 removes it)
  remove <id>                   remove a cart line
  clear                         empty the cart
  checkout                      record the sale and empty the cart
  drawer [open|close|toggle]    show or hide the cart drawer
  help                          this text
  quit                          leave";

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(DomainError::validation("empty command"));
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("list" | "ls", []) => Command::List,
            ("cart", []) => Command::Cart,
            ("add", [id]) => Command::Add {
                id: id.parse()?,
                quantity: 1,
            },
            ("add", [id, qty]) => {
                let quantity = parse_quantity(qty)?;
                if quantity <= 0 {
                    return Err(DomainError::validation("quantity must be positive"));
                }
                Command::Add {
                    id: id.parse()?,
                    quantity: to_u32(quantity)?,
                }
            }
            ("update" | "set", [id, qty]) => {
                let id: ProductId = id.parse()?;
                // Zero or less means the line goes away.
                match parse_quantity(qty)? {
                    q if q <= 0 => Command::Remove { id },
                    q => Command::Update {
                        id,
                        quantity: to_u32(q)?,
                    },
                }
            }
            ("remove" | "rm", [id]) => Command::Remove { id: id.parse()? },
            ("clear", []) => Command::Clear,
            ("checkout" | "pay", []) => Command::Checkout,
            ("drawer", []) => Command::Drawer(DrawerAction::Toggle),
            ("drawer", [action]) => Command::Drawer(match action.to_ascii_lowercase().as_str() {
                "open" => DrawerAction::Open,
                "close" => DrawerAction::Close,
                "toggle" => DrawerAction::Toggle,
                other => {
                    return Err(DomainError::validation(format!(
                        "unknown drawer action: {other}"
                    )));
                }
            }),
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (verb, _) => {
                return Err(DomainError::validation(format!(
                    "cannot understand `{verb}` with {} argument(s); try `help`",
                    args.len()
                )));
            }
        };
        Ok(command)
    }
}

fn parse_quantity(raw: &str) -> Result<i64, DomainError> {
    raw.parse::<i64>()
        .map_err(|_| DomainError::validation(format!("not a quantity: {raw}")))
}

fn to_u32(quantity: i64) -> Result<u32, DomainError> {
    u32::try_from(quantity)
        .map_err(|_| DomainError::validation(format!("quantity too large: {quantity}")))
}
