//! One cashier session: reads commands, drives a [`PosService`], prints.

use std::io::{self, BufRead, Write};

use vendemas_events::{Event, Subscription};
use vendemas_pos::{PosEvent, PosService};

use crate::command::{Command, DrawerAction, USAGE};
use crate::render;

/// Whether the session should keep reading input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    pos: PosService,
    events: Subscription<PosEvent>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(pos: PosService, out: W) -> Self {
        let events = pos.subscribe();
        Self { pos, events, out }
    }

    pub fn pos(&self) -> &PosService {
        &self.pos
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn into_parts(self) -> (PosService, W) {
        (self.pos, self.out)
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?)? == Step::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Parse and run one line. Bad input is reported and the session goes on.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Step> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Step::Continue);
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                tracing::debug!(input = line, error = %e, "rejected command");
                writeln!(self.out, "error: {e}")?;
                Ok(Step::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> io::Result<Step> {
        match command {
            Command::List => render::products(&mut self.out, self.pos.products())?,
            Command::Cart => render::cart(&mut self.out, &self.pos)?,
            Command::Add { id, quantity } => {
                if self.pos.add_by_id(&id, quantity) {
                    render::cart(&mut self.out, &self.pos)?;
                } else {
                    writeln!(self.out, "no product with id {id}")?;
                }
            }
            Command::Update { id, quantity } => {
                if self.pos.cart_item(&id).is_none() {
                    writeln!(self.out, "{id} is not in the cart")?;
                } else {
                    self.pos.update_quantity(&id, quantity);
                    render::cart(&mut self.out, &self.pos)?;
                }
            }
            Command::Remove { id } => {
                if self.pos.cart_item(&id).is_none() {
                    writeln!(self.out, "{id} is not in the cart")?;
                } else {
                    self.pos.remove_from_cart(&id);
                    render::cart(&mut self.out, &self.pos)?;
                }
            }
            Command::Clear => {
                self.pos.clear_cart();
                render::cart(&mut self.out, &self.pos)?;
            }
            Command::Checkout => {
                if self.pos.cart().is_empty() {
                    writeln!(self.out, "cart is empty; nothing to check out")?;
                } else {
                    let receipt = self.pos.checkout();
                    render::receipt(&mut self.out, &receipt)?;
                }
            }
            Command::Drawer(action) => {
                match action {
                    DrawerAction::Open => self.pos.open_drawer(),
                    DrawerAction::Close => self.pos.close_drawer(),
                    DrawerAction::Toggle => self.pos.toggle_drawer(),
                }
                let state = if self.pos.is_open() { "open" } else { "closed" };
                writeln!(self.out, "drawer {state}")?;
            }
            Command::Help => writeln!(self.out, "{USAGE}")?,
            Command::Quit => {
                self.drain_events();
                return Ok(Step::Quit);
            }
        }

        self.drain_events();
        Ok(Step::Continue)
    }

    fn drain_events(&self) {
        for event in self.events.drain() {
            tracing::debug!(
                event_type = event.event_type(),
                version = event.version(),
                occurred_at = %event.occurred_at(),
                "pos event"
            );
        }
    }
}
