//! Change notification for POS state.
//!
//! The point of sale is single-threaded and in-memory; observers (a screen,
//! a logger, a test) subscribe to a bus and get a copy of every event the
//! reconciler publishes.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
