//! Event notifications.
//!
//! The engine reports every observable change as an [`EngineEvent`]:
//!
//! 1. **Events**: Tagged variants that carry their own payload
//! 2. **Registry**: Listeners subscribed per [`EventKind`], called inline
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use shell_game::core::ContainerId;
//! use shell_game::events::{EngineEvent, EventKind, ListenerRegistry};
//!
//! let mut registry = ListenerRegistry::new();
//! let checks = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&checks);
//! registry.subscribe(EventKind::CheckingItem, move |_| sink.set(sink.get() + 1));
//!
//! registry.dispatch(&EngineEvent::CheckingItem { id: ContainerId::new(0) });
//! registry.dispatch(&EngineEvent::StartTurn);
//!
//! assert_eq!(checks.get(), 1);
//! ```

pub mod event;
pub mod registry;

pub use event::{EngineEvent, EventKind};
pub use registry::{ListenerFn, ListenerId, ListenerRegistry};
