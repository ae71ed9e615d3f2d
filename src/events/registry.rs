//! Listener registry.
//!
//! The registry stores listeners and dispatches each event synchronously to
//! every listener subscribed to its kind. Drivers subscribe once at startup
//! and may unsubscribe when they are torn down.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::event::{EngineEvent, EventKind};

/// Unique identifier for a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Callback invoked with each matching event.
pub type ListenerFn = Box<dyn FnMut(&EngineEvent)>;

struct Listener {
    kinds: SmallVec<[EventKind; 8]>,
    callback: ListenerFn,
}

/// Registry for event listeners.
///
/// Listeners for the same kind run in registration order. Dispatching to a
/// kind nobody listens for is a no-op.
#[derive(Default)]
pub struct ListenerRegistry {
    /// All registered listeners.
    listeners: FxHashMap<ListenerId, Listener>,

    /// Index by event kind, in registration order.
    by_kind: FxHashMap<EventKind, Vec<ListenerId>>,

    /// Next listener ID to allocate.
    next_id: u32,
}

impl ListenerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one event kind.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&EngineEvent) + 'static,
    ) -> ListenerId {
        self.register(SmallVec::from_slice(&[kind]), Box::new(callback))
    }

    /// Register a listener for several event kinds.
    pub fn subscribe_many(
        &mut self,
        kinds: &[EventKind],
        callback: impl FnMut(&EngineEvent) + 'static,
    ) -> ListenerId {
        let mut unique: SmallVec<[EventKind; 8]> = SmallVec::new();
        for &kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        self.register(unique, Box::new(callback))
    }

    /// Register a listener for every event kind.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&EngineEvent) + 'static) -> ListenerId {
        self.register(SmallVec::from_slice(&EventKind::ALL), Box::new(callback))
    }

    fn register(&mut self, kinds: SmallVec<[EventKind; 8]>, callback: ListenerFn) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;

        for kind in &kinds {
            self.by_kind.entry(*kind).or_default().push(id);
        }

        self.listeners.insert(id, Listener { kinds, callback });
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(listener) = self.listeners.remove(&id) else {
            return false;
        };

        let mut empty_kinds: SmallVec<[EventKind; 8]> = SmallVec::new();
        for kind in &listener.kinds {
            if let Some(list) = self.by_kind.get_mut(kind) {
                list.retain(|&lid| lid != id);
                if list.is_empty() {
                    empty_kinds.push(*kind);
                }
            }
        }
        for kind in empty_kinds {
            self.by_kind.remove(&kind);
        }
        true
    }

    /// Deliver an event to every listener subscribed to its kind.
    pub fn dispatch(&mut self, event: &EngineEvent) {
        let Some(ids) = self.by_kind.get(&event.kind()) else {
            return;
        };

        trace!(kind = %event.kind(), listeners = ids.len(), "dispatching event");

        for id in ids {
            if let Some(listener) = self.listeners.get_mut(id) {
                (listener.callback)(event);
            }
        }
    }

    /// Number of listeners subscribed to `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// Get total listener count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::ContainerId;

    #[test]
    fn test_dispatch_by_kind() {
        let mut registry = ListenerRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        registry.subscribe(EventKind::StartTurn, move |e| sink.borrow_mut().push(*e));

        registry.dispatch(&EngineEvent::ItemReset);
        registry.dispatch(&EngineEvent::StartTurn);

        assert_eq!(*seen.borrow(), vec![EngineEvent::StartTurn]);
    }

    #[test]
    fn test_registration_order() {
        let mut registry = ListenerRegistry::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..3 {
            let sink = Rc::clone(&order);
            registry.subscribe(EventKind::ResetComplete, move |_| sink.borrow_mut().push(tag));
        }

        registry.dispatch(&EngineEvent::ResetComplete);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_subscribe_all_and_many() {
        let mut registry = ListenerRegistry::new();
        let all = Rc::new(RefCell::new(0));
        let some = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&all);
        registry.subscribe_all(move |_| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&some);
        registry.subscribe_many(
            &[EventKind::CheckingItem, EventKind::CheckingItem, EventKind::SelectedItem],
            move |_| *sink.borrow_mut() += 1,
        );

        assert_eq!(registry.listener_count(EventKind::CheckingItem), 2);
        assert_eq!(registry.listener_count(EventKind::GameOver), 1);

        registry.dispatch(&EngineEvent::CheckingItem { id: ContainerId(0) });
        registry.dispatch(&EngineEvent::SelectedItem { id: ContainerId(0) });
        registry.dispatch(&EngineEvent::GameOver { strikes: 3 });

        assert_eq!(*all.borrow(), 3);
        assert_eq!(*some.borrow(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry = ListenerRegistry::new();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let id = registry.subscribe_all(move |_| *sink.borrow_mut() += 1);
        assert_eq!(registry.len(), 1);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
        assert_eq!(registry.listener_count(EventKind::ItemReset), 0);

        registry.dispatch(&EngineEvent::ItemReset);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let mut registry = ListenerRegistry::new();
        registry.dispatch(&EngineEvent::StartTurn);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_not_reused() {
        let mut registry = ListenerRegistry::new();
        let first = registry.subscribe(EventKind::StartTurn, |_| {});
        registry.unsubscribe(first);
        let second = registry.subscribe(EventKind::StartTurn, |_| {});
        assert_ne!(first, second);
    }
}
