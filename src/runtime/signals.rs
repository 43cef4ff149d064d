//! Host signal subscriptions
//!
//! The host (a window, or a test harness) dispatches [`Signal`]s into a
//! [`SignalHub`]. Listeners are registered per [`SignalKind`] and stay
//! registered until their [`Subscription`] is released.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A signal delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// The surface size may have changed. Listeners re-query dimensions.
    Resize,
    /// Pointer moved, in surface-relative logical pixels
    PointerMove { x: f64, y: f64 },
    PointerLeave,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Resize => SignalKind::Resize,
            Signal::PointerMove { .. } => SignalKind::PointerMove,
            Signal::PointerLeave => SignalKind::PointerLeave,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Resize,
    PointerMove,
    PointerLeave,
}

struct Listener {
    id: u64,
    kind: SignalKind,
    handler: Box<dyn FnMut(&Signal)>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Proof of registration, released explicitly with [`Subscription::release`]
#[must_use = "a dropped subscription can never be released"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: SignalKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Deregister the listener. Returns false if the hub is already gone.
    pub fn release(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|listener| listener.id != self.id);
        before != registry.listeners.len()
    }
}

/// Fan-out point for host signals
///
/// Handlers run synchronously inside [`SignalHub::dispatch`] and must not
/// subscribe or release while running.
#[derive(Default)]
pub struct SignalHub {
    registry: Rc<RefCell<Registry>>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        kind: SignalKind,
        handler: impl FnMut(&Signal) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            kind,
            handler: Box::new(handler),
        });
        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a signal to every listener of its kind
    ///
    /// Returns how many listeners received it.
    pub fn dispatch(&self, signal: Signal) -> usize {
        let kind = signal.kind();
        let mut registry = self.registry.borrow_mut();
        let mut delivered = 0;
        for listener in registry.listeners.iter_mut().filter(|l| l.kind == kind) {
            (listener.handler)(&signal);
            delivered += 1;
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn listeners_for(&self, kind: SignalKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let hub = SignalHub::new();
        let moves = Rc::new(Cell::new(0));
        let counter = Rc::clone(&moves);
        let _sub = hub.subscribe(SignalKind::PointerMove, move |_| {
            counter.set(counter.get() + 1)
        });

        assert_eq!(hub.dispatch(Signal::PointerMove { x: 1.0, y: 2.0 }), 1);
        assert_eq!(hub.dispatch(Signal::Resize), 0);
        assert_eq!(moves.get(), 1);
    }

    #[test]
    fn test_release_removes_listener() {
        let hub = SignalHub::new();
        let sub = hub.subscribe(SignalKind::Resize, |_| {});
        let other = hub.subscribe(SignalKind::Resize, |_| {});
        assert_eq!(hub.listeners_for(SignalKind::Resize), 2);

        assert!(sub.release());
        assert_eq!(hub.listener_count(), 1);
        assert!(other.release());
        assert_eq!(hub.dispatch(Signal::Resize), 0);
    }

    #[test]
    fn test_release_after_hub_dropped() {
        let hub = SignalHub::new();
        let sub = hub.subscribe(SignalKind::PointerLeave, |_| {});
        drop(hub);
        assert!(!sub.release());
    }
}
