//! Listener registry with ordered publish.
//!
//! # Invariants
//! - Listeners are invoked in registration order.
//! - Registering the same closure twice yields two notifications.
//! - `publish` never holds the registry borrow while a listener runs, so a
//!   listener may subscribe or unsubscribe without panicking. Such changes
//!   take effect on the next publish.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&[T])>;

struct ListenerEntry<T> {
    key: u64,
    listener: Listener<T>,
}

struct Registry<T> {
    next_key: u64,
    entries: Vec<ListenerEntry<T>>,
}

/// Single-threaded publish/subscribe subject over item snapshots.
pub struct Subject<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Subject<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_key: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Appends `listener` and returns its handle.
    ///
    /// Dropping the handle keeps the listener registered.
    pub fn subscribe(&self, listener: impl Fn(&[T]) + 'static) -> Subscription {
        let key = {
            let mut registry = self.registry.borrow_mut();
            let key = registry.next_key;
            registry.next_key += 1;
            registry.entries.push(ListenerEntry {
                key,
                listener: Rc::new(listener),
            });
            key
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            key,
            detach: Box::new(move || {
                let Some(registry) = registry.upgrade() else {
                    return false;
                };
                let mut registry = registry.borrow_mut();
                let before = registry.entries.len();
                registry.entries.retain(|entry| entry.key != key);
                registry.entries.len() != before
            }),
        }
    }

    /// Invokes every current listener with `snapshot`, in registration order.
    pub fn publish(&self, snapshot: &[T]) {
        let listeners: Vec<Listener<T>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|entry| Rc::clone(&entry.listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().entries.is_empty()
    }
}

impl<T: 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Subject<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("listeners", &self.registry.borrow().entries.len())
            .finish()
    }
}

/// Handle returned by `Subject::subscribe`.
pub struct Subscription {
    key: u64,
    detach: Box<dyn FnOnce() -> bool>,
}

impl Subscription {
    /// Removes the listener. Returns `false` when the subject is gone or the
    /// listener was already removed.
    pub fn unsubscribe(self) -> bool {
        (self.detach)()
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish()
    }
}
