//! Single-threaded shared state cell with change notification.
//!
//! DESIGN
//! ======
//! Widgets never reference each other. They meet at cells like this one:
//! one writer replaces the value, every subscriber hears about it. Writes
//! that do not change the value are dropped, which is what makes repeated
//! full-state writes idempotent.
//!
//! Observers are snapshotted before a notification round, so callbacks may
//! write, subscribe, or unsubscribe re-entrantly. Each observer is handed the
//! cell's value at the moment it runs, never a value captured earlier in the
//! round.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::util::subscription::Subscription;

struct Observer<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Rc<dyn Fn(&T)>,
}

struct Inner<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<Observer<T>>>,
    next_id: Cell<u64>,
}

/// Shared observable value. Clones refer to the same cell.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value. Returns `false` (and notifies nobody) when the new
    /// value equals the current one.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }

    /// Register `callback` for future changes. The current value is not
    /// replayed; read it with [`Observable::get`].
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let active = Rc::new(Cell::new(true));
        self.inner.observers.borrow_mut().push(Observer {
            id,
            active: Rc::clone(&active),
            callback: Rc::new(callback),
        });

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            active.set(false);
            if let Some(inner) = inner.upgrade() {
                inner.observers.borrow_mut().retain(|o| o.id != id);
            }
        })
    }

    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn notify(&self) {
        let snapshot: Vec<(Rc<Cell<bool>>, Rc<dyn Fn(&T)>)> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|o| (Rc::clone(&o.active), Rc::clone(&o.callback)))
            .collect();
        for (active, callback) in snapshot {
            if active.get() {
                let latest = self.get();
                callback(&latest);
            }
        }
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug + 'static> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.get())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}
