//! Synchronous subscriber list shared by the toggle state machine and the
//! motion-preference channel.
//!
//! Handlers are reference counted so a notification can run against a
//! snapshot of the list. That lets a handler add or remove subscriptions
//! while it is being notified without tripping a `RefCell` borrow.

use smallvec::SmallVec;
use std::rc::Rc;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Handler<T> = Rc<dyn Fn(&T)>;

pub struct Subscribers<T> {
    next_id: u64,
    handlers: SmallVec<[(SubscriptionId, Handler<T>); 4]>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: SmallVec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, handler: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Rc::new(handler)));
        id
    }

    /// Returns `false` when `id` was already removed.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.handlers.iter().position(|(h, _)| *h == id) {
            Some(pos) => {
                self.handlers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Clone the current handlers in registration order.
    pub fn snapshot(&self) -> SmallVec<[Handler<T>; 4]> {
        self.handlers.iter().map(|(_, h)| h.clone()).collect()
    }

    pub fn notify(&self, value: &T) {
        for handler in self.snapshot() {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
