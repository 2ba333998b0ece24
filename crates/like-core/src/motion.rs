//! Process-wide "prefers reduced motion" flag.
//!
//! The environment adapter (a `matchMedia` listener on the web, an env var on
//! native) pushes changes in with `set_reduced`. Consumers never write; they
//! read the current value or subscribe and get a `Subscription` token that
//! unregisters itself when dropped.

use crate::observer::{SubscriptionId, Subscribers};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct MotionInner {
    reduced: bool,
    subscribers: Subscribers<bool>,
}

#[derive(Clone)]
pub struct MotionPreference {
    inner: Rc<RefCell<MotionInner>>,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MotionInner {
                reduced,
                subscribers: Subscribers::new(),
            })),
        }
    }

    /// Build from an environment query. `None` means the capability is missing,
    /// which falls back to full motion.
    pub fn from_query(query: Option<bool>) -> Self {
        match query {
            Some(reduced) => Self::new(reduced),
            None => {
                log::debug!("[motion] preference unavailable; assuming full motion");
                Self::new(false)
            }
        }
    }

    /// Preference for contexts with no way to ask the user.
    pub fn headless() -> Self {
        Self::from_query(None)
    }

    pub fn reduced(&self) -> bool {
        self.inner.borrow().reduced
    }

    /// Environment side: record a new value and notify subscribers if it changed.
    pub fn set_reduced(&self, reduced: bool) {
        let handlers = {
            let mut inner = self.inner.borrow_mut();
            if inner.reduced == reduced {
                return;
            }
            inner.reduced = reduced;
            inner.subscribers.snapshot()
        };
        log::info!("[motion] prefers reduced motion: {}", reduced);
        for handler in handlers {
            handler(&reduced);
        }
    }

    pub fn subscribe(&self, handler: impl Fn(bool) + 'static) -> Subscription {
        let id = self
            .inner
            .borrow_mut()
            .subscribers
            .add(move |reduced: &bool| handler(*reduced));
        Subscription {
            id,
            publisher: Rc::downgrade(&self.inner),
        }
    }

    /// Subscribe with a cached copy of the flag that the caller can read at any time.
    pub fn watch(&self) -> MotionWatch {
        let reduced = Rc::new(Cell::new(self.reduced()));
        let cell = reduced.clone();
        let subscription = self.subscribe(move |value| cell.set(value));
        MotionWatch {
            reduced,
            _subscription: subscription,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Registration on a `MotionPreference`; unsubscribes on drop.
///
/// Holds only a weak reference, so it never keeps the publisher alive.
pub struct Subscription {
    id: SubscriptionId,
    publisher: Weak<RefCell<MotionInner>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.publisher.upgrade() {
            inner.borrow_mut().subscribers.remove(self.id);
        }
    }
}

pub struct MotionWatch {
    reduced: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl MotionWatch {
    pub fn reduced(&self) -> bool {
        self.reduced.get()
    }
}
