//=========================================================================
// Subscriber List
//=========================================================================
//
// Shared delivery core behind both channel kinds.
//
// Architecture:
//   publish(v) → snapshot subscribers → call each live subscriber in order
//                     ↑                           │
//   nested publish ───┴── queued until the outer delivery finishes
//
// Delivery is synchronous: `publish` returns only after every subscriber
// registered at the time of the call has seen the value (and any values
// published from inside those callbacks).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use log::warn;

//=== Internal Dependencies ===============================================

use super::Subscription;

//=== Types ===============================================================

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Entry<T> {
    id: u64,
    live: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct Inner<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
    delivering: bool,
    pending: VecDeque<T>,
}

//=== SubscriberList ======================================================

/// Ordered subscriber registry with re-entrancy safe, synchronous delivery.
///
/// Cloning produces another handle to the same list.
pub(super) struct SubscriberList<T: 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> Clone for SubscriberList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> SubscriberList<T> {
    pub(super) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                entries: Vec::new(),
                delivering: false,
                pending: VecDeque::new(),
            })),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Appends a subscriber and returns its disposal handle.
    pub(super) fn add<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push(Entry {
                id,
                live: Rc::clone(&live),
                callback: Rc::new(RefCell::new(callback)),
            });
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            live.set(false);
            if let Some(inner) = weak.upgrade() {
                // A busy list keeps the entry until the next publish prunes it.
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.entries.retain(|e| e.id != id);
                }
            }
        })
    }

    /// Number of live subscribers.
    pub(super) fn len(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.live.get())
            .count()
    }

    /// True while a delivery is running with values still queued behind it.
    ///
    /// A subscriber added in that window receives the queued values from
    /// the running delivery.
    pub(super) fn has_queued(&self) -> bool {
        let inner = self.inner.borrow();
        inner.delivering && !inner.pending.is_empty()
    }

    //--- Delivery ---------------------------------------------------------

    /// Delivers `value` to every live subscriber, in subscription order.
    pub(super) fn publish(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.delivering {
                inner.pending.push_back(value);
                return;
            }
            inner.delivering = true;
        }

        let mut next = Some(value);
        while let Some(value) = next {
            let snapshot: Vec<(Rc<Cell<bool>>, Callback<T>)> = self
                .inner
                .borrow()
                .entries
                .iter()
                .map(|e| (Rc::clone(&e.live), Rc::clone(&e.callback)))
                .collect();

            for (live, callback) in snapshot {
                if !live.get() {
                    continue;
                }
                match callback.try_borrow_mut() {
                    Ok(mut callback) => (&mut *callback)(&value),
                    Err(_) => warn!(
                        target: "event_bus",
                        "Subscriber re-entered its own channel, skipping nested delivery"
                    ),
                }
            }

            next = self.inner.borrow_mut().pending.pop_front();
        }

        let mut inner = self.inner.borrow_mut();
        inner.delivering = false;
        inner.entries.retain(|e| e.live.get());
    }
}

//=========================================================================
// Tests
//=========================================================================
