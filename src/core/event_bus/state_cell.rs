//=========================================================================
// State Cell
//=========================================================================
//
// Channel that remembers its last value.
//
// New subscribers receive the current value immediately, then every later
// change. Setting a value equal to the current one is not a change and
// publishes nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::subscribers::SubscriberList;
use super::Subscription;

//=== StateCell ===========================================================

/// Current-value channel with replay-on-subscribe.
///
/// Cloning yields another handle to the same cell. Only the owning
/// component should call [`StateCell::set`]; everyone else reads or
/// subscribes.
pub struct StateCell<T: Clone + PartialEq + 'static> {
    value: Rc<RefCell<T>>,
    subscribers: SubscriberList<T>,
}

impl<T: Clone + PartialEq + 'static> StateCell<T> {
    /// Creates a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            subscribers: SubscriberList::new(),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replaces the value and notifies subscribers.
    ///
    /// Returns false (and notifies nobody) if the value did not change.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.subscribers.publish(value);
        true
    }

    /// Calls `callback` with the current value, then with every change.
    ///
    /// Subscribing from inside a delivery that still has changes queued
    /// skips the replay; the queued changes reach the new subscriber instead.
    pub fn subscribe<F>(&self, mut callback: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        if !self.subscribers.has_queued() {
            let current = self.get();
            callback(&current);
        }
        self.subscribers.add(callback)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + PartialEq + 'static> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &*self.value.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: &T| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let cell = StateCell::new(5);
        let (seen, cb) = recorder();

        let _sub = cell.subscribe(cb);
        cell.set(6);

        assert_eq!(*seen.borrow(), vec![5, 6]);
    }

    #[test]
    fn setting_equal_value_is_silent() {
        let cell = StateCell::new("a".to_string());
        let (seen, cb) = recorder();
        let _sub = cell.subscribe(cb);

        assert!(!cell.set("a".to_string()));
        assert!(cell.set("b".to_string()));

        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn disposed_subscriber_stops_receiving() {
        let cell = StateCell::new(0);
        let (seen, cb) = recorder();
        let mut sub = cell.subscribe(cb);

        cell.set(1);
        sub.dispose();
        sub.dispose();
        cell.set(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_value() {
        let cell = StateCell::new(1);
        let other = cell.clone();
        other.set(9);
        assert_eq!(cell.get(), 9);
    }

    #[test]
    fn nested_set_never_delivers_stale_value_later() {
        let cell = StateCell::new(0);
        let writer = cell.clone();
        let _bump = cell.subscribe(move |v| {
            if *v == 1 {
                writer.set(2);
            }
        });
        let (seen, cb) = recorder();
        let _watch = cell.subscribe(cb);

        cell.set(1);

        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn late_subscriber_sees_queued_change_once() {
        let cell = StateCell::new(0);
        let writer = cell.clone();
        let (seen, cb) = recorder();
        let mut late_cb = Some(cb);
        let late: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&late);

        let _trigger = cell.subscribe(move |v| {
            if *v == 1 {
                writer.set(2);
                if let Some(cb) = late_cb.take() {
                    *slot.borrow_mut() = Some(writer.subscribe(cb));
                }
            }
        });

        cell.set(1);

        assert_eq!(*seen.borrow(), vec![2]);
        assert_eq!(cell.get(), 2);
        assert!(late.borrow().is_some());
    }

    #[test]
    fn subscriber_added_mid_delivery_without_queue_gets_replay() {
        let cell = StateCell::new(0);
        let reader = cell.clone();
        let (seen, cb) = recorder();
        let mut late_cb = Some(cb);
        let late: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&late);

        let _trigger = cell.subscribe(move |v| {
            if *v == 1 {
                if let Some(cb) = late_cb.take() {
                    *slot.borrow_mut() = Some(reader.subscribe(cb));
                }
            }
        });

        cell.set(1);
        cell.set(3);

        assert_eq!(*seen.borrow(), vec![1, 3]);
    }
}
