//=========================================================================
// Edge Event
//=========================================================================
//
// Fire-and-forget channel: values are delivered to whoever is subscribed
// at emission time and are not retained.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::subscribers::SubscriberList;
use super::Subscription;

//=== EdgeEvent ===========================================================

/// Edge-triggered channel without replay.
pub struct EdgeEvent<T: 'static> {
    subscribers: SubscriberList<T>,
}

impl<T: 'static> EdgeEvent<T> {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    /// Delivers `value` to all current subscribers before returning.
    pub fn emit(&self, value: T) {
        self.subscribers.publish(value);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribers.add(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: 'static> Clone for EdgeEvent<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: 'static> Default for EdgeEvent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for EdgeEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeEvent")
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
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn late_subscriber_gets_no_replay() {
        let event = EdgeEvent::<u8>::new();
        event.emit(1);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = event.subscribe(move |v| s.borrow_mut().push(*v));
        event.emit(2);

        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn emit_without_subscribers_is_harmless() {
        let event = EdgeEvent::<()>::new();
        event.emit(());
        assert_eq!(event.subscriber_count(), 0);
    }

    #[test]
    fn dropping_handle_unsubscribes() {
        let event = EdgeEvent::<u8>::new();
        let count = Rc::new(RefCell::new(0));
        {
            let c = Rc::clone(&count);
            let _sub = event.subscribe(move |_| *c.borrow_mut() += 1);
            event.emit(0);
        }
        event.emit(0);

        assert_eq!(*count.borrow(), 1);
    }
}
