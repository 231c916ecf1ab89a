//=========================================================================
// Subscription
//=========================================================================
//
// Disposal handles returned by every `subscribe` call.
//
// Dropping a handle disposes it. Owners that want a subscription to live
// as long as themselves keep it in a `SubscriptionBag`.
//
//=========================================================================

//=== Subscription ========================================================

/// Handle that stops delivery to one subscriber when disposed.
///
/// Disposal is idempotent and never interrupts a delivery already in
/// progress for other subscribers.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(super) fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops further delivery. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Returns true once the handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

//=== SubscriptionBag =====================================================

/// Owns a group of subscriptions and disposes them together.
#[derive(Debug, Default)]
pub struct SubscriptionBag {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Disposes every held subscription. The bag can be reused afterwards.
    pub fn dispose_all(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
