use std::fmt;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Handle to a registered observer.
///
/// Dropping the handle deregisters the observer. Call [`detach`] to keep
/// the observer alive for as long as the store itself.
///
/// [`detach`]: Subscription::detach
#[must_use = "dropping a Subscription deregisters its observer immediately"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    pub(crate) fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregisters the observer. It will not be invoked by any later set.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Leaves the observer registered and discards the handle.
    pub fn detach(mut self) {
        self.release = None;
    }

    /// Returns `true` until the subscription is released or detached.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
