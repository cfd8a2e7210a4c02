//! Read-only cells computed from another store.

use std::fmt;
use std::sync::Arc;

use super::{Store, Subscription};

/// A read-only cell whose value tracks a source [`Store`].
///
/// Created by [`Store::map`]. The value is recomputed on every set of the
/// source. Dropping the last clone releases the subscription on the source.
pub struct Derived<T> {
    output: Store<T>,
    source: Arc<Subscription>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Derived<T> {
    pub(crate) fn new(output: Store<T>, source: Subscription) -> Self {
        Self {
            output,
            source: Arc::new(source),
        }
    }

    pub fn name(&self) -> &'static str {
        self.output.name()
    }

    pub fn get(&self) -> T {
        self.output.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.output.with(f)
    }

    /// Same contract as [`Store::observe`].
    pub fn observe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.output.observe(observer)
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
