//! Writable store: a named mutable cell with synchronous observers.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, trace};

use super::{Derived, Subscription, lock};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A registered observer. `since` is the sequence of the value it was
/// first called with; it only receives values committed after that.
struct Registration<T> {
    id: u64,
    since: u64,
    observer: Observer<T>,
}

/// Values waiting to be delivered, plus whether a delivery loop is active.
struct Dispatch<T> {
    pending: VecDeque<(u64, T)>,
    /// Sequence of the most recently committed value.
    committed: u64,
    running: bool,
}

struct Inner<T> {
    name: &'static str,
    value: RwLock<T>,
    observers: Mutex<Vec<Registration<T>>>,
    dispatch: Mutex<Dispatch<T>>,
    next_id: AtomicU64,
}

impl<T> Inner<T> {
    fn remove(&self, id: u64) {
        // Drop the observer after releasing the lock: its captures may
        // hold subscriptions on this same store.
        let removed = {
            let mut observers = lock(&self.observers);
            observers
                .iter()
                .position(|registration| registration.id == id)
                .map(|index| observers.remove(index))
        };
        if removed.is_some() {
            debug!(store = self.name, id, "observer removed");
        }
    }

    /// Observers due to receive the value committed as `seq`.
    fn observers_for(&self, seq: u64) -> Vec<Observer<T>> {
        lock(&self.observers)
            .iter()
            .filter(|registration| registration.since < seq)
            .map(|registration| Arc::clone(&registration.observer))
            .collect()
    }

    fn drain(&self) {
        let _running = RunningGuard(self);
        loop {
            let (seq, value) = {
                let mut dispatch = lock(&self.dispatch);
                match dispatch.pending.pop_front() {
                    Some(entry) => entry,
                    None => {
                        dispatch.running = false;
                        return;
                    }
                }
            };

            let observers = self.observers_for(seq);
            trace!(store = self.name, seq, observers = observers.len(), "notify");
            for observer in observers {
                observer(&value);
            }
        }
    }
}

/// Clears the delivery state if an observer panics mid-round, so the
/// store keeps notifying on later sets.
struct RunningGuard<'a, T>(&'a Inner<T>);

impl<T> Drop for RunningGuard<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut dispatch = lock(&self.0.dispatch);
            dispatch.pending.clear();
            dispatch.running = false;
        }
    }
}

/// Deregisters an observer whose first call panicked. No `Subscription`
/// exists for it yet, so nothing else could remove it.
struct RegistrationGuard<'a, T> {
    inner: &'a Inner<T>,
    id: u64,
}

impl<T> Drop for RegistrationGuard<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.inner.remove(self.id);
        }
    }
}

/// A named, observable mutable cell.
///
/// Cloning a `Store` yields another handle to the same cell.
///
/// # Example
///
/// ```
/// use wave_stores::Store;
///
/// let ready = Store::named("network-ready", false);
/// let sub = ready.observe(|value| println!("ready = {value}"));
/// ready.set(true);
/// assert!(ready.get());
/// sub.unsubscribe();
/// ```
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Creates an unnamed store holding `value`.
    pub fn new(value: T) -> Self {
        Self::named("store", value)
    }

    /// Creates a store holding `value`. The name only shows up in logs and
    /// `Debug` output.
    pub fn named(name: &'static str, value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                value: RwLock::new(value),
                observers: Mutex::new(Vec::new()),
                dispatch: Mutex::new(Dispatch {
                    pending: VecDeque::new(),
                    committed: 0,
                    running: false,
                }),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Runs `f` against the current value without cloning it.
    ///
    /// `f` must not set this store.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&*value)
    }

    /// Replaces the value and notifies every observer.
    pub fn set(&self, value: T) {
        self.commit(|slot| *slot = value);
    }

    /// Mutates the value in place and notifies every observer.
    ///
    /// `f` must not access this store.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.commit(f);
    }

    /// Registers `observer`, calls it right away with the current value,
    /// and again after every later set.
    ///
    /// An observer registered while a delivery round is in progress skips
    /// the values queued before it, since it already saw a newer one.
    pub fn observe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let observer: Observer<T> = Arc::new(observer);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        // Holding the value lock keeps `since` and `current` consistent
        // with concurrent commits.
        let current = {
            let value = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
            let since = lock(&self.inner.dispatch).committed;
            lock(&self.inner.observers).push(Registration {
                id,
                since,
                observer: Arc::clone(&observer),
            });
            (*value).clone()
        };
        debug!(store = self.inner.name, id, "observer added");

        let guard = RegistrationGuard {
            inner: &*self.inner,
            id,
        };
        observer(&current);
        drop(guard);

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.remove(id);
            }
        })
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        lock(&self.inner.observers).len()
    }

    /// Creates a read-only cell holding `f` applied to this store's value,
    /// recomputed on every set.
    pub fn map<U>(&self, name: &'static str, f: impl Fn(&T) -> U + Send + Sync + 'static) -> Derived<U>
    where
        U: Clone + Send + Sync + 'static,
    {
        let output = Store::named(name, self.with(&f));
        let target = output.clone();
        let source = self.observe(move |value| target.set(f(value)));
        Derived::new(output, source)
    }

    /// Writes the new value and queues it for delivery. The value lock is
    /// held while queueing so delivery order always matches write order.
    fn commit(&self, apply: impl FnOnce(&mut T)) {
        {
            let mut slot = self.inner.value.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut *slot);

            let mut dispatch = lock(&self.inner.dispatch);
            dispatch.committed += 1;
            let seq = dispatch.committed;
            dispatch.pending.push_back((seq, (*slot).clone()));
            if dispatch.running {
                // Re-entrant set: the active loop delivers it.
                return;
            }
            dispatch.running = true;
        }
        self.inner.drain();
    }
}

impl<T: Default + Clone + Send + Sync + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Store")
            .field("name", &self.inner.name)
            .field("value", &*value)
            .field("observers", &lock(&self.inner.observers).len())
            .finish()
    }
}
