//! Leptos integration.
//!
//! Bridges stores into Leptos signals so components can render them
//! reactively, and places the [`AppState`] registry in Leptos context.

use leptos::prelude::*;

use crate::app::AppState;
use crate::models::Wave;
use crate::store::{Derived, Store};

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Returns a signal that mirrors this store.
    ///
    /// Must be called under a reactive owner (inside a component, for
    /// example). The store subscription is released when the owner is
    /// cleaned up. Without an owner the subscription is dropped right away
    /// and the signal keeps the value it was created with.
    pub fn to_signal(&self) -> ReadSignal<T> {
        let (read, write) = signal(self.get());
        let subscription = self.observe(move |value: &T| write.set(value.clone()));
        on_cleanup(move || subscription.unsubscribe());
        read
    }
}

impl<T: Clone + Send + Sync + 'static> Derived<T> {
    /// Same contract as [`Store::to_signal`].
    pub fn to_signal(&self) -> ReadSignal<T> {
        let (read, write) = signal(self.get());
        let subscription = self.observe(move |value: &T| write.set(value.clone()));
        on_cleanup(move || subscription.unsubscribe());
        read
    }
}

// ============================================================================
// AppSignals
// ============================================================================

/// Read signals for every registry cell.
///
/// This struct is `Copy` because all fields are Leptos signals.
pub struct AppSignals<W = Wave> {
    pub wallet_enabled: ReadSignal<bool>,
    pub current_account: ReadSignal<String>,
    pub network_ready: ReadSignal<bool>,
    pub waves: ReadSignal<Vec<W>>,
    pub wave_count: ReadSignal<u64>,
}

impl<W> Clone for AppSignals<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for AppSignals<W> {}

impl<W: Clone + Send + Sync + 'static> AppState<W> {
    /// Mirrors every cell into a signal. Same owner requirement as
    /// [`Store::to_signal`].
    pub fn signals(&self) -> AppSignals<W> {
        AppSignals {
            wallet_enabled: self.wallet_enabled().to_signal(),
            current_account: self.current_account().to_signal(),
            network_ready: self.network_ready().to_signal(),
            waves: self.waves().to_signal(),
            wave_count: self.wave_count().to_signal(),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Provides `state` to every component below the current owner.
pub fn provide_app_state<W: Clone + Send + Sync + 'static>(state: AppState<W>) {
    provide_context(state);
}

/// Retrieves the registry placed by [`provide_app_state`], if any.
pub fn try_use_app_state<W: Clone + Send + Sync + 'static>() -> Option<AppState<W>> {
    use_context::<AppState<W>>()
}

/// Retrieves the registry placed by [`provide_app_state`].
///
/// # Panics
///
/// Panics if no [`AppState`] was provided by an ancestor.
pub fn use_app_state<W: Clone + Send + Sync + 'static>() -> AppState<W> {
    try_use_app_state().expect("AppState must be provided")
}
