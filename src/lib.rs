//! Shared reactive state for the wave portal front end.
//!
//! The crate exposes one registry, [`AppState`], holding five independent
//! observable cells:
//! - wallet enabled (`bool`)
//! - current account (`String`)
//! - network ready (`bool`)
//! - waves (`Vec<W>`, [`Wave`] by default)
//! - wave count (`u64`)
//!
//! Each cell is a [`Store`] with get/set/observe. [`provide_app_state`] and
//! [`Store::to_signal`] connect the registry to Leptos components.
//!
//! ```
//! use wave_stores::{AppState, Wave};
//!
//! let state: AppState = AppState::new();
//! let sub = state.wallet_enabled().observe(|on| println!("wallet: {on}"));
//!
//! state.current_account().set("0xABC".to_string());
//! state.wallet_enabled().set(true);
//! state.waves().set(vec![Wave::new("0xABC", "gm", 1_700_000_000)]);
//! assert_eq!(state.wave_count().get(), 0);
//!
//! sub.unsubscribe();
//! ```

mod app;
pub mod config;
mod error;
pub mod models;
mod signal;
pub mod store;

pub use app::AppState;
pub use error::StateError;
pub use models::{AppSnapshot, Wave};
pub use signal::{AppSignals, provide_app_state, try_use_app_state, use_app_state};
pub use store::{Derived, Store, Subscription};
