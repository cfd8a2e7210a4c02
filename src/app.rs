//! Root application state.
//!
//! Contains [`AppState`], the registry of named cells shared by the wallet
//! module, the data-fetching module and the UI components.

use tracing::debug;

use crate::config::cells;
use crate::models::{AppSnapshot, Wave, display_account};
use crate::store::Store;

// ============================================================================
// AppState
// ============================================================================

/// Application-wide reactive state.
///
/// Each cell is independent: setting `waves` never touches `wave_count` and
/// nothing keeps the two consistent. Writers set whichever cells they own.
///
/// # Architecture
///
/// - **Wallet/network module** writes `wallet_enabled`, `current_account`
///   and `network_ready` as the connection lifecycle progresses
/// - **Data-fetching module** writes `waves` and `wave_count`
/// - **UI components** observe all five
///
/// Cloning an `AppState` yields another handle to the same cells, so it can
/// be passed by value or placed in Leptos context (see
/// [`provide_app_state`](crate::provide_app_state)).
#[derive(Clone, Debug)]
pub struct AppState<W = Wave> {
    wallet_enabled: Store<bool>,
    current_account: Store<String>,
    network_ready: Store<bool>,
    waves: Store<Vec<W>>,
    wave_count: Store<u64>,
}

impl<W: Clone + Send + Sync + 'static> AppState<W> {
    /// Creates the registry with every cell at its initial value:
    /// - Wallet enabled: `false`
    /// - Current account: empty
    /// - Network ready: `false`
    /// - Waves: empty
    /// - Wave count: `0`
    pub fn new() -> Self {
        Self {
            wallet_enabled: Store::named(cells::WALLET_ENABLED, false),
            current_account: Store::named(cells::CURRENT_ACCOUNT, String::new()),
            network_ready: Store::named(cells::NETWORK_READY, false),
            waves: Store::named(cells::WAVES, Vec::new()),
            wave_count: Store::named(cells::WAVE_COUNT, 0),
        }
    }

    /// Whether a wallet connection is currently active.
    pub fn wallet_enabled(&self) -> &Store<bool> {
        &self.wallet_enabled
    }

    /// Identifier of the active account, empty when none.
    pub fn current_account(&self) -> &Store<String> {
        &self.current_account
    }

    /// Whether the network/backend connection is usable.
    pub fn network_ready(&self) -> &Store<bool> {
        &self.network_ready
    }

    pub fn waves(&self) -> &Store<Vec<W>> {
        &self.waves
    }

    /// Wave count as last reported by the data source. Not derived from
    /// [`waves`](Self::waves).
    pub fn wave_count(&self) -> &Store<u64> {
        &self.wave_count
    }

    /// Display name for the current account.
    ///
    /// Format:
    /// - `"guest"` when no account is set
    /// - `0x1234...5678` for a full address
    /// - the raw identifier otherwise
    pub fn account_label(&self) -> String {
        self.current_account.with(|account| display_account(account))
    }

    /// Copies every cell's current value.
    ///
    /// Cells are read one after another; a concurrent writer may land
    /// between two reads.
    pub fn snapshot(&self) -> AppSnapshot<W> {
        AppSnapshot {
            wallet_enabled: self.wallet_enabled.get(),
            current_account: self.current_account.get(),
            network_ready: self.network_ready.get(),
            waves: self.waves.get(),
            wave_count: self.wave_count.get(),
        }
    }

    /// Sets every cell from `snapshot`. These are five independent sets,
    /// each notifying its own observers.
    pub fn restore(&self, snapshot: &AppSnapshot<W>) {
        debug!(
            wallet_enabled = snapshot.wallet_enabled,
            waves = snapshot.waves.len(),
            wave_count = snapshot.wave_count,
            "restoring state snapshot"
        );
        self.wallet_enabled.set(snapshot.wallet_enabled);
        self.current_account.set(snapshot.current_account.clone());
        self.network_ready.set(snapshot.network_ready);
        self.waves.set(snapshot.waves.clone());
        self.wave_count.set(snapshot.wave_count);
    }

    /// Sets every cell back to its initial value.
    pub fn reset(&self) {
        self.restore(&AppSnapshot::default());
    }
}

impl<W: Clone + Send + Sync + 'static> Default for AppState<W> {
    fn default() -> Self {
        Self::new()
    }
}
