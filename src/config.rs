//! Application configuration.
//!
//! Centralizes the constants shared by the state registry: cell names used
//! in logs, and the rules for displaying account identifiers.

// =============================================================================
// Cell Names
// =============================================================================

/// Names given to the registry's cells. They appear in `tracing` events
/// and `Debug` output.
pub mod cells {
    pub const WALLET_ENABLED: &str = "wallet-enabled";
    pub const CURRENT_ACCOUNT: &str = "current-account";
    pub const NETWORK_READY: &str = "network-ready";
    pub const WAVES: &str = "waves";
    pub const WAVE_COUNT: &str = "wave-count";
}

// =============================================================================
// Account Display
// =============================================================================

/// Label shown when no account is active.
pub const GUEST_LABEL: &str = "guest";

/// Ethereum address display rules (`0x1234...5678`).
pub mod eth_address {
    /// Length of a full `0x`-prefixed address.
    pub const FULL_LEN: usize = 42;
    /// Characters kept from the start, including `0x`.
    pub const PREFIX_LEN: usize = 6;
    /// Index where the kept suffix begins.
    pub const SUFFIX_START: usize = FULL_LEN - 4;
}
