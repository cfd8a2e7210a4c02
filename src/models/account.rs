use crate::config::{GUEST_LABEL, eth_address};

/// Formats an account identifier for display.
///
/// - empty account: `"guest"`
/// - full-length address: `0x1234...5678`
/// - anything else: the identifier unchanged
pub fn display_account(account: &str) -> String {
    if account.is_empty() {
        return GUEST_LABEL.to_string();
    }
    if account.len() < eth_address::FULL_LEN {
        return account.to_string();
    }

    let suffix_start = account.len() - (eth_address::FULL_LEN - eth_address::SUFFIX_START);
    match (
        account.get(..eth_address::PREFIX_LEN),
        account.get(suffix_start..),
    ) {
        (Some(prefix), Some(suffix)) => format!("{}...{}", prefix, suffix),
        _ => account.to_string(),
    }
}
