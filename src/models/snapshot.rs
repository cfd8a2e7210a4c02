use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Wave;
use crate::error::StateError;

/// Plain copy of every registry value at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot<W = Wave> {
    pub wallet_enabled: bool,
    pub current_account: String,
    pub network_ready: bool,
    pub waves: Vec<W>,
    pub wave_count: u64,
}

impl<W> Default for AppSnapshot<W> {
    fn default() -> Self {
        Self {
            wallet_enabled: false,
            current_account: String::new(),
            network_ready: false,
            waves: Vec::new(),
            wave_count: 0,
        }
    }
}

impl<W: Serialize> AppSnapshot<W> {
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(StateError::Encode)
    }
}

impl<W: DeserializeOwned> AppSnapshot<W> {
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(StateError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_values() {
        let snapshot: AppSnapshot = AppSnapshot::default();
        assert!(!snapshot.wallet_enabled);
        assert_eq!(snapshot.current_account, "");
        assert!(!snapshot.network_ready);
        assert!(snapshot.waves.is_empty());
        assert_eq!(snapshot.wave_count, 0);
    }

    #[test]
    fn test_json_field_names() {
        let snapshot: AppSnapshot = AppSnapshot {
            wave_count: 3,
            ..AppSnapshot::default()
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"waveCount\":3"));
        assert!(json.contains("\"walletEnabled\":false"));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let result = AppSnapshot::<Wave>::from_json("{\"walletEnabled\":");
        assert!(matches!(result, Err(StateError::Decode(_))));
    }
}
