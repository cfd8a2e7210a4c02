use serde::{Deserialize, Serialize};

/// A single wave sent to the portal.
///
/// The registry stores these without looking inside; the field layout
/// matches what the data-fetching side decodes from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wave {
    /// Account that sent the wave.
    pub waver: String,
    pub message: String,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

impl Wave {
    pub fn new(waver: impl Into<String>, message: impl Into<String>, timestamp: u64) -> Self {
        Self {
            waver: waver.into(),
            message: message.into(),
            timestamp,
        }
    }
}
