//! Player configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How long copy feedback stays visible, in milliseconds (default: 2500)
    pub copy_feedback_ms: u64,

    /// Title for quick-inserted links without one (default: "Manual stream")
    pub manual_link_title: String,
}

impl PlayerConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 2500,
            manual_link_title: "Manual stream".to_string(),
        }
    }
}
