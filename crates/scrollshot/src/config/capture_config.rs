use crate::config::{default_copy_last_capture, default_scrolls_per_capture};

use serde::{Deserialize, Serialize};

/// Capture behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Downward scroll ticks per captured frame (zero is treated as one).
    #[serde(default = "default_scrolls_per_capture")]
    pub scrolls_per_capture: u32,
    /// Copy the session's final frame to the clipboard on session end.
    #[serde(default = "default_copy_last_capture")]
    pub copy_last_capture: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            scrolls_per_capture: default_scrolls_per_capture(),
            copy_last_capture: default_copy_last_capture(),
        }
    }
}
