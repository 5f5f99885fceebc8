use std::time::Instant;

use uuid::Uuid;

/// Capture-mode state for the main application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Waiting for the trigger combination.
    Idle,
    /// A capture session is accumulating snapshots.
    Capturing {
        /// When the session started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}
