/// Tray icon states corresponding to application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Waiting for the trigger combination.
    Idle,
    /// A capture session is accumulating snapshots.
    Capturing,
    /// The interactive recorder is waiting for a new combination.
    Rebinding,
}
