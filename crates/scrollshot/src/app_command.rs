use scrollshot_core::CombinationSpec;

/// Commands sent from the input hook listener to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// The trigger combination was activated.
    ToggleCapture,
    /// The scroll threshold was crossed while capture mode is active.
    CaptureRequest,
    /// The interactive recorder completed a new combination.
    CombinationRecorded {
        /// The combination the user demonstrated.
        spec: CombinationSpec,
    },
    /// The low-level input hook could not be installed.
    ///
    /// Reported once; activation stays disabled for the process lifetime.
    HookFailed {
        /// Description of the registration failure.
        reason: String,
    },
    /// Request application shutdown.
    Shutdown,
}
