use scrollshot_core::CombinationSpec;

/// Control messages sent from the main application to the hook listener.
///
/// Drained on the hook thread at each incoming event, so every state
/// change stays serialized with the event stream.
#[derive(Debug, Clone)]
pub enum ListenerCommand {
    /// Replace the active trigger combination.
    SetSpec(CombinationSpec),
    /// Enable or disable capture mode; always discards scroll progress.
    SetCaptureMode(bool),
    /// Replace the scrolls-per-capture threshold.
    SetScrollThreshold(u32),
    /// Switch to recording mode for an interactive rebind.
    BeginRebind,
    /// Abandon an in-progress rebind and return to matching.
    CancelRebind,
}
