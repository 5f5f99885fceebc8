//! Scrollshot Core Library
//!
//! Combination matching, scroll accumulation, and capture-session logic
//! for a scroll-driven window snapshot tool.
//!
//! # Example
//!
//! ```no_run
//! use scrollshot_core::{
//!     CaptureSession, CombinationMatcher, CombinationSpec, CoreResult, KeyCode,
//!     ScrollAccumulator, WindowTarget,
//! };
//!
//! use std::path::Path;
//!
//! fn main() -> CoreResult<()> {
//!     let mut matcher = CombinationMatcher::new(CombinationSpec::default());
//!     let mut scroll = ScrollAccumulator::new(3);
//!     let mut session: CaptureSession<WindowTarget> = CaptureSession::new();
//!
//!     // Fed from the OS input hook:
//!     matcher.on_key(KeyCode::MetaLeft, true);
//!     if matcher.on_key(KeyCode::ShiftRight, true) {
//!         session.begin(WindowTarget::frontmost()?, Path::new("sessions"))?;
//!     }
//!     if session.is_active() && scroll.on_wheel(-1) {
//!         let path = session.capture_next()?;
//!         println!("captured {}", path.display());
//!     }
//!
//!     let captured = session.end();
//!     println!("{} frames", captured.len());
//!     Ok(())
//! }
//! ```

mod capture;
mod error;
mod input;

pub use {
    capture::{CaptureSession, SnapshotSource, WindowTarget},
    error::{CaptureError, Result as CoreResult},
    input::{
        CombinationMatcher, CombinationRecorder, CombinationSpec, KeyCode, ParseKeyError,
        PressedKeys, ScrollAccumulator, ShiftMode,
    },
};

#[cfg(test)]
mod tests;
