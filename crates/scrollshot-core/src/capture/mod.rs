mod session;
mod snapshot;

pub use {
    session::CaptureSession,
    snapshot::{SnapshotSource, WindowTarget},
};
