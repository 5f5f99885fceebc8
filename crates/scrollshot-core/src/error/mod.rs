use error_location::ErrorLocation;
use thiserror::Error;

/// Capture and input-tracking errors with source location tracking.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// A capture session is already active.
    #[error("A capture session is already active {location}")]
    SessionActive {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No capture session is active.
    #[error("No capture session is active {location}")]
    SessionNotActive {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The target window no longer exists.
    #[error("Target window is gone {location}")]
    WindowGone {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The target window reports a zero-area rectangle.
    #[error("Target window rectangle is degenerate ({width}x{height}) {location}")]
    DegenerateWindowRect {
        /// Reported window width in pixels.
        width: u32,
        /// Reported window height in pixels.
        height: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No window could be selected as a capture target.
    #[error("No target window found {location}")]
    NoTargetWindow {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Pixel acquisition failed.
    #[error("Capture failed: {reason} {location}")]
    CaptureFailed {
        /// Description of the capture failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Encoding the captured pixels to a PNG file failed.
    #[error("PNG encode failed: {source} {location}")]
    EncodeFailed {
        /// Underlying error from the image encoder.
        #[source]
        source: image::ImageError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

// Manual From impls with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<std::io::Error> for CaptureError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CaptureError::Io {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

impl From<image::ImageError> for CaptureError {
    #[track_caller]
    fn from(source: image::ImageError) -> Self {
        CaptureError::EncodeFailed {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

/// Result type alias using [`CaptureError`].
pub type Result<T> = std::result::Result<T, CaptureError>;
