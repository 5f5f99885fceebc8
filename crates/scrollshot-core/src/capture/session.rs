//! Session-scoped snapshot accumulation.
//!
//! A session binds one snapshot source to a timestamp-named directory and
//! numbers every successful capture contiguously. Failed captures leave the
//! numbering untouched, so the sequence on disk always matches the path
//! list handed back at the end.

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use chrono::Local;
use error_location::ErrorLocation;
use image::RgbaImage;
use tracing::{debug, info};

use crate::{CaptureError, CoreResult, capture::SnapshotSource};

/// Accumulates numbered window snapshots between `begin` and `end`.
///
/// At most one session is active per instance; `begin` while active fails
/// without side effects. All methods take `&mut self` and are expected to
/// be driven from a single task.
pub struct CaptureSession<S: SnapshotSource> {
    state: SessionState<S>,
}

enum SessionState<S> {
    Idle,
    Active(ActiveCapture<S>),
}

struct ActiveCapture<S> {
    source: S,
    session_root: PathBuf,
    raw_dir: PathBuf,
    capture_index: usize,
    captured: Vec<PathBuf>,
}

impl<S: SnapshotSource> Default for CaptureSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SnapshotSource> CaptureSession<S> {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Whether a session is currently active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// Root directory of the active session, if any.
    pub fn session_root(&self) -> Option<&Path> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Active(active) => Some(&active.session_root),
        }
    }

    /// Number of snapshots captured so far in the active session.
    pub fn capture_count(&self) -> usize {
        match &self.state {
            SessionState::Idle => 0,
            SessionState::Active(active) => active.captured.len(),
        }
    }

    /// Start a session against `source`, storing artifacts under `base_dir`.
    ///
    /// Creates `base_dir`, a timestamp-named session root beneath it, and a
    /// `raw` subdirectory for the numbered snapshots. Fails without side
    /// effects on the session state when a session is already active, the
    /// source is invalid, or directory creation fails.
    #[track_caller]
    pub fn begin(&mut self, source: S, base_dir: &Path) -> CoreResult<()> {
        if self.is_active() {
            return Err(CaptureError::SessionActive {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !source.is_valid() {
            return Err(CaptureError::WindowGone {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        fs::create_dir_all(base_dir)?;
        let session_root = base_dir.join(timestamp_string());
        let raw_dir = session_root.join("raw");
        fs::create_dir_all(&raw_dir)?;

        info!(
            session_root = ?session_root,
            target = %source.describe(),
            "Capture session started"
        );

        self.state = SessionState::Active(ActiveCapture {
            source,
            session_root,
            raw_dir,
            capture_index: 0,
            captured: Vec::new(),
        });

        Ok(())
    }

    /// Capture the next numbered snapshot (`shot_0001.png`, `shot_0002.png`, …).
    ///
    /// On success the path is recorded and the index advances. A failure
    /// (gone window, acquisition or encode error) leaves the index and the
    /// recorded list untouched and the session active, so numbering stays
    /// contiguous for what was actually saved.
    #[track_caller]
    pub fn capture_next(&mut self) -> CoreResult<PathBuf> {
        let SessionState::Active(active) = &mut self.state else {
            return Err(CaptureError::SessionNotActive {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !active.source.is_valid() {
            return Err(CaptureError::WindowGone {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let file_name = format!("shot_{:04}.png", active.capture_index + 1);
        let path = active.raw_dir.join(file_name);

        let image = active.source.capture()?;
        write_png(&image, &path)?;

        active.captured.push(path.clone());
        active.capture_index += 1;

        debug!(path = ?path, index = active.capture_index, "Frame captured");

        Ok(path)
    }

    /// End the session, returning every captured path in capture order.
    ///
    /// Resets to idle and drops the source reference; safe to call on an
    /// idle session, which yields an empty list.
    pub fn end(&mut self) -> Vec<PathBuf> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => Vec::new(),
            SessionState::Active(active) => {
                info!(
                    captured = active.captured.len(),
                    session_root = ?active.session_root,
                    "Capture session ended"
                );
                active.captured
            }
        }
    }
}

/// Write `image` as a PNG at `path` via a temp file and rename, so an
/// interrupted capture never leaves a partial file at the final path.
#[track_caller]
fn write_png(image: &RgbaImage, path: &Path) -> CoreResult<()> {
    let temp_path = path.with_extension("png.tmp");
    if let Err(e) = image.save_with_format(&temp_path, image::ImageFormat::Png) {
        let _ = fs::remove_file(&temp_path);
        return Err(CaptureError::EncodeFailed {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Millisecond-resolution local timestamp for unique session directories.
fn timestamp_string() -> String {
    Local::now().format("%Y%m%d_%H%M%S_%3f").to_string()
}
