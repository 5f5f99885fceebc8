use crate::{CaptureError, CaptureSession, CoreResult, SnapshotSource};

use std::{
    cell::Cell,
    fs,
    panic::Location,
    path::PathBuf,
    rc::Rc,
};

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};

/// Snapshot source backed by shared flags instead of a real window.
struct FakeSource {
    valid: Rc<Cell<bool>>,
    fail_capture: Rc<Cell<bool>>,
}

impl FakeSource {
    fn healthy() -> (Self, Rc<Cell<bool>>, Rc<Cell<bool>>) {
        let valid = Rc::new(Cell::new(true));
        let fail_capture = Rc::new(Cell::new(false));
        let source = Self {
            valid: Rc::clone(&valid),
            fail_capture: Rc::clone(&fail_capture),
        };
        (source, valid, fail_capture)
    }
}

impl SnapshotSource for FakeSource {
    fn is_valid(&self) -> bool {
        self.valid.get()
    }

    fn capture(&self) -> CoreResult<RgbaImage> {
        if self.fail_capture.get() {
            return Err(CaptureError::CaptureFailed {
                reason: "forced failure".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])))
    }

    fn describe(&self) -> String {
        "fake window".to_string()
    }
}

fn temp_base(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join(format!("scrollshot-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&base);
    base
}

/// WHAT: capture_next on an idle session fails without mutating anything
/// WHY: Captures outside a session must be rejected, not silently dropped
#[test]
fn given_idle_session_when_capture_next_then_session_not_active_error() {
    let mut session: CaptureSession<FakeSource> = CaptureSession::new();

    let result = session.capture_next();

    assert!(matches!(result, Err(CaptureError::SessionNotActive { .. })));
    assert!(!session.is_active());
    assert_eq!(session.capture_count(), 0);
}

/// WHAT: begin while active fails and leaves the first session untouched
/// WHY: At most one capture session may be active at a time
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_session_when_begin_again_then_rejected_without_side_effects() {
    let base = temp_base("double-begin");
    let mut session = CaptureSession::new();

    let (first, _, _) = FakeSource::healthy();
    session.begin(first, &base).unwrap();
    session.capture_next().unwrap();
    let root = session.session_root().unwrap().to_path_buf();

    // When: a second begin arrives mid-session
    let (second, _, _) = FakeSource::healthy();
    let result = session.begin(second, &base);

    // Then: rejected; the original session state is unchanged
    assert!(matches!(result, Err(CaptureError::SessionActive { .. })));
    assert!(session.is_active());
    assert_eq!(session.capture_count(), 1);
    assert_eq!(session.session_root().unwrap(), root);

    let _ = fs::remove_dir_all(&base);
}

/// WHAT: begin against a gone window fails and stays idle
/// WHY: A session must never start without a capturable target
#[test]
fn given_invalid_source_when_begin_then_window_gone_and_idle() {
    let base = temp_base("invalid-begin");
    let mut session = CaptureSession::new();

    let (source, valid, _) = FakeSource::healthy();
    valid.set(false);

    let result = session.begin(source, &base);

    assert!(matches!(result, Err(CaptureError::WindowGone { .. })));
    assert!(!session.is_active());

    let _ = fs::remove_dir_all(&base);
}

/// WHAT: Failed captures leave the numbering contiguous
/// WHY: The returned sequence must have no gaps for what was saved
#[test]
#[allow(clippy::unwrap_used)]
fn given_interleaved_failures_when_ended_then_paths_contiguous() {
    let base = temp_base("contiguous");
    let mut session = CaptureSession::new();

    let (source, _, fail_capture) = FakeSource::healthy();
    session.begin(source, &base).unwrap();

    session.capture_next().unwrap();
    session.capture_next().unwrap();

    // When: two captures fail mid-session
    fail_capture.set(true);
    assert!(session.capture_next().is_err());
    assert!(session.capture_next().is_err());
    fail_capture.set(false);

    session.capture_next().unwrap();
    let captured = session.end();

    // Then: exactly three paths, numbered without gaps
    let names: Vec<String> = captured
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["shot_0001.png", "shot_0002.png", "shot_0003.png"]);
    for path in &captured {
        assert!(path.exists(), "missing artifact {}", path.display());
    }

    let _ = fs::remove_dir_all(&base);
}

/// WHAT: A vanished window makes capture_next fail but keeps the session
/// WHY: Transient capture errors are recoverable; the caller may retry
#[test]
#[allow(clippy::unwrap_used)]
fn given_window_vanishes_when_capture_next_then_error_and_session_active() {
    let base = temp_base("vanish");
    let mut session = CaptureSession::new();

    let (source, valid, _) = FakeSource::healthy();
    session.begin(source, &base).unwrap();
    session.capture_next().unwrap();

    valid.set(false);
    let result = session.capture_next();

    assert!(matches!(result, Err(CaptureError::WindowGone { .. })));
    assert!(session.is_active());
    assert_eq!(session.capture_count(), 1);

    // Then: the window coming back resumes the contiguous numbering
    valid.set(true);
    let path = session.capture_next().unwrap();
    assert!(path.ends_with("shot_0002.png"));

    let _ = fs::remove_dir_all(&base);
}

/// WHAT: end returns every capture in order and resets to idle
/// WHY: The session hands its artifacts off atomically exactly once
#[test]
#[allow(clippy::unwrap_used)]
fn given_captures_when_ended_then_all_paths_returned_once() {
    let base = temp_base("end");
    let mut session = CaptureSession::new();

    let (source, _, _) = FakeSource::healthy();
    session.begin(source, &base).unwrap();
    let first = session.capture_next().unwrap();
    let second = session.capture_next().unwrap();

    let captured = session.end();

    assert_eq!(captured, vec![first, second]);
    assert!(!session.is_active());
    assert!(session.session_root().is_none());

    // Then: a second end yields nothing
    assert!(session.end().is_empty());

    let _ = fs::remove_dir_all(&base);
}

/// WHAT: Ending an idle session is a harmless no-op
/// WHY: Shutdown paths may end a session that never started
#[test]
fn given_idle_session_when_ended_then_empty_list() {
    let mut session: CaptureSession<FakeSource> = CaptureSession::new();

    assert!(session.end().is_empty());
    assert!(!session.is_active());
}

/// WHAT: Snapshots land under a raw subdirectory with no stray temp files
/// WHY: The session directory layout is part of the hand-off contract
#[test]
#[allow(clippy::unwrap_used)]
fn given_successful_captures_when_listed_then_only_final_pngs_on_disk() {
    let base = temp_base("layout");
    let mut session = CaptureSession::new();

    let (source, _, _) = FakeSource::healthy();
    session.begin(source, &base).unwrap();
    session.capture_next().unwrap();
    session.capture_next().unwrap();

    let root = session.session_root().unwrap().to_path_buf();
    let raw_dir = root.join("raw");
    let mut entries: Vec<String> = fs::read_dir(&raw_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    entries.sort();

    assert_eq!(entries, ["shot_0001.png", "shot_0002.png"]);

    session.end();
    let _ = fs::remove_dir_all(&base);
}
