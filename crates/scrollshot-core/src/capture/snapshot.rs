//! Best-effort window snapshots.
//!
//! The session talks to a narrow [`SnapshotSource`] interface; the shipped
//! implementation targets one OS window through `xcap`. Composited window
//! capture is preferred; windows that refuse it are captured by cropping a
//! screenshot of their monitor to the window's on-screen rectangle, which
//! includes whatever currently overlaps them.

use std::panic::Location;

use error_location::ErrorLocation;
use image::RgbaImage;
use tracing::{debug, instrument};
use xcap::{Monitor, Window};

use crate::{CaptureError, CoreResult};

/// Source of pixel snapshots for a capture session.
pub trait SnapshotSource {
    /// Whether the underlying target can still be captured.
    fn is_valid(&self) -> bool;

    /// Acquire one snapshot of the target's current content.
    fn capture(&self) -> CoreResult<RgbaImage>;

    /// Short description of the target for logs.
    fn describe(&self) -> String;
}

/// A top-level OS window targeted for capture.
pub struct WindowTarget {
    window: Window,
    id: u32,
}

impl WindowTarget {
    /// Select the currently focused window as the capture target.
    #[track_caller]
    #[instrument]
    pub fn frontmost() -> CoreResult<Self> {
        let windows = Window::all().map_err(|e| CaptureError::CaptureFailed {
            reason: format!("Failed to enumerate windows: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let window = windows
            .into_iter()
            .find(|w| w.is_focused().unwrap_or(false))
            .ok_or_else(|| CaptureError::NoTargetWindow {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let id = window.id().map_err(|e| CaptureError::CaptureFailed {
            reason: format!("Failed to read window id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { window, id })
    }

    /// The window's title, empty when unavailable.
    pub fn title(&self) -> String {
        self.window.title().unwrap_or_default()
    }

    #[track_caller]
    fn rect(&self) -> CoreResult<(i32, i32, u32, u32)> {
        let read = |name: &str, e: xcap::XCapError| CaptureError::CaptureFailed {
            reason: format!("Failed to read window {}: {}", name, e),
            location: ErrorLocation::from(Location::caller()),
        };
        let x = self.window.x().map_err(|e| read("x", e))?;
        let y = self.window.y().map_err(|e| read("y", e))?;
        let width = self.window.width().map_err(|e| read("width", e))?;
        let height = self.window.height().map_err(|e| read("height", e))?;
        Ok((x, y, width, height))
    }

    /// Screen-region fallback: crop the containing monitor's screenshot to
    /// the window's on-screen rectangle.
    #[track_caller]
    fn capture_screen_region(&self) -> CoreResult<RgbaImage> {
        let (x, y, width, height) = self.rect()?;

        let monitor = match Monitor::from_point(x + width as i32 / 2, y + height as i32 / 2) {
            Ok(monitor) => monitor,
            // Off-screen center point: fall back to the first monitor.
            Err(_) => Monitor::all()
                .ok()
                .and_then(|monitors| monitors.into_iter().next())
                .ok_or_else(|| CaptureError::CaptureFailed {
                    reason: "Failed to locate a monitor".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?,
        };

        let screen = monitor
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed {
                reason: format!("Screen capture failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let monitor_x = monitor.x().unwrap_or(0);
        let monitor_y = monitor.y().unwrap_or(0);

        // Intersect the window rectangle with the monitor image bounds.
        let local_x = (x - monitor_x).max(0) as u32;
        let local_y = (y - monitor_y).max(0) as u32;
        if local_x >= screen.width() || local_y >= screen.height() {
            return Err(CaptureError::CaptureFailed {
                reason: "Window is outside the monitor bounds".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let crop_width = width.min(screen.width() - local_x);
        let crop_height = height.min(screen.height() - local_y);

        Ok(image::imageops::crop_imm(&screen, local_x, local_y, crop_width, crop_height).to_image())
    }
}

impl SnapshotSource for WindowTarget {
    fn is_valid(&self) -> bool {
        let Ok(windows) = Window::all() else {
            return false;
        };
        windows
            .iter()
            .any(|w| w.id().map(|id| id == self.id).unwrap_or(false))
    }

    fn capture(&self) -> CoreResult<RgbaImage> {
        let (_, _, width, height) = self.rect()?;
        if width == 0 || height == 0 {
            return Err(CaptureError::DegenerateWindowRect {
                width,
                height,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match self.window.capture_image() {
            Ok(image) => Ok(image),
            Err(e) => {
                debug!(window = self.id, error = %e, "Composited capture failed, trying screen region");
                self.capture_screen_region()
            }
        }
    }

    fn describe(&self) -> String {
        format!("{} [{}]", self.title(), self.id)
    }
}
