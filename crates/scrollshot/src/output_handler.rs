//! Clipboard hand-off for captured frames.
//!
//! After a session ends, the final frame can be placed on the clipboard
//! as an image so it pastes directly into the consuming application. The
//! files on disk stay the source of truth; clipboard failure is never
//! fatal.

use crate::{AppError, AppResult};

use std::{borrow::Cow, panic::Location, path::Path};

use arboard::{Clipboard, ImageData};
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Output handler for clipboard operations.
pub struct OutputHandler {
    pub(crate) clipboard: Clipboard,
}

impl OutputHandler {
    /// Create a new output handler.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| AppError::ClipboardError {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("OutputHandler initialized");

        Ok(Self { clipboard })
    }

    /// Decode a captured PNG and place it on the clipboard as an image.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn copy_image(&mut self, path: &Path) -> AppResult<()> {
        let image = image::open(path)
            .map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to decode capture {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .into_rgba8();

        let (width, height) = image.dimensions();
        let data = ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(image.into_raw()),
        };

        self.clipboard
            .set_image(data)
            .map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to set clipboard image: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(path = ?path, width, height, "Capture copied to clipboard");

        Ok(())
    }
}
