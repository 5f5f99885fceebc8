//! System tray icon with state-based updates.
//!
//! Manages a system tray icon with three states (Idle, Capturing,
//! Rebinding) and a context menu mirroring the application actions:
//! open the capture folder, clear stored sessions, rebind the shortcut,
//! and exit.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    open_folder_item_id: MenuId,
    clear_sessions_item_id: MenuId,
    rebind_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create a new tray manager with initial state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let open_folder_item = MenuItem::new("Open capture folder", true, None);
        let clear_sessions_item = MenuItem::new("Clear session folder", true, None);
        let rebind_item = MenuItem::new("Rebind shortcut", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let open_folder_id = open_folder_item.id().clone();
        let clear_sessions_id = clear_sessions_item.id().clone();
        let rebind_id = rebind_item.id().clone();
        let exit_id = exit_item.id().clone();

        for item in [
            &open_folder_item,
            &clear_sessions_item,
            &rebind_item,
            &exit_item,
        ] {
            menu.append(item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let icon = Self::build_icon(TrayIconState::Idle)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("Scrollshot - Ready")
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            open_folder_item_id: open_folder_id,
            clear_sessions_item_id: clear_sessions_id,
            rebind_item_id: rebind_id,
            exit_item_id: exit_id,
        })
    }

    /// Update the tray icon state with new icon and tooltip.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let (icon, tooltip) = match state {
            TrayIconState::Idle => (Self::build_icon(state)?, "Scrollshot - Ready"),
            TrayIconState::Capturing => (Self::build_icon(state)?, "Scrollshot - Capturing..."),
            TrayIconState::Rebinding => {
                (Self::build_icon(state)?, "Scrollshot - Press new shortcut")
            }
        };

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Build the icon for a state as a solid color square.
    ///
    /// No bundled image assets; the icon is generated at runtime.
    #[track_caller]
    fn build_icon(state: TrayIconState) -> AppResult<Icon> {
        let color: [u8; 4] = match state {
            TrayIconState::Idle => [96, 96, 96, 255],
            TrayIconState::Capturing => [204, 60, 60, 255],
            TrayIconState::Rebinding => [228, 168, 40, 255],
        };

        let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
        for _ in 0..ICON_SIZE * ICON_SIZE {
            rgba.extend_from_slice(&color);
        }

        Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the open-capture-folder menu item ID.
    pub fn open_folder_item_id(&self) -> &MenuId {
        &self.open_folder_item_id
    }

    /// Get the clear-sessions menu item ID.
    pub fn clear_sessions_item_id(&self) -> &MenuId {
        &self.clear_sessions_item_id
    }

    /// Get the rebind-shortcut menu item ID.
    pub fn rebind_item_id(&self) -> &MenuId {
        &self.rebind_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
