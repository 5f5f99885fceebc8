use crate::{
    AppCommand, AppError, AppResult, ListenerCommand, MonitorState, OutputHandler, TrayCommand,
    TrayIconState, config::Config,
};

use std::{fs, panic::Location, time::Instant};

use error_location::ErrorLocation;
use scrollshot_core::{CaptureSession, CombinationSpec, SnapshotSource, WindowTarget};
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use tray_icon::menu::{MenuEvent, MenuId};
use uuid::Uuid;

/// Main application state.
///
/// Runs on the async runtime thread, one command at a time, so capture
/// work never executes on the hook-delivery thread. Tray icon updates are
/// sent back to the main thread via `tray_proxy` because `TrayIcon` is
/// `!Send` and must remain on the UI thread.
pub struct App {
    pub(crate) session: CaptureSession<WindowTarget>,
    pub(crate) output_handler: OutputHandler,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) config: Config,
    pub(crate) state: MonitorState,
    pub(crate) rebinding: bool,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) control_tx: std::sync::mpsc::Sender<ListenerCommand>,
    pub(crate) open_folder_item_id: MenuId,
    pub(crate) clear_sessions_item_id: MenuId,
    pub(crate) rebind_item_id: MenuId,
    pub(crate) exit_item_id: MenuId,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Scrollshot starting");

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when tray_event_rx is dropped (main loop breaks),
        // tray_event_tx.blocking_send() fails, breaking the blocking loop.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    if let Err(e) = self.handle_tray_event(event).await {
                        error!(error = ?e, "Failed to handle tray event");
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::ToggleCapture => {
                            if let Err(e) = self.handle_toggle() {
                                error!(error = ?e, "Failed to toggle capture mode");
                            }
                        }
                        AppCommand::CaptureRequest => {
                            self.handle_capture_request();
                        }
                        AppCommand::CombinationRecorded { spec } => {
                            if let Err(e) = self.handle_combination_recorded(spec) {
                                error!(error = ?e, "Failed to apply recorded combination");
                            }
                        }
                        AppCommand::HookFailed { reason } => {
                            // Reported once; there is no retry for a failed
                            // low-level hook, activation stays disabled.
                            error!(reason = %reason, "Input hook unavailable, activation disabled");
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
        info!("Scrollshot shut down successfully");

        Ok(())
    }

    /// Flip between idle and an active capture session.
    #[instrument(skip(self))]
    fn handle_toggle(&mut self) -> AppResult<()> {
        match self.state {
            MonitorState::Idle => self.enter_capture_mode(),
            MonitorState::Capturing { .. } => self.exit_capture_mode(),
        }
    }

    /// Start a capture session against the frontmost window.
    fn enter_capture_mode(&mut self) -> AppResult<()> {
        let target = WindowTarget::frontmost()?;
        let session_id = Uuid::new_v4();

        info!(
            session_id = %session_id,
            target = %target.describe(),
            "Starting capture session"
        );

        let base_dir = self.config.paths.session_directory.clone();
        self.session.begin(target, &base_dir)?;

        // Open the scroll gate before exposing the new state; if the
        // listener is gone, abandon the session instead of capturing
        // frames nothing will ever request.
        if let Err(e) = self.send_control(ListenerCommand::SetCaptureMode(true)) {
            let _ = self.session.end();
            return Err(e);
        }

        self.state = MonitorState::Capturing {
            started_at: Instant::now(),
            session_id,
        };
        let _ = self
            .tray_proxy
            .send_event(TrayCommand::SetState(TrayIconState::Capturing));

        // First frame immediately; scrolling drives the rest.
        if let Err(e) = self.session.capture_next() {
            warn!(session_id = %session_id, error = %e, "Initial capture failed");
        }

        Ok(())
    }

    /// End the active session and hand its artifacts off.
    fn exit_capture_mode(&mut self) -> AppResult<()> {
        let MonitorState::Capturing {
            started_at,
            session_id,
        } = self.state
        else {
            return Ok(());
        };

        // Best effort: a dead listener cannot deliver wheel events anyway.
        if let Err(e) = self.send_control(ListenerCommand::SetCaptureMode(false)) {
            warn!(error = ?e, "Failed to disable capture mode on listener");
        }

        let captured = self.session.end();
        self.state = MonitorState::Idle;
        let _ = self
            .tray_proxy
            .send_event(TrayCommand::SetState(TrayIconState::Idle));

        info!(
            session_id = %session_id,
            frames = captured.len(),
            duration_ms = started_at.elapsed().as_millis(),
            "Capture session ended"
        );

        if self.config.capture.copy_last_capture {
            if let Some(last) = captured.last() {
                if let Err(e) = self.output_handler.copy_image(last) {
                    warn!(
                        session_id = %session_id,
                        error = %e,
                        "Clipboard hand-off failed, files remain on disk"
                    );
                }
            }
        }

        Ok(())
    }

    /// Capture one frame in response to a scroll threshold crossing.
    #[instrument(skip(self))]
    fn handle_capture_request(&mut self) {
        let MonitorState::Capturing { session_id, .. } = self.state else {
            // Stale request from a session that just ended.
            return;
        };

        match self.session.capture_next() {
            Ok(path) => {
                info!(
                    session_id = %session_id,
                    frame = self.session.capture_count(),
                    path = ?path,
                    "Frame captured"
                );
            }
            Err(e) => {
                // Transient: no artifact recorded, the session stays
                // active and the next scroll may succeed.
                warn!(session_id = %session_id, error = %e, "Capture failed");
            }
        }
    }

    /// Persist and apply a combination from the interactive recorder.
    #[instrument(skip(self))]
    fn handle_combination_recorded(&mut self, spec: CombinationSpec) -> AppResult<()> {
        info!(combination = %spec.describe(), "New combination recorded");
        self.rebinding = false;

        self.send_control(ListenerCommand::SetSpec(spec))?;
        self.send_control(ListenerCommand::SetScrollThreshold(
            self.config.capture.scrolls_per_capture,
        ))?;
        let _ = self
            .tray_proxy
            .send_event(TrayCommand::SetState(TrayIconState::Idle));

        self.config.hotkey.set_combination(&spec);
        self.config.save()?;

        Ok(())
    }

    /// Dispatch a tray menu selection.
    #[instrument(skip(self, event))]
    async fn handle_tray_event(&mut self, event: MenuEvent) -> AppResult<()> {
        if event.id == self.open_folder_item_id {
            self.open_capture_folder()
        } else if event.id == self.clear_sessions_item_id {
            self.clear_session_folder()
        } else if event.id == self.rebind_item_id {
            self.begin_rebind()
        } else if event.id == self.exit_item_id {
            info!("Exit requested from tray menu");
            self.command_tx
                .send(AppCommand::Shutdown)
                .await
                .map_err(|e| AppError::ChannelSendFailed {
                    message: format!("Failed to send Shutdown: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
        } else {
            Ok(())
        }
    }

    fn open_capture_folder(&self) -> AppResult<()> {
        let dir = &self.config.paths.session_directory;
        fs::create_dir_all(dir)?;
        open::that(dir)?;
        info!(dir = ?dir, "Opened capture folder");
        Ok(())
    }

    fn clear_session_folder(&mut self) -> AppResult<()> {
        if self.session.is_active() {
            warn!("Refusing to clear sessions while capture mode is active");
            return Ok(());
        }

        let dir = &self.config.paths.session_directory;
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;

        info!(dir = ?dir, "Session folder cleared");
        Ok(())
    }

    /// Toggle interactive rebinding: a second selection cancels.
    fn begin_rebind(&mut self) -> AppResult<()> {
        if self.rebinding {
            self.send_control(ListenerCommand::CancelRebind)?;
            self.rebinding = false;
            let _ = self
                .tray_proxy
                .send_event(TrayCommand::SetState(TrayIconState::Idle));
            info!("Rebind cancelled");
            return Ok(());
        }

        if self.session.is_active() {
            warn!("Finish the capture session before rebinding the shortcut");
            return Ok(());
        }

        self.send_control(ListenerCommand::BeginRebind)?;
        self.rebinding = true;
        let _ = self
            .tray_proxy
            .send_event(TrayCommand::SetState(TrayIconState::Rebinding));

        info!("Waiting for the user to demonstrate a new combination");
        Ok(())
    }

    #[track_caller]
    fn send_control(&self, command: ListenerCommand) -> AppResult<()> {
        self.control_tx
            .send(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send listener command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
