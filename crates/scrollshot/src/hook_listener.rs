//! Global input hook listener.
//!
//! Runs the OS-level keyboard/mouse hook on a dedicated thread and feeds
//! every event, in arrival order, through the combination matcher (or the
//! interactive recorder during a rebind) and the scroll accumulator. The
//! hook mechanism serializes delivery, so all listener state is owned by
//! this thread and mutated without locks.
//!
//! This is the single process-wide input listener: spawned once at
//! startup, alive for the process lifetime (the underlying hook cannot be
//! unregistered), communicating outward only through channels.

use crate::{AppCommand, AppError, AppResult, ListenerCommand, key_map};

use std::panic::Location;
use std::sync::mpsc::Receiver;

use error_location::ErrorLocation;
use rdev::EventType;
use scrollshot_core::{
    CombinationMatcher, CombinationRecorder, CombinationSpec, KeyCode, ScrollAccumulator,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Consumes raw hook events and emits [`AppCommand`]s.
pub struct HookListener {
    matcher: CombinationMatcher,
    scroll: ScrollAccumulator,
    recorder: Option<CombinationRecorder>,
    capture_mode: bool,
    command_tx: mpsc::Sender<AppCommand>,
    control_rx: Receiver<ListenerCommand>,
}

impl HookListener {
    /// Create a listener in matching mode with capture mode off.
    pub(crate) fn new(
        spec: CombinationSpec,
        scrolls_per_capture: u32,
        command_tx: mpsc::Sender<AppCommand>,
        control_rx: Receiver<ListenerCommand>,
    ) -> Self {
        Self {
            matcher: CombinationMatcher::new(spec),
            scroll: ScrollAccumulator::new(scrolls_per_capture),
            recorder: None,
            capture_mode: false,
            command_tx,
            control_rx,
        }
    }

    /// Spawn the hook thread and return its control handle.
    ///
    /// The thread installs the low-level hook and blocks delivering events
    /// for the rest of the process lifetime. If installation fails, the
    /// failure is reported once as [`AppCommand::HookFailed`] and the
    /// thread exits; activation stays disabled.
    pub fn spawn(
        spec: CombinationSpec,
        scrolls_per_capture: u32,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> AppResult<(
        std::thread::JoinHandle<()>,
        std::sync::mpsc::Sender<ListenerCommand>,
    )> {
        let (control_tx, control_rx) = std::sync::mpsc::channel();
        let listener = Self::new(spec, scrolls_per_capture, command_tx, control_rx);

        let handle = std::thread::Builder::new()
            .name("input-hook".to_string())
            .spawn(move || listener.run())
            .map_err(|e| AppError::HookRegistrationFailed {
                reason: format!("Failed to spawn hook thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok((handle, control_tx))
    }

    fn run(mut self) {
        info!("Input hook listener starting");
        let command_tx = self.command_tx.clone();

        if let Err(e) = rdev::listen(move |event| self.handle_event(event)) {
            let reason = format!("{:?}", e);
            error!(reason = %reason, "Failed to install low-level input hook");
            if command_tx
                .blocking_send(AppCommand::HookFailed { reason })
                .is_err()
            {
                warn!("Command channel closed before hook failure could be reported");
            }
        }
    }

    /// Process one hook event.
    ///
    /// Pending control messages are drained first so spec, threshold, and
    /// mode changes are ordered with respect to the event stream.
    pub(crate) fn handle_event(&mut self, event: rdev::Event) {
        self.drain_control();

        match event.event_type {
            EventType::KeyPress(key) => {
                if let Some(code) = key_map::key_code(key) {
                    self.on_key(code, true);
                }
            }
            EventType::KeyRelease(key) => {
                if let Some(code) = key_map::key_code(key) {
                    self.on_key(code, false);
                }
            }
            EventType::Wheel { delta_y, .. } => {
                self.on_wheel(delta_y as i32);
            }
            _ => {}
        }
    }

    fn on_key(&mut self, code: KeyCode, pressed: bool) {
        if let Some(recorder) = &mut self.recorder {
            if let Some(spec) = recorder.on_key(code, pressed) {
                self.recorder = None;
                self.send(AppCommand::CombinationRecorded { spec });
            }
            return;
        }

        if self.matcher.on_key(code, pressed) {
            self.send(AppCommand::ToggleCapture);
        }
    }

    fn on_wheel(&mut self, delta: i32) {
        if !self.capture_mode {
            return;
        }
        if self.scroll.on_wheel(delta) {
            self.send(AppCommand::CaptureRequest);
        }
    }

    fn drain_control(&mut self) {
        while let Ok(command) = self.control_rx.try_recv() {
            match command {
                ListenerCommand::SetSpec(spec) => {
                    debug!(combination = %spec.describe(), "Listener spec updated");
                    self.matcher.set_spec(spec);
                }
                ListenerCommand::SetCaptureMode(enabled) => {
                    self.capture_mode = enabled;
                    self.scroll.reset();
                }
                ListenerCommand::SetScrollThreshold(threshold) => {
                    self.scroll.set_threshold(threshold);
                }
                ListenerCommand::BeginRebind => {
                    self.recorder = Some(CombinationRecorder::new());
                }
                ListenerCommand::CancelRebind => {
                    self.recorder = None;
                }
            }
        }
    }

    fn send(&self, command: AppCommand) {
        // blocking_send is safe here: this thread is not a tokio worker.
        if self.command_tx.blocking_send(command).is_err() {
            warn!("Command channel closed, dropping input event");
        }
    }
}
