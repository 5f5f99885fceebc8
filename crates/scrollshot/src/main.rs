//! Scrollshot: scroll-driven window capture with a global trigger combination.

mod app;
mod app_command;
mod config;
mod error;
mod hook_listener;
mod key_map;
mod listener_command;
mod monitor_state;
mod output_handler;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    hook_listener::HookListener,
    listener_command::ListenerCommand,
    monitor_state::MonitorState,
    output_handler::OutputHandler,
    tray_command::TrayCommand,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use crate::config::Config;

use scrollshot_core::CaptureSession;
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("scrollshot=debug,scrollshot_core=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Persists across event loop iterations; the hook thread lives for
    // the rest of the process once spawned.
    let mut hook_thread: Option<std::thread::JoinHandle<()>> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetState(state) => {
                        if let Err(e) = tray_manager.update_state(state) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let output_handler = match OutputHandler::new() {
                    Ok(oh) => oh,
                    Err(e) => {
                        error!("Failed to create OutputHandler: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let (command_tx, command_rx) = mpsc::channel(32);

                // The combination resolves leniently: an unusable config
                // falls back to the default binding rather than refusing
                // to run.
                let spec = config.hotkey.combination();
                let threshold = config.capture.scrolls_per_capture;

                // The hook thread owns the matcher and scroll accumulator;
                // it is the single process-wide input listener.
                let (handle, control_tx) =
                    match HookListener::spawn(spec, threshold, command_tx.clone()) {
                        Ok(pair) => pair,
                        Err(e) => {
                            error!("Failed to spawn input hook listener: {:?}", e);
                            std::process::exit(1);
                        }
                    };
                hook_thread = Some(handle);

                info!(
                    combination = %spec.describe(),
                    scrolls_per_capture = threshold,
                    "Monitoring for trigger combination"
                );

                let tray_proxy = tray_proxy.clone();
                let open_folder_item_id = tray_manager.open_folder_item_id().clone();
                let clear_sessions_item_id = tray_manager.clear_sessions_item_id().clone();
                let rebind_item_id = tray_manager.rebind_item_id().clone();
                let exit_item_id = tray_manager.exit_item_id().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager and the hook thread stay where they are.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            session: CaptureSession::new(),
                            output_handler,
                            tray_proxy,
                            config,
                            state: MonitorState::Idle,
                            rebinding: false,
                            command_tx,
                            command_rx,
                            control_tx,
                            open_folder_item_id,
                            clear_sessions_item_id,
                            rebind_item_id,
                            exit_item_id,
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            _ => {}
        }

        // Keep the hook thread handle alive in the closure for the app's lifetime.
        let _ = &hook_thread;
    });
}
