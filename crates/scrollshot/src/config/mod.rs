mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod paths_config;

pub(crate) use {
    capture_config::CaptureConfig, config::Config, hotkey_config::HotkeyConfig,
    paths_config::PathsConfig,
};

pub(crate) const DEFAULT_SCROLLS_PER_CAPTURE: u32 = 3;
pub(crate) const DEFAULT_COPY_LAST_CAPTURE: bool = true;

pub(crate) fn default_scrolls_per_capture() -> u32 {
    DEFAULT_SCROLLS_PER_CAPTURE
}

pub(crate) fn default_copy_last_capture() -> bool {
    DEFAULT_COPY_LAST_CAPTURE
}
