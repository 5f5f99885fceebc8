use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Filesystem locations for captured artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory under which timestamped session folders are created.
    #[serde(default = "default_session_directory")]
    pub session_directory: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            session_directory: default_session_directory(),
        }
    }
}

fn default_session_directory() -> PathBuf {
    ProjectDirs::from("com", "scrollshot", "Scrollshot")
        .map(|dirs| dirs.data_dir().join("sessions"))
        .unwrap_or_else(|| PathBuf::from("sessions"))
}
