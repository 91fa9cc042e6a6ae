//! User preferences carried by the model as an opaque pass-through.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ROSTER_FILE_PATH: &str = "data/clinicbook.json";

/// Settings owned by outer layers. Commands never read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    /// Where the storage collaborator keeps the roster file.
    pub roster_file_path: PathBuf,
    /// Level passed to `init_logging` by the host process.
    pub log_level: String,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            roster_file_path: PathBuf::from(DEFAULT_ROSTER_FILE_PATH),
            log_level: default_log_level().to_string(),
        }
    }
}
