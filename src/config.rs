use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

fn default_photo_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("snapdo")
        .join("photos")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct SnapdoConfig {
    /// Where imported photos are stored.
    pub photo_directory: PathBuf,
    pub debug_logging: bool,
}

impl Default for SnapdoConfig {
    fn default() -> Self {
        Self {
            photo_directory: default_photo_dir(),
            debug_logging: false,
        }
    }
}

impl SnapdoConfig {
    /// Ensure the photo directory exists.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.photo_directory)
    }
}
