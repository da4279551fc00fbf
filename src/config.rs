//! Plugin settings and on-disk locations.
//!
//! Settings are owned by the host's configuration layer; the player only
//! reads them, freshly on every playback attempt, through [`SharedSettings`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the horn clip, both bundled and in the plugin directory.
pub const SOUND_FILE_NAME: &str = "horn.wav";

/// Directory under the host data dir that holds the plugin's sound file.
pub const PLUGIN_DIR_NAME: &str = "horn-sound";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HornSettings {
    /// Horn volume as a percentage (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Don't play the sound when another player encourages you
    #[serde(default)]
    pub disable_encouraged_by_others: bool,
}

fn default_volume() -> u8 {
    100
}

impl Default for HornSettings {
    fn default() -> Self {
        Self {
            volume: 100,
            disable_encouraged_by_others: false,
        }
    }
}

impl HornSettings {
    /// Load persisted settings, falling back to defaults when no config
    /// file exists yet.
    pub fn load() -> Self {
        confy::load(PLUGIN_DIR_NAME, "config").unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(PLUGIN_DIR_NAME, "config", self).map_err(ConfigError::Save)
    }

    /// Wrap in the shared handle the host and player both hold.
    pub fn into_shared(self) -> SharedSettings {
        Arc::new(RwLock::new(self))
    }
}

/// Settings shared with the host; runtime changes apply to the next
/// playback without a restart.
pub type SharedSettings = Arc<RwLock<HornSettings>>;

/// Where the sound file lives and where its bundled default comes from.
#[derive(Debug, Clone)]
pub struct SoundPaths {
    /// User-editable clip, created on first start and never overwritten
    pub sound_file: PathBuf,

    /// Default clip shipped with the plugin package
    pub bundled_default: PathBuf,
}

impl SoundPaths {
    pub fn new(sound_file: PathBuf, bundled_default: PathBuf) -> Self {
        Self {
            sound_file,
            bundled_default,
        }
    }

    /// Resolve the standard layout: the clip under the host data directory,
    /// the bundled default inside the given install directory.
    pub fn resolve(bundled_dir: &Path) -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            sound_file: data_dir.join(PLUGIN_DIR_NAME).join(SOUND_FILE_NAME),
            bundled_default: bundled_dir.join(SOUND_FILE_NAME),
        }
    }
}
