pub mod audio;
pub mod bootstrap;
pub mod chat;
pub mod config;
pub mod error;
pub mod player;
pub mod plugin;

// Re-exports for convenience
pub use audio::{RodioClip, SoundClip};
pub use bootstrap::ensure_sound_file;
pub use chat::{ChatMessage, ChatMessageKind};
pub use config::{HornSettings, SharedSettings, SoundPaths};
pub use error::{AudioError, BootstrapError, ConfigError, GainError, StartupError};
pub use player::HornPlayer;
pub use plugin::HornPlugin;
