//! Plugin lifecycle: startup bootstrap, the chat callback, shutdown.
//!
//! The host integration layer constructs [`HornPlugin`] once, registers
//! [`HornPlugin::handle_chat_message`] with its event dispatch, and calls
//! [`HornPlugin::stop`] on unload. The core has no framework dependency of
//! its own.

use crate::audio::RodioClip;
use crate::bootstrap::ensure_sound_file;
use crate::chat::ChatMessage;
use crate::config::{SharedSettings, SoundPaths};
use crate::error::StartupError;
use crate::player::HornPlayer;

pub struct HornPlugin {
    player: HornPlayer<RodioClip>,
}

impl HornPlugin {
    /// Start the plugin: provision the sound file, then open the clip.
    ///
    /// Any failure is logged and leaves playback disabled for the session;
    /// the host client itself is never failed. Blocking filesystem and
    /// audio-device I/O is confined to this one call.
    pub fn start(settings: SharedSettings, paths: &SoundPaths) -> Self {
        tracing::info!("Horn Sound started");

        let clip = match load_clip(paths) {
            Ok(clip) => {
                tracing::info!(path = %paths.sound_file.display(), "Horn loaded");
                Some(clip)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load horn sound, playback disabled");
                None
            }
        };

        Self {
            player: HornPlayer::new(clip, settings),
        }
    }

    /// The synchronous chat callback, invoked with one message at a time.
    pub fn handle_chat_message(&mut self, message: &ChatMessage) {
        self.player.on_chat_message(message);
    }

    /// True when startup produced a playable clip.
    pub fn is_loaded(&self) -> bool {
        self.player.is_loaded()
    }

    /// Stop the plugin, releasing the clip exactly once. Safe even when
    /// startup never loaded one.
    pub fn stop(mut self) {
        self.player.shutdown();
        tracing::info!("Horn Sound stopped");
    }
}

fn load_clip(paths: &SoundPaths) -> Result<RodioClip, StartupError> {
    ensure_sound_file(paths)?;
    Ok(RodioClip::open(&paths.sound_file)?)
}
