//! Event-triggered horn playback.

use crate::audio::SoundClip;
use crate::chat::{ChatMessage, ChatMessageKind};
use crate::config::{HornSettings, SharedSettings};

/// Broadcast text when the player uses the horn themselves.
const SELF_ENCOURAGE: &str = "You encourage nearby allies";

/// Broadcast text when another player's horn reaches you.
const ENCOURAGED_BY_OTHER: &str = "encourages you with";

const MIN_DB: f32 = -20.0;
const MAX_DB: f32 = 6.0;

/// Map a volume percentage to a gain in decibels.
///
/// Volume 0 mutes by dropping to the backend minimum; everything else maps
/// linearly onto [-20, +6] dB.
pub fn gain_db_for_volume(volume: u8, min_gain_db: f32) -> f32 {
    if volume == 0 {
        min_gain_db
    } else {
        MIN_DB + (f32::from(volume) / 100.0) * (MAX_DB - MIN_DB)
    }
}

/// Plays the horn clip in response to matching chat messages.
///
/// Holds the one clip opened at startup. `None` means startup failed;
/// every trigger is then a safe no-op for the rest of the session.
pub struct HornPlayer<C: SoundClip> {
    clip: Option<C>,
    settings: SharedSettings,
}

impl<C: SoundClip> HornPlayer<C> {
    pub fn new(clip: Option<C>, settings: SharedSettings) -> Self {
        Self { clip, settings }
    }

    /// True when a clip was loaded and triggers will play sound.
    pub fn is_loaded(&self) -> bool {
        self.clip.is_some()
    }

    /// Handle one chat message from the host.
    ///
    /// Only `GameMessage` and `Spam` kinds carry the horn broadcast. The
    /// two substring checks are first-match-wins: a self-encourage match
    /// skips the received-horn branch entirely.
    pub fn on_chat_message(&mut self, message: &ChatMessage) {
        if message.kind != ChatMessageKind::GameMessage && message.kind != ChatMessageKind::Spam {
            return;
        }

        if message.text.contains(SELF_ENCOURAGE) {
            tracing::info!("Horn activated (you encouraged others), playing sound");
            self.play_sound();
        } else if message.text.contains(ENCOURAGED_BY_OTHER)
            && !self.settings().disable_encouraged_by_others
        {
            tracing::info!("Horn activated (you were encouraged), playing sound");
            self.play_sound();
        }
    }

    /// Restart the clip from the start at the currently configured volume.
    ///
    /// A trigger while the clip is still playing interrupts it: stop,
    /// rewind, reapply gain, start again. No queueing, no overlap.
    pub fn play_sound(&mut self) {
        let Some(clip) = self.clip.as_mut() else {
            return;
        };

        if clip.is_playing() {
            clip.stop();
        }
        clip.rewind();

        let volume = self.settings.read().unwrap_or_else(|e| e.into_inner()).volume;
        let gain_db = gain_db_for_volume(volume, clip.min_gain_db());
        if let Err(err) = clip.set_gain_db(gain_db) {
            tracing::warn!(volume, error = %err, "Gain control unavailable, playing at device volume");
        }

        clip.start();
    }

    /// Stop playback if running and release the clip. Safe to call when
    /// startup never loaded one, and idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut clip) = self.clip.take()
            && clip.is_playing()
        {
            clip.stop();
        }
    }

    // Always read fresh so runtime config changes apply to the next event.
    fn settings(&self) -> HornSettings {
        self.settings.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
