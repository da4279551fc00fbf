//! Device-level clip controls.

use crate::error::GainError;

/// A preloaded, replayable audio clip.
///
/// Implemented by [`RodioClip`](super::RodioClip) for real playback and by
/// fakes in player tests.
pub trait SoundClip {
    /// True while the clip is audibly playing.
    fn is_playing(&self) -> bool;

    /// Stop playback immediately.
    fn stop(&mut self);

    /// Reset the playback position to the start of the clip.
    fn rewind(&mut self);

    /// Lowest gain the backend supports, in decibels. Volume 0 maps here.
    fn min_gain_db(&self) -> f32;

    /// Apply a master gain in decibels.
    fn set_gain_db(&mut self, gain_db: f32) -> Result<(), GainError>;

    /// Start playback from the current position.
    fn start(&mut self);
}
