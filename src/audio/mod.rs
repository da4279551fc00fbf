//! Audio playback: the clip abstraction and its rodio backend.
//!
//! The plugin owns exactly one clip, opened at startup and held until
//! shutdown. No decoding or mixing happens here; that is the backend's job.

mod clip;
mod playback;

pub use clip::SoundClip;
pub use playback::RodioClip;
