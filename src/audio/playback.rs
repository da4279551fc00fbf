//! rodio-backed clip playback.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::clip::SoundClip;
use crate::error::{AudioError, GainError};

/// Gain floor reported as the backend minimum; amplitude 1e-4, inaudible.
const MIN_GAIN_DB: f32 = -80.0;

/// A sound file decoded once and replayed through a persistent sink.
pub struct RodioClip {
    // The sink goes silent if the stream is dropped; keep it alive alongside.
    _stream: OutputStream,
    sink: Sink,
    source: Buffered<Decoder<BufReader<File>>>,
}

impl RodioClip {
    /// Open `path` on the default output device, decoding the whole clip
    /// up front so triggers never touch the filesystem.
    pub fn open(path: &Path) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let file = File::open(path).map_err(|source| AudioError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|source| AudioError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .buffered();
        let sink = Sink::try_new(&handle)?;

        Ok(Self {
            _stream: stream,
            sink,
            source,
        })
    }
}

fn db_to_amplitude(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

impl SoundClip for RodioClip {
    fn is_playing(&self) -> bool {
        !self.sink.empty()
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn rewind(&mut self) {
        // stop() drains the sink's queue; start() always appends the
        // buffered source from position zero, so nothing to seek here.
    }

    fn min_gain_db(&self) -> f32 {
        MIN_GAIN_DB
    }

    fn set_gain_db(&mut self, gain_db: f32) -> Result<(), GainError> {
        self.sink.set_volume(db_to_amplitude(gain_db));
        Ok(())
    }

    fn start(&mut self) {
        self.sink.append(self.source.clone());
        self.sink.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_mapping_hits_reference_points() {
        assert!((db_to_amplitude(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_amplitude(-20.0) - 0.1).abs() < 1e-6);
        assert!((db_to_amplitude(6.0) - 1.995).abs() < 1e-3);
        // The reported minimum is effectively silence.
        assert!(db_to_amplitude(MIN_GAIN_DB) < 1e-3);
    }
}
