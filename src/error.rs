//! Error types for the plugin core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while provisioning the on-disk sound file
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to create plugin directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundled default sound not found at {path}")]
    DefaultSoundMissing { path: PathBuf },

    #[error("failed to copy bundled default sound to {path}")]
    CopyDefault {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while opening the audio clip
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio output stream")]
    OutputStream(#[from] rodio::StreamError),

    #[error("failed to open sound file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("failed to create playback sink")]
    Sink(#[from] rodio::PlayError),
}

/// Any failure on the startup path.
///
/// Callers catch and log these; the session continues with playback
/// disabled rather than failing the host client.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Gain control failure during playback; the clip still plays, just at
/// whatever volume the device is at
#[derive(Debug, Error)]
pub enum GainError {
    #[error("gain control not supported by the audio backend")]
    Unsupported,
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
