//! First-start provisioning of the on-disk sound file.
//!
//! The user may replace the file with their own clip; once present it is
//! never touched again.

use std::fs;

use crate::config::SoundPaths;
use crate::error::BootstrapError;

/// Ensure a playable sound file exists at the configured path.
///
/// No-op when the file is already there. Otherwise the plugin directory is
/// created and the bundled default copied into place. Idempotent across
/// restarts.
pub fn ensure_sound_file(paths: &SoundPaths) -> Result<(), BootstrapError> {
    if paths.sound_file.exists() {
        tracing::debug!(path = %paths.sound_file.display(), "Sound file present, keeping user copy");
        return Ok(());
    }

    if let Some(dir) = paths.sound_file.parent() {
        fs::create_dir_all(dir).map_err(|source| BootstrapError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    if !paths.bundled_default.exists() {
        return Err(BootstrapError::DefaultSoundMissing {
            path: paths.bundled_default.clone(),
        });
    }

    fs::copy(&paths.bundled_default, &paths.sound_file).map_err(|source| {
        BootstrapError::CopyDefault {
            path: paths.sound_file.clone(),
            source,
        }
    })?;

    tracing::info!(
        from = %paths.bundled_default.display(),
        to = %paths.sound_file.display(),
        "Copied bundled default sound"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::config::SoundPaths;

    fn paths_in(dir: &std::path::Path) -> SoundPaths {
        let bundled = dir.join("bundled").join("horn.wav");
        fs::create_dir_all(bundled.parent().unwrap()).unwrap();
        fs::write(&bundled, b"default horn").unwrap();
        SoundPaths::new(dir.join("data").join("horn-sound").join("horn.wav"), bundled)
    }

    #[test]
    fn copies_default_when_absent() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        ensure_sound_file(&paths).unwrap();

        assert_eq!(fs::read(&paths.sound_file).unwrap(), b"default horn");
    }

    #[test]
    fn preserves_user_copy_on_second_run() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        ensure_sound_file(&paths).unwrap();
        fs::write(&paths.sound_file, b"my custom horn").unwrap();
        ensure_sound_file(&paths).unwrap();

        assert_eq!(fs::read(&paths.sound_file).unwrap(), b"my custom horn");
    }

    #[test]
    fn missing_bundled_default_is_reported() {
        let dir = tempdir().unwrap();
        let paths = SoundPaths::new(
            dir.path().join("data").join("horn.wav"),
            dir.path().join("nowhere").join("horn.wav"),
        );

        let err = ensure_sound_file(&paths).unwrap_err();
        assert!(matches!(err, BootstrapError::DefaultSoundMissing { .. }));
        assert!(!paths.sound_file.exists());
    }

    #[test]
    fn unwritable_plugin_directory_is_reported() {
        let dir = tempdir().unwrap();
        // A regular file where the plugin directory should go makes
        // create_dir_all fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let paths = SoundPaths::new(
            blocker.join("horn-sound").join("horn.wav"),
            dir.path().join("bundled").join("horn.wav"),
        );

        let err = ensure_sound_file(&paths).unwrap_err();
        assert!(matches!(err, BootstrapError::CreateDir { .. }));
    }
}
