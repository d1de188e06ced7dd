// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketch export: write the encoded PNG to a fixed local path.
//
// Write failures are reported as `SketchwerkError::Export`, which the UI
// treats as a non-fatal warning: the sketch in memory is untouched.

use std::path::{Path, PathBuf};

use sketchwerk_core::error::{Result, SketchwerkError};
use tracing::{info, instrument, warn};

/// Write already-encoded PNG bytes to `path`, creating parent directories.
#[instrument(skip(png), fields(path = %path.as_ref().display(), png_len = png.len()))]
pub fn export_png(png: &[u8], path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let export_err = |reason: String| SketchwerkError::Export {
        path: path.display().to_string(),
        reason,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|err| {
            warn!(error = %err, "Could not create output directory");
            export_err(format!("cannot create directory {}: {err}", parent.display()))
        })?;
    }

    std::fs::write(path, png).map_err(|err| {
        warn!(error = %err, "Sketch write failed");
        export_err(err.to_string())
    })?;

    info!(bytes = png.len(), "Sketch saved");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_png;
    use image::{GrayImage, Luma};

    fn sketch() -> GrayImage {
        GrayImage::from_fn(6, 4, |x, y| Luma([(x * 30 + y * 10) as u8]))
    }

    fn sketch_png() -> Vec<u8> {
        encode_png(&sketch()).unwrap()
    }

    #[test]
    fn writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");

        let written = export_png(&sketch_png(), &path).unwrap();
        assert_eq!(written, path);

        let reloaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(reloaded, sketch());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("sketch.png");
        export_png(&sketch_png(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");
        std::fs::write(&path, b"old").unwrap();

        export_png(&sketch_png(), &path).unwrap();
        assert_ne!(std::fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn unwritable_target_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten by a file write.
        let err = export_png(&sketch_png(), dir.path()).unwrap_err();
        match err {
            SketchwerkError::Export { path, .. } => {
                assert_eq!(path, dir.path().display().to_string());
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
