// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where Sketchwerk keeps its settings file.

use std::path::PathBuf;

/// Overrides the data directory outright when set.
pub const DATA_DIR_ENV: &str = "SKETCHWERK_DATA_DIR";

/// Return the application data directory, creating it if needed.
///
/// Only `config.json` lives here; sketches go to the configured output path.
pub fn data_dir() -> PathBuf {
    let dir = std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| platform_data_home().join("sketchwerk"));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

/// `$XDG_DATA_HOME`, else `~/.local/share`, else the temp dir.
fn platform_data_home() -> PathBuf {
    std::env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(std::env::temp_dir)
}
