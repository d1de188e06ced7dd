// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: owns the sketch handler and the persisted config,
// and exposes one method per user action for the Dioxus UI to call.
//
// Everything runs synchronously on the UI thread: one click, one request.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sketchwerk_core::AppConfig;
use sketchwerk_core::error::Result;
use sketchwerk_sketch::export_png;
use sketchwerk_sketch::{SketchHandler, SketchRequest, SketchResponse};
use tracing::{debug, info, warn};

use super::data_dir;
use super::upload::Upload;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into event closures without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    handler: Arc<Mutex<SketchHandler>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise services from the platform data directory. Call once at startup.
    pub fn init() -> Self {
        Self::with_data_dir(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir` (used by `init` and tests).
    pub fn with_data_dir(dir: PathBuf) -> Self {
        info!(path = %dir.display(), "initialising app services");
        let config = load_config(&dir);
        let handler = SketchHandler::new(config.cache_capacity);
        Self {
            handler: Arc::new(Mutex::new(handler)),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        }
    }

    // -- Upload / convert / download ------------------------------------------

    /// Read a picked file as an upload.
    pub fn load_upload(&self, path: &Path) -> Result<Upload> {
        let upload = Upload::open(path)?;
        info!(file = %upload.name, format = %upload.format, bytes = upload.bytes.len(), "image uploaded");
        Ok(upload)
    }

    /// Turn an upload into a sketch using the current settings.
    pub fn convert(&self, upload: &Upload) -> Result<SketchResponse> {
        let settings = self.config().sketch_settings();
        let request = SketchRequest::new(&upload.bytes, settings);
        let mut handler = lock(&self.handler);
        let response = handler.handle(&request)?;
        debug!(cached = handler.cache().len(), from_cache = response.from_cache, "conversion finished");
        Ok(response)
    }

    /// Write the sketch's PNG to the configured output path.
    pub fn download(&self, sketch: &SketchResponse) -> Result<PathBuf> {
        let path = self.config().output_path;
        export_png(&sketch.png, &path)
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        lock(&self.config).clone()
    }

    /// Validate, apply, and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        persist_config(&self.data_dir, config)?;
        lock(&self.handler).set_cache_capacity(config.cache_capacity);
        *lock(&self.config) = config.clone();
        Ok(())
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// A poisoned lock only means an earlier click panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join(CONFIG_FILE);
    let Ok(data) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match AppConfig::from_json(&data).and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unusable config, using defaults");
            AppConfig::default()
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    std::fs::write(&path, config.to_json()?)?;
    info!(path = %path.display(), "config saved");
    Ok(())
}
