// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.
//
// Holds only the latest request (the upload) and its response (the sketch);
// each conversion replaces the response wholesale.

use sketchwerk_core::AppConfig;
use sketchwerk_core::error::SketchwerkError;
use sketchwerk_core::human_errors::{HumanError, humanize_error};

use crate::services::app_services::AppServices;
use crate::services::upload::{SketchView, Upload};

/// Feedback line shown under the converter.
#[derive(Debug, Clone)]
pub enum Status {
    /// Neutral progress information.
    Info(String),
    /// An action completed.
    Success(String),
    /// Something failed; rendered with the error's severity colour.
    Problem(HumanError),
}

impl Status {
    pub fn problem(err: &SketchwerkError) -> Self {
        Self::Problem(humanize_error(err))
    }
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Application settings (edited on the Settings page, saved explicitly).
    pub config: AppConfig,
    /// The image currently selected for conversion.
    pub upload: Option<Upload>,
    /// The sketch produced from `upload`, if converted.
    pub sketch: Option<SketchView>,
    /// Status message for user feedback.
    pub status: Option<Status>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            config: svc.config(),
            ..Self::default()
        }
    }

    /// Replace the current upload, discarding any sketch made from the old one.
    pub fn set_upload(&mut self, upload: Upload) {
        self.status = Some(Status::Info(format!(
            "Loaded {} ({} KB)",
            upload.name,
            upload.size_kb()
        )));
        self.upload = Some(upload);
        self.sketch = None;
    }
}
