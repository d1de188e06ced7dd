// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SketchwerkError;
use crate::types::{
    BoundaryMode, ChannelPolicy, DEFAULT_SIGMA, DEFAULT_TRUNCATE, SketchSettings,
};

/// Most finished sketches the memo cache may be configured to hold.
pub const MAX_CACHE_CAPACITY: usize = 64;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gaussian blur standard deviation in pixels.
    pub sigma: f32,
    /// Blur kernel half-width in multiples of `sigma`.
    pub truncate: f32,
    /// Edge handling for the blur.
    pub boundary: BoundaryMode,
    /// What to do with grayscale-only uploads.
    pub channel_policy: ChannelPolicy,
    /// Where "Download Sketch" writes the PNG.
    pub output_path: PathBuf,
    /// Number of converted sketches kept in memory (0 disables the cache).
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            truncate: DEFAULT_TRUNCATE,
            boundary: BoundaryMode::Reflect,
            channel_policy: ChannelPolicy::TreatAsGray,
            output_path: PathBuf::from("sketch.png"),
            cache_capacity: 8,
        }
    }
}

impl AppConfig {
    /// Transform parameters derived from this configuration.
    pub fn sketch_settings(&self) -> SketchSettings {
        SketchSettings {
            sigma: self.sigma,
            truncate: self.truncate,
            boundary: self.boundary,
            channel_policy: self.channel_policy,
        }
    }

    /// Check every field a user can type into the Settings page.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.sketch_settings().validate()?;
        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(SketchwerkError::InvalidSettings(format!(
                "cache holds at most {MAX_CACHE_CAPACITY} sketches, got {}",
                self.cache_capacity
            )));
        }
        Ok(())
    }

    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
