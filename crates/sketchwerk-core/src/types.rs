// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the sketch pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchwerkError};

/// Encoded formats accepted as upload input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Sniff the format from the leading magic bytes of an encoded file.
    pub fn from_magic(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// MIME type for display and data URLs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Extensions offered by the upload dialog.
    pub const UPLOAD_EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}

/// How the Gaussian blur samples pixels beyond the image edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Half-sample symmetric reflection: `d c b a | a b c d | d c b a`.
    #[default]
    Reflect,
    /// Repeat the edge sample: `a a a a | a b c d | d d d d`.
    Nearest,
    /// Tile the image: `a b c d | a b c d | a b c d`.
    Wrap,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 3] = [Self::Reflect, Self::Nearest, Self::Wrap];

    /// Map a (possibly out-of-range) index onto `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn resolve(&self, index: isize, len: usize) -> usize {
        let n = len as isize;
        match self {
            Self::Nearest => index.clamp(0, n - 1) as usize,
            Self::Wrap => index.rem_euclid(n) as usize,
            Self::Reflect => {
                let period = 2 * n;
                let folded = index.rem_euclid(period);
                if folded < n {
                    folded as usize
                } else {
                    (period - 1 - folded) as usize
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reflect => "reflect",
            Self::Nearest => "nearest",
            Self::Wrap => "wrap",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// What to do with inputs that carry fewer than three colour channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Use the single luma sample directly as the grayscale value.
    #[default]
    TreatAsGray,
    /// Refuse the input with a channel-shape error.
    Reject,
}

impl ChannelPolicy {
    pub const ALL: [ChannelPolicy; 2] = [Self::TreatAsGray, Self::Reject];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TreatAsGray => "treat_as_gray",
            Self::Reject => "reject",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Default Gaussian standard deviation in pixels.
pub const DEFAULT_SIGMA: f32 = 13.0;

/// Default kernel truncation, in multiples of sigma.
pub const DEFAULT_TRUNCATE: f32 = 4.0;

/// Largest blur kernel radius, in pixels, that settings may ask for.
pub const MAX_KERNEL_RADIUS: usize = 1024;

/// Parameters of one sketch transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchSettings {
    /// Standard deviation of the blur, in pixels.
    pub sigma: f32,
    /// Kernel half-width as a multiple of `sigma`.
    pub truncate: f32,
    pub boundary: BoundaryMode,
    pub channel_policy: ChannelPolicy,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            truncate: DEFAULT_TRUNCATE,
            boundary: BoundaryMode::default(),
            channel_policy: ChannelPolicy::default(),
        }
    }
}

impl SketchSettings {
    /// Check that the numeric parameters describe a usable kernel.
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(SketchwerkError::InvalidSettings(format!(
                "sigma must be a positive number, got {}",
                self.sigma
            )));
        }
        if !self.truncate.is_finite() || self.truncate <= 0.0 {
            return Err(SketchwerkError::InvalidSettings(format!(
                "truncate must be a positive number, got {}",
                self.truncate
            )));
        }
        let reach = (f64::from(self.truncate) * f64::from(self.sigma) + 0.5).floor();
        if reach > MAX_KERNEL_RADIUS as f64 {
            return Err(SketchwerkError::InvalidSettings(format!(
                "blur reaches {reach} pixels (sigma {} x truncate {}), the limit is {MAX_KERNEL_RADIUS}",
                self.sigma, self.truncate
            )));
        }
        Ok(())
    }

    /// Kernel radius in pixels: `floor(truncate * sigma + 0.5)`.
    ///
    /// Only meaningful for settings that pass [`validate`](Self::validate).
    pub fn kernel_radius(&self) -> usize {
        (f64::from(self.truncate) * f64::from(self.sigma) + 0.5).floor() as usize
    }

    /// Stable string identifying these settings, used as part of cache keys.
    pub fn fingerprint(&self) -> String {
        format!(
            "s{:08x}-t{:08x}-{}-{}",
            self.sigma.to_bits(),
            self.truncate.to_bits(),
            self.boundary.label(),
            self.channel_policy.label()
        )
    }
}
