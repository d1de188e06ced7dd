// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Sketchwerk.

use thiserror::Error;

/// Top-level error type for all Sketchwerk operations.
#[derive(Debug, Error)]
pub enum SketchwerkError {
    // -- Input errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("image has {channels} channel(s), expected at least 3")]
    ChannelShape { channels: u8 },

    #[error("invalid sketch settings: {0}")]
    InvalidSettings(String),

    #[error("pixel map size mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    // -- Output errors --
    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("failed to write sketch to {path}: {reason}")]
    Export { path: String, reason: String },

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SketchwerkError>;
