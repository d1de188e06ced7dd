// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketch transform: grayscale, inversion, Gaussian blur, and dodge composite.
//
// Every stage keeps the source width and height; nothing is resized or cropped.

pub mod blur;
pub mod dodge;
pub mod grayscale;
pub mod pipeline;

use image::{ImageBuffer, Luma};

/// Floating-point single-channel map (grayscale, inverted, or blurred).
pub type GrayMap = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Final 8-bit sketch.
pub type SketchImage = image::GrayImage;

/// Maximum 8-bit sample value as a float.
pub const WHITE: f32 = 255.0;

pub use blur::{gaussian_blur, gaussian_kernel};
pub use dodge::{dodge, dodge_raw, dodge_sample};
pub use grayscale::{grayscale_map, invert};
pub use pipeline::{SketchTransform, transform};
