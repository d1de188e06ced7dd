// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dodge composite: lighten the grayscale base by the blurred inverted layer.

use image::Luma;
use sketchwerk_core::error::{Result, SketchwerkError};

use super::{GrayMap, SketchImage, WHITE};

/// Unclamped dodge value `gray * 255 / (255 - blurred)`.
///
/// Callers must rule out `blurred >= 255` first; see [`dodge_sample`].
pub fn dodge_raw(gray: f32, blurred: f32) -> f32 {
    gray * WHITE / (WHITE - blurred)
}

/// Final 8-bit sample for one pixel.
///
/// A blurred value at (or, through float noise, past) white saturates to 255
/// without dividing. Otherwise the raw value is clamped to 255 and rounded.
pub fn dodge_sample(gray: f32, blurred: f32) -> u8 {
    if blurred >= WHITE {
        return u8::MAX;
    }
    let raw = dodge_raw(gray, blurred);
    if raw > WHITE {
        u8::MAX
    } else {
        raw.max(0.0).round() as u8
    }
}

/// Composite the Grayscale Map with the Blurred Map into the Sketch Image.
pub fn dodge(gray: &GrayMap, blurred: &GrayMap) -> Result<SketchImage> {
    if gray.dimensions() != blurred.dimensions() {
        return Err(SketchwerkError::DimensionMismatch {
            expected: gray.dimensions(),
            actual: blurred.dimensions(),
        });
    }
    let (width, height) = gray.dimensions();
    Ok(SketchImage::from_fn(width, height, |x, y| {
        let g = gray.get_pixel(x, y).0[0];
        let b = blurred.get_pixel(x, y).0[0];
        Luma([dodge_sample(g, b)])
    }))
}
