// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use image::{DynamicImage, Luma};
use sketchwerk_core::ChannelPolicy;
use sketchwerk_core::error::{Result, SketchwerkError};
use tracing::debug;

use super::{GrayMap, WHITE};

/// Luma weights applied to R, G and B.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Build the floating-point Grayscale Map of `image`.
///
/// Colour images use the first three channels weighted by [`LUMA_WEIGHTS`];
/// alpha is dropped and wider sample types are narrowed to 8 bits first.
/// Images without colour channels follow `policy`.
pub fn grayscale_map(image: &DynamicImage, policy: ChannelPolicy) -> Result<GrayMap> {
    let (width, height) = (image.width(), image.height());
    let color = image.color();

    if !color.has_color() {
        return match policy {
            ChannelPolicy::Reject => Err(SketchwerkError::ChannelShape {
                channels: color.channel_count(),
            }),
            ChannelPolicy::TreatAsGray => {
                debug!(?color, "Using luma samples directly as grayscale");
                let luma = image.to_luma8();
                Ok(GrayMap::from_fn(width, height, |x, y| {
                    Luma([f32::from(luma.get_pixel(x, y).0[0])])
                }))
            }
        };
    }

    let rgb = image.to_rgb8();
    let [wr, wg, wb] = LUMA_WEIGHTS;
    Ok(GrayMap::from_fn(width, height, |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([wr * f32::from(r) + wg * f32::from(g) + wb * f32::from(b)])
    }))
}

/// `255 - v` for every sample.
pub fn invert(map: &GrayMap) -> GrayMap {
    let mut out = map.clone();
    for sample in out.iter_mut() {
        *sample = WHITE - *sample;
    }
    out
}
