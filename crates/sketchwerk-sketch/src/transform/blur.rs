// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Separable Gaussian blur on floating-point maps.
//
// One horizontal and one vertical pass with the same normalised 1-D kernel.
// Each line is first padded by the kernel radius using the configured
// boundary mode, so kernels wider than the image are still well-defined.

use image::Luma;
use sketchwerk_core::error::{Result, SketchwerkError};
use sketchwerk_core::{BoundaryMode, SketchSettings};
use tracing::{debug, instrument};

use super::GrayMap;

/// Normalised 1-D Gaussian weights for offsets `-radius..=radius`.
pub fn gaussian_kernel(sigma: f32, radius: usize) -> Vec<f64> {
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let r = radius as i64;

    let mut weights: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Blur `map` with the sigma, truncation and boundary mode in `settings`.
#[instrument(skip(map), fields(width = map.width(), height = map.height()))]
pub fn gaussian_blur(map: &GrayMap, settings: &SketchSettings) -> Result<GrayMap> {
    settings.validate()?;

    let (width, height) = map.dimensions();
    if width == 0 || height == 0 {
        return Ok(map.clone());
    }

    let radius = settings.kernel_radius();
    let kernel = gaussian_kernel(settings.sigma, radius);
    debug!(radius, taps = kernel.len(), "Gaussian kernel built");

    let (w, h) = (width as usize, height as usize);
    let padded_len = radius
        .checked_mul(2)
        .and_then(|taps| taps.checked_add(w.max(h)))
        .ok_or_else(|| {
            SketchwerkError::InvalidSettings(format!("kernel radius {radius} is too large"))
        })?;
    let mut scratch = Vec::with_capacity(padded_len);

    // Rows.
    let mut horizontal = vec![0.0f32; w * h];
    for (src, dst) in map.as_raw().chunks_exact(w).zip(horizontal.chunks_exact_mut(w)) {
        convolve_line(src, dst, &kernel, settings.boundary, &mut scratch);
    }

    // Columns.
    let mut out = vec![0.0f32; w * h];
    let mut column = vec![0.0f32; h];
    let mut blurred = vec![0.0f32; h];
    for x in 0..w {
        for (y, sample) in column.iter_mut().enumerate() {
            *sample = horizontal[y * w + x];
        }
        convolve_line(&column, &mut blurred, &kernel, settings.boundary, &mut scratch);
        for (y, sample) in blurred.iter().enumerate() {
            out[y * w + x] = *sample;
        }
    }

    Ok(GrayMap::from_fn(width, height, |x, y| {
        Luma([out[y as usize * w + x as usize]])
    }))
}

/// Convolve one line with `kernel`, reading beyond the ends through `boundary`.
fn convolve_line(
    src: &[f32],
    dst: &mut [f32],
    kernel: &[f64],
    boundary: BoundaryMode,
    padded: &mut Vec<f64>,
) {
    let n = src.len();
    let radius = (kernel.len() / 2) as isize;

    padded.clear();
    padded.extend((-radius..n as isize + radius).map(|i| f64::from(src[boundary.resolve(i, n)])));

    for (x, out) in dst.iter_mut().enumerate() {
        let window = &padded[x..x + kernel.len()];
        let acc: f64 = window.iter().zip(kernel).map(|(v, w)| v * w).sum();
        *out = acc as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_map(width: u32, height: u32, value: f32) -> GrayMap {
        GrayMap::from_pixel(width, height, Luma([value]))
    }

    fn settings(sigma: f32, boundary: BoundaryMode) -> SketchSettings {
        SketchSettings {
            sigma,
            boundary,
            ..SketchSettings::default()
        }
    }

    #[test]
    fn kernel_is_normalised_and_symmetric() {
        let k = gaussian_kernel(13.0, 52);
        assert_eq!(k.len(), 105);
        let sum: f64 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        for i in 0..52 {
            assert!((k[i] - k[104 - i]).abs() < 1e-15);
        }
        assert!(k[52] > k[51]);
    }

    #[test]
    fn uniform_field_stays_uniform_for_every_boundary() {
        for mode in BoundaryMode::ALL {
            let map = uniform_map(4, 4, 127.0128);
            let out = gaussian_blur(&map, &settings(13.0, mode)).unwrap();
            assert_eq!(out.dimensions(), (4, 4));
            let first = out.get_pixel(0, 0).0[0];
            assert!((first - 127.0128).abs() < 1e-3, "{mode:?}: got {first}");
            assert!(out.pixels().all(|p| p.0[0] == first), "{mode:?} not uniform");
        }
    }

    #[test]
    fn blur_preserves_shape_of_non_square_maps() {
        let map = GrayMap::from_fn(7, 3, |x, y| Luma([(x * 10 + y) as f32]));
        let out = gaussian_blur(&map, &settings(1.5, BoundaryMode::Reflect)).unwrap();
        assert_eq!(out.dimensions(), (7, 3));
    }

    #[test]
    fn impulse_spreads_and_keeps_energy() {
        let mut map = uniform_map(21, 21, 0.0);
        map.put_pixel(10, 10, Luma([1000.0]));
        let out = gaussian_blur(&map, &settings(2.0, BoundaryMode::Reflect)).unwrap();

        let centre = out.get_pixel(10, 10).0[0];
        assert!(centre < 1000.0);
        assert!(out.get_pixel(11, 10).0[0] > 0.0);
        assert!((out.get_pixel(9, 10).0[0] - out.get_pixel(11, 10).0[0]).abs() < 1e-3);

        // Kernel reach (8 px) stays inside the 21x21 canvas, so no mass leaks.
        let total: f32 = out.iter().sum();
        assert!((total - 1000.0).abs() < 0.5, "total {total}");
    }

    #[test]
    fn boundary_modes_differ_at_the_edge() {
        let map = GrayMap::from_fn(6, 1, |x, _| Luma([if x == 0 { 255.0 } else { 0.0 }]));
        let reflect = gaussian_blur(&map, &settings(1.0, BoundaryMode::Reflect)).unwrap();
        let wrap = gaussian_blur(&map, &settings(1.0, BoundaryMode::Wrap)).unwrap();
        // Wrap carries the bright left edge over to the right edge; reflect does not.
        assert!(wrap.get_pixel(5, 0).0[0] > reflect.get_pixel(5, 0).0[0]);
    }

    /// `[10, 20, 30, 40, 50]` blurred with sigma 1, truncate 2 (radius 2).
    /// Expected rows match `scipy.ndimage.gaussian_filter1d` for each mode.
    #[test]
    fn border_samples_match_reference_values() {
        let row = GrayMap::from_fn(5, 1, |x, _| Luma([(x as f32 + 1.0) * 10.0]));
        let cases = [
            (BoundaryMode::Reflect, [14.07667, 20.54489, 30.0, 39.45511, 45.92333]),
            (BoundaryMode::Nearest, [13.53179, 20.54489, 30.0, 39.45511, 46.46821]),
            (BoundaryMode::Wrap, [24.93450, 22.72443, 30.0, 37.27557, 35.06550]),
        ];
        for (mode, expected) in cases {
            let settings = SketchSettings {
                sigma: 1.0,
                truncate: 2.0,
                boundary: mode,
                ..SketchSettings::default()
            };
            let out = gaussian_blur(&row, &settings).unwrap();
            for (x, want) in expected.into_iter().enumerate() {
                let got = out.get_pixel(x as u32, 0).0[0];
                assert!((got - want).abs() < 1e-3, "{mode:?} x={x}: got {got}, want {want}");
            }
        }
    }

    #[test]
    fn oversized_kernel_is_rejected_not_allocated() {
        let err = gaussian_blur(&uniform_map(4, 4, 9.0), &settings(1e20, BoundaryMode::Reflect))
            .unwrap_err();
        assert!(matches!(err, SketchwerkError::InvalidSettings(_)));
    }

    #[test]
    fn invalid_sigma_is_rejected() {
        let err = gaussian_blur(&uniform_map(2, 2, 1.0), &settings(-1.0, BoundaryMode::Reflect))
            .unwrap_err();
        assert!(matches!(err, SketchwerkError::InvalidSettings(_)));
    }

    #[test]
    fn empty_map_is_returned_unchanged() {
        let out = gaussian_blur(&uniform_map(0, 0, 0.0), &SketchSettings::default()).unwrap();
        assert_eq!(out.dimensions(), (0, 0));
    }
}
