// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the sketch transform in the sketchwerk-sketch crate.
// Covers the full pipeline and the Gaussian blur on its own, since the blur
// dominates the cost at the default sigma.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Luma, Rgb, RgbImage};

use sketchwerk_core::SketchSettings;
use sketchwerk_sketch::SketchTransform;
use sketchwerk_sketch::transform::{GrayMap, gaussian_blur};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full grayscale → invert → blur → dodge on a 256x256 synthetic photo.
fn bench_sketch_transform(c: &mut Criterion) {
    let (width, height) = (256u32, 256u32);
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([x as u8, y as u8, ((x + y) / 2) as u8])
    }));
    let transform = SketchTransform::default();

    c.bench_function("sketch_transform (256x256, sigma 13)", |b| {
        b.iter(|| {
            let sketch = transform.apply(black_box(&img)).unwrap();
            black_box(sketch);
        });
    });
}

/// Separable blur alone on a 256x256 float map.
fn bench_gaussian_blur(c: &mut Criterion) {
    let map = GrayMap::from_fn(256, 256, |x, y| Luma([((x * y) % 255) as f32]));
    let settings = SketchSettings::default();

    c.bench_function("gaussian_blur (256x256, sigma 13)", |b| {
        b.iter(|| {
            let blurred = gaussian_blur(black_box(&map), &settings).unwrap();
            black_box(blurred);
        });
    });
}

criterion_group!(benches, bench_sketch_transform, bench_gaussian_blur);
criterion_main!(benches);
