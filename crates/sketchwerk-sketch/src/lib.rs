// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// sketchwerk-sketch: Photo-to-pencil-sketch processing for Sketchwerk.
//
// Provides decoding of uploaded JPEG/PNG files, the dodge-blend sketch
// transform (grayscale, inversion, Gaussian blur, dodge composite), a
// request/response handler with a content-addressed memo cache, and PNG
// export to a local path.

pub mod cache;
pub mod codec;
pub mod export;
pub mod fingerprint;
pub mod handler;
pub mod transform;

// Re-export the primary entry points so callers can use `sketchwerk_sketch::SketchHandler` etc.
pub use codec::decode::{DecodedImage, decode};
pub use codec::encode::encode_png;
pub use export::export_png;
pub use handler::{SketchHandler, SketchRequest, SketchResponse};
pub use transform::pipeline::{SketchTransform, transform};
pub use transform::{GrayMap, SketchImage};
