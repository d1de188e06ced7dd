// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request handler: accept one encoded image, return one finished sketch.
//
// The UI builds a `SketchRequest` per "Convert" action and keeps only the
// returned `SketchResponse`; nothing else survives between requests apart
// from the memo cache, which never changes what a request returns.

use image::GrayImage;
use sketchwerk_core::error::Result;
use sketchwerk_core::{SketchSettings, SourceFormat};
use tracing::{debug, info, instrument};

use crate::cache::SketchCache;
use crate::codec::{decode, encode_png};
use crate::fingerprint::{CacheKey, hash_bytes};
use crate::transform::SketchTransform;

/// One conversion request: the raw upload plus transform settings.
#[derive(Debug, Clone, Copy)]
pub struct SketchRequest<'a> {
    /// Encoded JPEG or PNG bytes exactly as uploaded.
    pub data: &'a [u8],
    pub settings: SketchSettings,
}

impl<'a> SketchRequest<'a> {
    pub fn new(data: &'a [u8], settings: SketchSettings) -> Self {
        Self { data, settings }
    }
}

/// The finished sketch plus what the UI needs to show and save it.
#[derive(Debug, Clone)]
pub struct SketchResponse {
    pub width: u32,
    pub height: u32,
    /// Format the upload was decoded from.
    pub source_format: SourceFormat,
    /// SHA-256 of the uploaded bytes.
    pub fingerprint: String,
    pub sketch: GrayImage,
    /// `sketch` encoded as PNG, ready for display or download.
    pub png: Vec<u8>,
    /// Whether this response was served from the memo cache.
    pub from_cache: bool,
}

/// Stateless-in-effect request handler with an optional memo cache.
#[derive(Debug)]
pub struct SketchHandler {
    cache: SketchCache,
}

impl SketchHandler {
    /// Create a handler caching up to `cache_capacity` results (0 disables).
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: SketchCache::new(cache_capacity),
        }
    }

    pub fn cache(&self) -> &SketchCache {
        &self.cache
    }

    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.cache.resize(capacity);
    }

    /// Decode, transform, and PNG-encode one upload.
    ///
    /// Settings are validated before anything is decoded, and decoding fails
    /// before any transform work starts.
    #[instrument(skip_all, fields(data_len = request.data.len(), sigma = request.settings.sigma))]
    pub fn handle(&mut self, request: &SketchRequest<'_>) -> Result<SketchResponse> {
        request.settings.validate()?;

        let fingerprint = hash_bytes(request.data);
        let key = CacheKey::new(fingerprint.clone(), &request.settings);
        if let Some(hit) = self.cache.get(&key) {
            debug!(fingerprint = %fingerprint, "Serving sketch from cache");
            let mut response = hit.clone();
            response.from_cache = true;
            return Ok(response);
        }

        let response = convert(request.data, &request.settings, fingerprint)?;
        self.cache.insert(key, response.clone());
        Ok(response)
    }
}

impl Default for SketchHandler {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Uncached conversion of one upload.
fn convert(data: &[u8], settings: &SketchSettings, fingerprint: String) -> Result<SketchResponse> {
    let decoded = decode(data)?;
    let sketch = SketchTransform::new(*settings)?.apply(&decoded.image)?;
    let png = encode_png(&sketch)?;

    info!(
        fingerprint = %fingerprint,
        width = sketch.width(),
        height = sketch.height(),
        channels = decoded.channels(),
        png_len = png.len(),
        "Sketch request handled"
    );

    Ok(SketchResponse {
        width: sketch.width(),
        height: sketch.height(),
        source_format: decoded.format,
        fingerprint,
        sketch,
        png,
        from_cache: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use sketchwerk_core::SketchwerkError;

    fn photo_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 9) as u8, (y * 5) as u8, 120])
        }));
        let mut buffer = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn handles_png_upload() {
        let data = photo_png(20, 10);
        let mut handler = SketchHandler::default();
        let response = handler
            .handle(&SketchRequest::new(&data, SketchSettings::default()))
            .unwrap();

        assert_eq!((response.width, response.height), (20, 10));
        assert_eq!(response.source_format, SourceFormat::Png);
        assert_eq!(response.fingerprint, hash_bytes(&data));
        assert!(!response.from_cache);

        let shown = image::load_from_memory(&response.png).unwrap().to_luma8();
        assert_eq!(shown, response.sketch);
    }

    #[test]
    fn identical_bytes_give_identical_png() {
        let data = photo_png(16, 16);
        let request = SketchRequest::new(&data, SketchSettings::default());
        let a = SketchHandler::default().handle(&request).unwrap();
        let b = SketchHandler::default().handle(&request).unwrap();
        assert_eq!(a.png, b.png);
    }

    #[test]
    fn repeated_request_is_served_from_cache() {
        let data = photo_png(8, 8);
        let request = SketchRequest::new(&data, SketchSettings::default());
        let mut handler = SketchHandler::new(4);

        let first = handler.handle(&request).unwrap();
        let second = handler.handle(&request).unwrap();
        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.png, second.png);
        assert_eq!(handler.cache().len(), 1);
    }

    #[test]
    fn changed_settings_miss_the_cache() {
        let data = photo_png(8, 8);
        let mut handler = SketchHandler::new(4);
        handler
            .handle(&SketchRequest::new(&data, SketchSettings::default()))
            .unwrap();
        let other = SketchSettings {
            sigma: 3.0,
            ..SketchSettings::default()
        };
        let response = handler.handle(&SketchRequest::new(&data, other)).unwrap();
        assert!(!response.from_cache);
        assert_eq!(handler.cache().len(), 2);
    }

    #[test]
    fn oversized_cache_capacity_does_not_preallocate() {
        let data = photo_png(4, 4);
        let mut handler = SketchHandler::new(usize::MAX / 64);
        let response = handler
            .handle(&SketchRequest::new(&data, SketchSettings::default()))
            .unwrap();
        assert!(!response.from_cache);
        assert_eq!(handler.cache().len(), 1);
    }

    #[test]
    fn corrupt_upload_is_rejected_and_not_cached() {
        let mut handler = SketchHandler::new(4);
        let err = handler
            .handle(&SketchRequest::new(b"\x89PNG\r\n\x1a\nbroken", SketchSettings::default()))
            .unwrap_err();
        assert!(matches!(err, SketchwerkError::Decode(_)));
        assert!(handler.cache().is_empty());
    }

    #[test]
    fn invalid_settings_are_rejected_before_decoding() {
        let settings = SketchSettings {
            sigma: f32::INFINITY,
            ..SketchSettings::default()
        };
        let err = SketchHandler::default()
            .handle(&SketchRequest::new(b"garbage", settings))
            .unwrap_err();
        assert!(matches!(err, SketchwerkError::InvalidSettings(_)));
    }
}
