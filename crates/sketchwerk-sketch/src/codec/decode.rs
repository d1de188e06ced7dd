// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload decoding: sniff the format from magic bytes, then decode with the
// `image` crate. Only JPEG and PNG are accepted.

use image::{DynamicImage, ImageFormat};
use sketchwerk_core::SourceFormat;
use sketchwerk_core::error::{Result, SketchwerkError};
use tracing::{debug, info, instrument};

/// A decoded upload together with the format it was stored in.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of samples per pixel in the decoded buffer.
    pub fn channels(&self) -> u8 {
        self.image.color().channel_count()
    }
}

/// Decode raw encoded bytes (JPEG or PNG).
///
/// Anything whose signature is not JPEG or PNG is refused with
/// `UnsupportedFormat` before the decoder runs, so no partial work happens.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<DecodedImage> {
    let format = SourceFormat::from_magic(data)
        .ok_or_else(|| SketchwerkError::UnsupportedFormat(describe_signature(data)))?;

    let image = image::load_from_memory_with_format(data, image_format(format)).map_err(|err| {
        SketchwerkError::Decode(format!("failed to decode {format} image: {err}"))
    })?;

    info!(
        width = image.width(),
        height = image.height(),
        %format,
        "Image decoded"
    );
    debug!(color = ?image.color(), "Decoded colour layout");
    Ok(DecodedImage { image, format })
}

fn image_format(format: SourceFormat) -> ImageFormat {
    match format {
        SourceFormat::Jpeg => ImageFormat::Jpeg,
        SourceFormat::Png => ImageFormat::Png,
    }
}

/// Short description of an unrecognised input for error messages.
fn describe_signature(data: &[u8]) -> String {
    if data.is_empty() {
        return "empty file".into();
    }
    match image::guess_format(data) {
        Ok(other) => format!("{other:?}"),
        Err(_) => {
            let head: Vec<String> = data.iter().take(4).map(|b| format!("{b:02x}")).collect();
            format!("unrecognised signature {}", head.join(" "))
        }
    }
}
