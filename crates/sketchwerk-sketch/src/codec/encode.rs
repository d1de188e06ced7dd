// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use image::{GrayImage, ImageFormat};
use sketchwerk_core::error::{Result, SketchwerkError};

/// Encode a single-channel sketch as PNG bytes.
pub fn encode_png(sketch: &GrayImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    sketch
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| SketchwerkError::Encode(format!("PNG encoding failed: {err}")))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn png_output_decodes_back_to_same_pixels() {
        let sketch = GrayImage::from_fn(5, 4, |x, y| Luma([(x * 40 + y) as u8]));
        let bytes = encode_png(&sketch).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded, sketch);
    }
}
