// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uploaded files and their in-page previews.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_ENGINE};
use sketchwerk_core::SourceFormat;
use sketchwerk_core::error::{Result, SketchwerkError};
use sketchwerk_sketch::SketchResponse;

/// An image file picked by the user, kept as raw encoded bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    /// File name shown in the caption.
    pub name: String,
    pub bytes: Vec<u8>,
    pub format: SourceFormat,
    /// `data:` URL for the `<img>` preview.
    pub data_url: String,
}

impl Upload {
    /// Accept `bytes` as an upload if they look like a JPEG or PNG file.
    ///
    /// The magic bytes decide; the extension only has to be one the file
    /// picker offers.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let extension = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if SourceFormat::from_extension(extension).is_none() {
            return Err(SketchwerkError::UnsupportedFormat(format!(
                "{name} (expected .jpg, .jpeg or .png)"
            )));
        }
        let format = SourceFormat::from_magic(&bytes).ok_or_else(|| {
            SketchwerkError::UnsupportedFormat(format!("{name} is not a JPEG or PNG file"))
        })?;
        let data_url = data_url(format.mime_type(), &bytes);
        Ok(Self {
            name,
            bytes,
            format,
            data_url,
        })
    }

    /// Read and validate an upload from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".into());
        Self::from_bytes(name, bytes)
    }

    pub fn size_kb(&self) -> usize {
        self.bytes.len() / 1024
    }
}

/// A finished sketch plus its preview URL, computed once per conversion.
#[derive(Debug, Clone)]
pub struct SketchView {
    pub response: SketchResponse,
    pub data_url: String,
}

impl SketchView {
    pub fn new(response: SketchResponse) -> Self {
        let data_url = data_url(SourceFormat::Png.mime_type(), &response.png);
        Self { response, data_url }
    }
}

/// Encode bytes as a base64 `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64_ENGINE.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn accepts_png_by_magic_and_extension() {
        let upload = Upload::from_bytes("cat.PNG", PNG_MAGIC.to_vec()).unwrap();
        assert_eq!(upload.format, SourceFormat::Png);
        assert!(upload.data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = Upload::from_bytes("cat.gif", PNG_MAGIC.to_vec()).unwrap_err();
        assert!(matches!(err, SketchwerkError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_mislabelled_file() {
        let err = Upload::from_bytes("cat.jpg", b"GIF89a....".to_vec()).unwrap_err();
        assert!(matches!(err, SketchwerkError::UnsupportedFormat(_)));
    }

    #[test]
    fn jpeg_magic_with_png_name_keeps_real_format() {
        let upload = Upload::from_bytes("photo.png", vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert_eq!(upload.format, SourceFormat::Jpeg);
        assert!(upload.data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn data_url_is_standard_base64() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }
}
