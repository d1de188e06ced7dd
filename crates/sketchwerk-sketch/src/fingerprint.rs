// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content fingerprints: SHA-256 over upload bytes, used to key the sketch cache.

use sha2::{Digest, Sha256};
use sketchwerk_core::SketchSettings;

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Identity of one conversion: what was uploaded and how it was transformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// SHA-256 of the encoded upload.
    pub input: String,
    /// [`SketchSettings::fingerprint`] of the transform parameters.
    pub settings: String,
}

impl CacheKey {
    pub fn new(input_hash: impl Into<String>, settings: &SketchSettings) -> Self {
        Self {
            input: input_hash.into(),
            settings: settings.fingerprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchwerk_core::BoundaryMode;

    /// SHA-256 of the empty byte slice (well-known constant).
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn hash_empty_input() {
        assert_eq!(hash_bytes(b""), EMPTY_SHA256);
    }

    #[test]
    fn hash_known_value() {
        // SHA-256("hello"): verified against coreutils sha256sum.
        let expected = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        assert_eq!(hash_bytes(b"hello"), expected);
    }

    #[test]
    fn keys_differ_by_settings() {
        let hash = hash_bytes(b"photo");
        let a = CacheKey::new(hash.clone(), &SketchSettings::default());
        let b = CacheKey::new(
            hash,
            &SketchSettings {
                boundary: BoundaryMode::Nearest,
                ..SketchSettings::default()
            },
        );
        assert_eq!(a.input, b.input);
        assert_ne!(a, b);
    }
}
