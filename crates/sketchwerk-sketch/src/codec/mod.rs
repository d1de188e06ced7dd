// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec module: JPEG/PNG upload decoding and PNG encoding of finished sketches.

pub mod decode;
pub mod encode;

pub use decode::{DecodedImage, decode};
pub use encode::encode_png;
