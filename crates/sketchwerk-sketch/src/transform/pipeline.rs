// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The four-step sketch pipeline over a decoded image.

use image::DynamicImage;
use sketchwerk_core::SketchSettings;
use sketchwerk_core::error::Result;
use tracing::{debug, info, instrument};

use super::{SketchImage, dodge, gaussian_blur, grayscale_map, invert};

/// A validated, reusable sketch transform.
///
/// Holds nothing but its settings: every call allocates fresh maps and no
/// state carries over between images.
///
/// ```ignore
/// let sketch = SketchTransform::new(SketchSettings::default())?
///     .apply(&decoded.image)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SketchTransform {
    settings: SketchSettings,
}

impl SketchTransform {
    /// Validate `settings` and build a transform.
    pub fn new(settings: SketchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Run grayscale → invert → blur → dodge on `image`.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn apply(&self, image: &DynamicImage) -> Result<SketchImage> {
        let gray = grayscale_map(image, self.settings.channel_policy)?;
        let inverted = invert(&gray);
        let blurred = gaussian_blur(&inverted, &self.settings)?;
        debug!("Blur complete, compositing");
        let sketch = dodge(&gray, &blurred)?;
        info!(
            width = sketch.width(),
            height = sketch.height(),
            sigma = self.settings.sigma,
            "Sketch transform complete"
        );
        Ok(sketch)
    }
}

/// One-shot convenience over [`SketchTransform::apply`].
pub fn transform(image: &DynamicImage, settings: &SketchSettings) -> Result<SketchImage> {
    SketchTransform::new(*settings)?.apply(image)
}
