//! Image preprocessing for OCR.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// Image preprocessor for the recognition pipeline.
pub struct ImagePreprocessor {
    /// Maximum image dimension (longer side).
    max_dimension: u32,
    /// Contrast adjustment applied after grayscale conversion.
    contrast: f32,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            max_dimension: 2000,
            contrast: 30.0,
        }
    }

    /// Set the maximum image dimension.
    pub fn with_max_dimension(mut self, size: u32) -> Self {
        self.max_dimension = size;
        self
    }

    /// Downscale oversized images, keeping the aspect ratio.
    pub fn downscale(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        if width <= self.max_dimension && height <= self.max_dimension {
            return image.clone();
        }

        debug!(
            "resizing {}x{} to fit within {}px",
            width, height, self.max_dimension
        );
        image.resize(
            self.max_dimension,
            self.max_dimension,
            image::imageops::FilterType::Lanczos3,
        )
    }

    /// Full preprocessing pass: downscale, grayscale, contrast boost and a
    /// 3x3 sharpen, to give tesseract cleaner glyph edges.
    pub fn prepare(&self, image: &DynamicImage) -> DynamicImage {
        let image = self.downscale(image);
        let gray = image.grayscale();
        let contrasted = gray.adjust_contrast(self.contrast);

        contrasted.filter3x3(&[0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0])
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
