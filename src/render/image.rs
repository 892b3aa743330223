//! # Image Sources
//!
//! [`Bitmap`] implementation backed by the `image` crate: load, resize,
//! grayscale, dither.

use std::path::Path;

use image::{DynamicImage, imageops::FilterType};

use super::dither::{self, DitheringAlgorithm};
use super::raster::{Bitmap, MonoBitmap};
use crate::error::{EtiquetaError, Result};

/// A decoded image plus the 1-bit conversion to apply when it is placed on
/// a label.
///
/// ```
/// use etiqueta::render::image::ImageBitmap;
/// use etiqueta::render::raster::Bitmap;
/// use image::{DynamicImage, GrayImage, Luma};
///
/// let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 100, Luma([0])));
/// let bitmap = ImageBitmap::new(img);
/// assert_eq!(bitmap.dimensions(), (200, 100));
/// ```
#[derive(Debug, Clone)]
pub struct ImageBitmap {
    image: DynamicImage,
    dithering: DitheringAlgorithm,
}

impl ImageBitmap {
    /// Wrap an image, converting with Floyd-Steinberg by default.
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            dithering: DitheringAlgorithm::default(),
        }
    }

    /// Open and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            EtiquetaError::Image(format!("Failed to open {}: {}", path.display(), e))
        })?;
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::new(image))
    }

    /// Decode an image held in memory (PNG, BMP, ...).
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| EtiquetaError::Image(format!("Failed to decode image: {}", e)))?;
        Ok(Self::new(image))
    }

    /// Choose the 1-bit conversion.
    pub fn dithering(mut self, algorithm: DitheringAlgorithm) -> Self {
        self.dithering = algorithm;
        self
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for ImageBitmap {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

impl Bitmap for ImageBitmap {
    fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    fn to_mono(&self, width: u32, height: u32) -> MonoBitmap {
        if width == 0 || height == 0 {
            return MonoBitmap::filled(width, height, true);
        }
        let gray = self
            .image
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_luma8();
        dither::dither(width, height, gray.as_raw(), self.dithering)
    }
}

impl Bitmap for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn to_mono(&self, width: u32, height: u32) -> MonoBitmap {
        ImageBitmap::new(self.clone()).to_mono(width, height)
    }
}

// ============================================================================
// TESTS
// ============================================================================
