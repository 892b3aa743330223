//! # Monochrome Conversion
//!
//! Label printers print black or nothing. This module reduces 8-bit
//! luminance to one bit per pixel.
//!
//! ## Algorithms
//!
//! | Method | Quality | Use For |
//! |--------|---------|---------|
//! | Threshold | Crisp edges, no gray | Line art, logos, text |
//! | Floyd-Steinberg | Simulated gray | Photos, gradients |
//!
//! ## Floyd-Steinberg
//!
//! Each pixel is snapped to black or white and the rounding error is pushed
//! onto its unvisited neighbours:
//!
//! ```text
//!            X    7/16
//!     3/16  5/16  1/16
//! ```
//!
//! A pixel is bright when its (error-adjusted) luminance is at least 128.
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::render::dither::{self, DitheringAlgorithm};
//!
//! // 4x1 gradient, dark to bright
//! let luma = [0u8, 100, 160, 255];
//! let mono = dither::dither(4, 1, &luma, DitheringAlgorithm::Threshold(128));
//! assert_eq!(mono.get(0, 0), Some(false));
//! assert_eq!(mono.get(3, 0), Some(true));
//! ```

use std::str::FromStr;

use super::raster::MonoBitmap;
use crate::error::EtiquetaError;

/// Threshold level used by Floyd-Steinberg and the default fixed threshold.
pub const MID_GRAY: u8 = 128;

/// 1-bit conversion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitheringAlgorithm {
    /// Bright when luminance >= level
    Threshold(u8),
    /// Error diffusion
    #[default]
    FloydSteinberg,
}

impl FromStr for DitheringAlgorithm {
    type Err = EtiquetaError;

    /// `"floyd-steinberg"`, `"fs"`, `"threshold"` or a bare threshold level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(Self::FloydSteinberg),
            "threshold" => Ok(Self::Threshold(MID_GRAY)),
            other => other.parse::<u8>().map(Self::Threshold).map_err(|_| {
                EtiquetaError::invalid(format!("unknown dithering algorithm: {}", s))
            }),
        }
    }
}

/// Reduce row-major 8-bit luminance to a [`MonoBitmap`].
///
/// `luma` must hold `width * height` samples; missing samples count as
/// white.
pub fn dither(width: u32, height: u32, luma: &[u8], algorithm: DitheringAlgorithm) -> MonoBitmap {
    let sample = |x: u32, y: u32| -> u8 {
        luma.get(y as usize * width as usize + x as usize)
            .copied()
            .unwrap_or(u8::MAX)
    };

    match algorithm {
        DitheringAlgorithm::Threshold(level) => {
            MonoBitmap::from_fn(width, height, |x, y| sample(x, y) >= level)
        }
        DitheringAlgorithm::FloydSteinberg => {
            let w = width as usize;
            let h = height as usize;
            let mut levels: Vec<i16> = Vec::with_capacity(w * h);
            for y in 0..height {
                for x in 0..width {
                    levels.push(sample(x, y) as i16);
                }
            }
            let mut bright = vec![false; w * h];

            for y in 0..h {
                for x in 0..w {
                    let idx = y * w + x;
                    let old = levels[idx].clamp(0, 255);
                    let on = old >= MID_GRAY as i16;
                    bright[idx] = on;
                    let err = old - if on { 255 } else { 0 };

                    if x + 1 < w {
                        levels[idx + 1] += err * 7 / 16;
                    }
                    if y + 1 < h {
                        if x > 0 {
                            levels[idx + w - 1] += err * 3 / 16;
                        }
                        levels[idx + w] += err * 5 / 16;
                        if x + 1 < w {
                            levels[idx + w + 1] += err / 16;
                        }
                    }
                }
            }

            MonoBitmap::from_fn(width, height, |x, y| bright[y as usize * w + x as usize])
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
