//! # Rendering Module
//!
//! Everything between a picture and the hex block inside a `^GF` command.
//!
//! ## Modules
//!
//! - [`raster`]: the [`Bitmap`](raster::Bitmap) seam, packed 1-bit bitmaps
//!   and the ZPL raster encoder
//! - [`dither`]: luminance to 1-bit conversion (threshold, Floyd-Steinberg)
//! - [`image`]: `image` crate backed bitmaps (files, in-memory PNGs)
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::render::raster::{MonoBitmap, RasterPayload};
//!
//! // 16x2 bitmap, left byte dark, right byte bright
//! let bitmap = MonoBitmap::from_fn(16, 2, |x, _| x >= 8);
//! let payload = RasterPayload::encode(&bitmap);
//!
//! assert_eq!(payload.bytes_per_row(), 2);
//! assert_eq!(payload.to_hex(), "FF00FF00");
//! ```

pub mod dither;
pub mod image;
pub mod raster;
