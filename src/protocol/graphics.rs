//! # ZPL II Graphics Commands
//!
//! Shapes and raster graphics.
//!
//! ## Overview
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `^GB` | Graphic box (rectangles, lines) |
//! | `^GE` | Graphic ellipse |
//! | `^GF` | Graphic field: inline raster image |
//! | `~DG` | Download graphic: store a raster image under a name |
//! | `^XG` | Recall a stored graphic, optionally magnified |
//!
//! ## Raster Data
//!
//! Both `^GF` and `~DG` carry the same raster layout (see
//! [`RasterPayload`]):
//!
//! ```text
//! total bytes   = bytes per row × rows
//! bytes per row = ceil(width in dots / 8)
//!
//! each byte: bit 7 = leftmost dot, 1 = black
//! ```
//!
//! With compression `A` the data is sent as two upper-case hex digits per
//! byte. `B` (raw binary) and `C` (compressed binary) are recognised but
//! not implemented.

use crate::error::{EtiquetaError, Result};
use crate::render::raster::RasterPayload;

// ============================================================================
// PARAMETER TYPES
// ============================================================================

code_enum! {
    /// Line color for boxes and ellipses
    #[derive(Default)]
    pub enum LineColor ("color") {
        #[default]
        Black = 'B',
        White = 'W',
    }
}

code_enum! {
    /// Graphic field data encoding. Unknown codes are `Unsupported`, like
    /// the recognised but unimplemented `B` and `C`.
    #[derive(Default)]
    pub enum Compression ("compression type" => Unsupported) {
        /// ASCII hexadecimal
        #[default]
        Ascii = 'A',
        /// Raw binary
        Binary = 'B',
        /// Compressed binary
        Compressed = 'C',
    }
}

impl Compression {
    /// Reject encodings this crate cannot produce.
    pub fn ensure_supported(self) -> Result<()> {
        match self {
            Self::Ascii => Ok(()),
            other => Err(EtiquetaError::Unsupported(format!(
                "unsupported compression type: {}",
                other.code()
            ))),
        }
    }
}

/// Highest corner rounding `^GB` accepts.
pub const MAX_ROUNDING: u8 = 8;

/// Longest graphic name `~DG` accepts (without the `.GRF` extension).
pub const MAX_GRAPHIC_NAME_LEN: usize = 8;

/// Graphic names are 1 to 8 characters long.
pub fn is_valid_graphic_name(name: &str) -> bool {
    (1..=MAX_GRAPHIC_NAME_LEN).contains(&name.chars().count())
}

// ============================================================================
// SHAPES
// ============================================================================

/// # Graphic Box (^GBw,h,t,c,r)
///
/// Draws a box `width` × `height` dots with a border `thickness` dots
/// thick. A thickness equal to the width (or height) gives a solid bar.
/// `rounding` runs 0 (square) to [`MAX_ROUNDING`]; callers check the range.
///
/// ```
/// use etiqueta::protocol::graphics::{self, LineColor};
///
/// assert_eq!(graphics::graphic_box(300, 2, 2, LineColor::Black, 0), "^GB300,2,2,B,0");
/// ```
pub fn graphic_box(width: u32, height: u32, thickness: u32, color: LineColor, rounding: u8) -> String {
    format!(
        "^GB{},{},{},{},{}",
        width,
        height,
        thickness,
        color.code(),
        rounding
    )
}

/// # Graphic Ellipse (^GEw,h,t,c)
pub fn graphic_ellipse(width: u32, height: u32, thickness: u32, color: LineColor) -> String {
    format!("^GE{},{},{},{}", width, height, thickness, color.code())
}

// ============================================================================
// RASTER GRAPHICS
// ============================================================================

/// # Graphic Field (^GFA,b,c,d,data)
///
/// Embeds a raster image at the current field origin.
///
/// ## Parameters
///
/// - `b`: length of the data as sent (hex characters for `A`)
/// - `c`: total bytes of the decoded image
/// - `d`: bytes per row
///
/// ```
/// use etiqueta::protocol::graphics;
/// use etiqueta::render::raster::{MonoBitmap, RasterPayload};
///
/// let payload = RasterPayload::encode(&MonoBitmap::filled(8, 2, false));
/// assert_eq!(graphics::graphic_field(&payload), "^GFA,4,2,1,FFFF");
/// ```
pub fn graphic_field(payload: &RasterPayload) -> String {
    let hex = payload.to_hex();
    format!(
        "^GF{},{},{},{},{}",
        Compression::Ascii.code(),
        hex.len(),
        payload.total_bytes(),
        payload.bytes_per_row(),
        hex
    )
}

/// # Download Graphic (~DGname.GRF,t,w,data)
///
/// Stores a raster image in printer RAM under `name` for later `^XG`
/// recall. Callers check the name with [`is_valid_graphic_name`].
pub fn download_graphic(name: &str, payload: &RasterPayload) -> String {
    format!(
        "~DG{}.GRF,{},{},{}",
        name,
        payload.total_bytes(),
        payload.bytes_per_row(),
        payload.to_hex()
    )
}

/// # Recall Graphic (^XGname,mx,my)
///
/// Prints a graphic stored with `~DG`, magnified by integer factors.
#[inline]
pub fn recall_graphic(name: &str, scale_x: u32, scale_y: u32) -> String {
    format!("^XG{},{},{}", name, scale_x, scale_y)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::raster::MonoBitmap;

    #[test]
    fn test_graphic_box() {
        assert_eq!(graphic_box(100, 50, 1, LineColor::Black, 0), "^GB100,50,1,B,0");
        assert_eq!(graphic_box(10, 10, 3, LineColor::White, 8), "^GB10,10,3,W,8");
    }

    #[test]
    fn test_graphic_ellipse() {
        assert_eq!(graphic_ellipse(200, 100, 2, LineColor::Black), "^GE200,100,2,B");
    }

    #[test]
    fn test_line_color_parsing() {
        assert_eq!("W".parse::<LineColor>().unwrap(), LineColor::White);
        assert!(matches!(
            "R".parse::<LineColor>(),
            Err(EtiquetaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_compression_support() {
        assert!(Compression::Ascii.ensure_supported().is_ok());
        assert!(matches!(
            Compression::Binary.ensure_supported(),
            Err(EtiquetaError::Unsupported(_))
        ));
        assert!(matches!(
            Compression::Compressed.ensure_supported(),
            Err(EtiquetaError::Unsupported(_))
        ));
        for raw in ['Z', 'a', '1'] {
            assert!(matches!(
                Compression::try_from(raw),
                Err(EtiquetaError::Unsupported(_))
            ));
        }
        assert!(matches!(
            "ZZ".parse::<Compression>(),
            Err(EtiquetaError::Unsupported(_))
        ));
        assert_eq!("B".parse::<Compression>().unwrap(), Compression::Binary);
    }

    #[test]
    fn test_graphic_name() {
        assert!(is_valid_graphic_name("L"));
        assert!(is_valid_graphic_name("LOGO1234"));
        assert!(!is_valid_graphic_name(""));
        assert!(!is_valid_graphic_name("LOGO12345"));
    }

    #[test]
    fn test_graphic_field() {
        // 12 dots wide: 2 bytes per row, 3 rows
        let payload = RasterPayload::encode(&MonoBitmap::filled(12, 3, true));
        assert_eq!(graphic_field(&payload), "^GFA,12,6,2,000000000000");
    }

    #[test]
    fn test_download_graphic() {
        let payload = RasterPayload::encode(&MonoBitmap::filled(16, 1, false));
        assert_eq!(download_graphic("LOGO", &payload), "~DGLOGO.GRF,2,2,FFFF");
    }

    #[test]
    fn test_recall_graphic() {
        assert_eq!(recall_graphic("LOGO", 2, 3), "^XGLOGO,2,3");
    }
}
