//! # Raster Encoding
//!
//! Turns a monochrome bitmap into the data block carried by `^GF` and `~DG`.
//!
//! ## Polarity
//!
//! [`MonoBitmap`] stores luminance: a set bit is a **bright** pixel, the
//! same convention as 1-bit image formats. ZPL wants the opposite, a set bit
//! prints a black dot, so the encoder inverts:
//!
//! ```text
//! source pixel   bitmap bit   ZPL bit
//! white          1            0
//! black          0            1
//! ```
//!
//! ## Sizing
//!
//! ```text
//! bytes_per_row = ceil(width_dots / 8)
//! total_bytes   = bytes_per_row × height_dots
//!
//! 96 × 50 dots  →  12 bytes per row, 600 bytes
//! 100 × 10 dots →  13 bytes per row, 130 bytes (4 padding bits per row)
//! ```
//!
//! Padding bits past the right edge repeat the row's last pixel, so a
//! solid black image encodes to solid `FF` and a blank one to solid `00`.

/// Anything that can be reduced to a [`MonoBitmap`] of exact dimensions.
///
/// This is the narrow seam between label building and image processing:
/// the label only asks for a native size (to keep the aspect ratio) and a
/// packed 1-bit rendition at the device size.
pub trait Bitmap {
    /// Native size in pixels, `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Resize to exactly `width` × `height` pixels and reduce to one bit per
    /// pixel.
    fn to_mono(&self, width: u32, height: u32) -> MonoBitmap;
}

impl<T: Bitmap + ?Sized> Bitmap for &T {
    fn dimensions(&self) -> (u32, u32) {
        (*self).dimensions()
    }

    fn to_mono(&self, width: u32, height: u32) -> MonoBitmap {
        (*self).to_mono(width, height)
    }
}

// ============================================================================
// MONOCHROME BITMAP
// ============================================================================

/// Packed 1-bit bitmap, row-major, MSB = leftmost pixel, set bit = bright.
///
/// Rows are padded to a whole byte.
#[derive(Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MonoBitmap {
    /// Build a bitmap from a per-pixel brightness function.
    pub fn from_fn(width: u32, height: u32, bright: impl Fn(u32, u32) -> bool) -> Self {
        let stride = width.div_ceil(8) as usize;
        let mut data = vec![0u8; stride * height as usize];
        for y in 0..height {
            let row = &mut data[y as usize * stride..(y as usize + 1) * stride];
            for x in 0..width {
                if bright(x, y) {
                    row[x as usize / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// A bitmap where every pixel is bright (`true`) or dark (`false`).
    pub fn filled(width: u32, height: u32, bright: bool) -> Self {
        Self::from_fn(width, height, |_, _| bright)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Packed rows, `bytes_per_row() * height()` bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Brightness of one pixel, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let b = self.data[y as usize * self.bytes_per_row() + x as usize / 8];
        Some(b & (0x80 >> (x % 8)) != 0)
    }

    /// Luminance inversion: bright pixels become dark and vice versa.
    pub fn invert(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            !self.get(x, y).unwrap_or(false)
        })
    }

    /// Nearest-neighbour resize to exactly `width` × `height`.
    pub fn resize(&self, width: u32, height: u32) -> Self {
        if width == self.width && height == self.height {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 {
            return Self::filled(width, height, true);
        }
        Self::from_fn(width, height, |x, y| {
            let sx = (x as u64 * self.width as u64 / width as u64) as u32;
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            self.get(sx, sy).unwrap_or(true)
        })
    }
}

impl Bitmap for MonoBitmap {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn to_mono(&self, width: u32, height: u32) -> MonoBitmap {
        self.resize(width, height)
    }
}

impl std::fmt::Debug for MonoBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonoBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// ============================================================================
// RASTER PAYLOAD
// ============================================================================

/// Device-ready raster data plus the two size fields ZPL needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterPayload {
    width_dots: u32,
    height_dots: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl RasterPayload {
    /// Encode a bitmap that is already at device size.
    ///
    /// ```
    /// use etiqueta::render::raster::{MonoBitmap, RasterPayload};
    ///
    /// let payload = RasterPayload::encode(&MonoBitmap::filled(96, 50, true));
    /// assert_eq!(payload.bytes_per_row(), 12);
    /// assert_eq!(payload.total_bytes(), 600);
    /// ```
    pub fn encode(bitmap: &MonoBitmap) -> Self {
        let width = bitmap.width();
        let height = bitmap.height();
        let bytes_per_row = bitmap.bytes_per_row();

        // ZPL sets a bit for ink, so flip luminance before packing.
        let ink = bitmap.invert();
        let data = if width % 8 == 0 {
            ink.data
        } else {
            let mut data = Vec::with_capacity(bytes_per_row * height as usize);
            for y in 0..height {
                for byte in 0..bytes_per_row as u32 {
                    let mut out = 0u8;
                    for bit in 0..8 {
                        let x = (byte * 8 + bit).min(width - 1);
                        if ink.get(x, y).unwrap_or(false) {
                            out |= 0x80 >> bit;
                        }
                    }
                    data.push(out);
                }
            }
            data
        };

        log::debug!(
            "encoded {}x{} raster: {} bytes per row, {} bytes",
            width,
            height,
            bytes_per_row,
            data.len()
        );

        Self {
            width_dots: width,
            height_dots: height,
            bytes_per_row,
            data,
        }
    }

    /// Resize `source` to `width_dots` × `height_dots` and encode it.
    pub fn from_bitmap(source: &impl Bitmap, width_dots: u32, height_dots: u32) -> Self {
        Self::encode(&source.to_mono(width_dots, height_dots))
    }

    #[inline]
    pub fn width_dots(&self) -> u32 {
        self.width_dots
    }

    #[inline]
    pub fn height_dots(&self) -> u32 {
        self.height_dots
    }

    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// `bytes_per_row × height_dots`
    #[inline]
    pub fn total_bytes(&self) -> usize {
        self.bytes_per_row * self.height_dots as usize
    }

    /// Encoded bytes, set bit = black dot.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Upper-case hex, two digits per byte.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.data)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing() {
        let payload = RasterPayload::encode(&MonoBitmap::filled(96, 50, true));
        assert_eq!(payload.width_dots(), 96);
        assert_eq!(payload.height_dots(), 50);
        assert_eq!(payload.bytes_per_row(), 12);
        assert_eq!(payload.total_bytes(), 600);
        assert_eq!(payload.data().len(), 600);
    }

    #[test]
    fn test_sizing_rounds_up_partial_bytes() {
        let payload = RasterPayload::encode(&MonoBitmap::filled(100, 10, true));
        assert_eq!(payload.bytes_per_row(), 13);
        assert_eq!(payload.total_bytes(), 130);
    }

    #[test]
    fn test_all_white_is_zero() {
        for width in [8, 13, 1] {
            let payload = RasterPayload::encode(&MonoBitmap::filled(width, 4, true));
            assert!(payload.data().iter().all(|&b| b == 0x00), "width {width}");
            assert!(payload.to_hex().chars().all(|c| c == '0'));
        }
    }

    #[test]
    fn test_all_black_is_ff_including_padding() {
        for width in [8, 13, 1] {
            let payload = RasterPayload::encode(&MonoBitmap::filled(width, 4, false));
            assert!(payload.data().iter().all(|&b| b == 0xFF), "width {width}");
        }
    }

    #[test]
    fn test_msb_is_leftmost() {
        // Dark left half, bright right half
        let bitmap = MonoBitmap::from_fn(8, 1, |x, _| x >= 4);
        assert_eq!(RasterPayload::encode(&bitmap).data(), &[0xF0]);
    }

    #[test]
    fn test_padding_repeats_last_pixel() {
        // 10 wide: last pixel bright → padding clear
        let bitmap = MonoBitmap::from_fn(10, 1, |x, _| x == 9);
        assert_eq!(RasterPayload::encode(&bitmap).data(), &[0xFF, 0b1000_0000]);

        // last pixel dark → padding set
        let bitmap = MonoBitmap::from_fn(10, 1, |x, _| x == 0);
        assert_eq!(RasterPayload::encode(&bitmap).data(), &[0x7F, 0xFF]);
    }

    #[test]
    fn test_rows_are_independent() {
        let bitmap = MonoBitmap::from_fn(4, 2, |_, y| y == 0);
        assert_eq!(RasterPayload::encode(&bitmap).to_hex(), "00FF");
    }

    #[test]
    fn test_hex_is_upper_case() {
        let bitmap = MonoBitmap::from_fn(16, 1, |x, _| x % 2 == 1 || x >= 12);
        // 0101.. inverted → 1010 1010 1010 0000
        assert_eq!(RasterPayload::encode(&bitmap).to_hex(), "AAA0");
    }

    #[test]
    fn test_empty_bitmap() {
        let payload = RasterPayload::encode(&MonoBitmap::filled(0, 0, true));
        assert_eq!(payload.total_bytes(), 0);
        assert_eq!(payload.to_hex(), "");
    }

    #[test]
    fn test_mono_get_and_invert() {
        let bitmap = MonoBitmap::from_fn(8, 1, |x, _| x == 0 || x == 7);
        assert_eq!(bitmap.as_bytes(), &[0b1000_0001]);
        assert_eq!(bitmap.get(0, 0), Some(true));
        assert_eq!(bitmap.get(1, 0), Some(false));
        assert_eq!(bitmap.get(8, 0), None);
        assert_eq!(bitmap.invert().as_bytes(), &[0b0111_1110]);
    }

    #[test]
    fn test_invert_leaves_padding_clear() {
        let bitmap = MonoBitmap::filled(3, 2, false).invert();
        assert_eq!(bitmap.as_bytes(), &[0b1110_0000, 0b1110_0000]);
    }

    #[test]
    fn test_mono_resize_nearest() {
        let bitmap = MonoBitmap::from_fn(2, 1, |x, _| x == 1);
        let wide = bitmap.resize(4, 2);
        assert_eq!(wide.get(0, 1), Some(false));
        assert_eq!(wide.get(1, 0), Some(false));
        assert_eq!(wide.get(2, 0), Some(true));
        assert_eq!(wide.get(3, 1), Some(true));
    }

    #[test]
    fn test_from_bitmap_resizes() {
        let payload = RasterPayload::from_bitmap(&MonoBitmap::filled(3, 3, false), 24, 2);
        assert_eq!(payload.bytes_per_row(), 3);
        assert_eq!(payload.to_hex(), "FFFFFFFFFFFF");
    }
}
