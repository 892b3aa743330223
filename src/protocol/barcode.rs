//! # ZPL II Barcode Commands
//!
//! Linear barcode commands for Zebra printers.
//!
//! ## Supported Barcode Types
//!
//! | Code | Command | Symbology |
//! |------|---------|-----------|
//! | `2` | `^B2` | Interleaved 2 of 5 |
//! | `3` | `^B3` | Code 39 |
//! | `U` | `^BU` | UPC-A |
//!
//! ## Parameter Order
//!
//! The three commands do **not** share a parameter layout. Code 39 puts the
//! check digit flag before the height; the other two put it last:
//!
//! ```text
//! ^B2 o,h,f,g,e    orientation, height, line, line above, check digit
//! ^B3 o,e,h,f,g    orientation, check digit, height, line, line above
//! ^BU o,h,f,g,e    orientation, height, line, line above, check digit
//! ```
//!
//! Printers read the fields positionally, so this order must be kept
//! exactly.
//!
//! ## Usage
//!
//! A barcode is a field like any other: it needs an origin, the data as
//! `^FD`, and a closing `^FS`.
//!
//! ```
//! use etiqueta::protocol::barcode::{self, BarcodeOptions, BarcodeType};
//!
//! let cmd = barcode::barcode(BarcodeType::Code39, 50, &BarcodeOptions::default());
//! assert_eq!(cmd, "^B3N,N,50,Y,N");
//! ```

use super::text::Orientation;
use super::yes_no;

code_enum! {
    /// Barcode symbology
    pub enum BarcodeType ("barcode type") {
        Interleaved2Of5 = '2',
        Code39 = '3',
        UpcA = 'U',
    }
}

/// Options shared by all supported symbologies.
///
/// Defaults match the printer's: normal orientation, no check digit,
/// interpretation line printed below the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    /// Field orientation
    pub orientation: Orientation,
    /// Calculate and print a check digit (`e` parameter)
    pub check_digit: bool,
    /// Print the human readable interpretation line (`f` parameter)
    pub interpretation_line: bool,
    /// Print the interpretation line above instead of below (`g` parameter)
    pub interpretation_line_above: bool,
    /// Narrow bar width in dots, emitted as a `^BY` prefix when set
    pub thin_bar_width: Option<u32>,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            check_digit: false,
            interpretation_line: true,
            interpretation_line_above: false,
            thin_bar_width: None,
        }
    }
}

impl BarcodeOptions {
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn check_digit(mut self, on: bool) -> Self {
        self.check_digit = on;
        self
    }

    pub fn interpretation_line(mut self, on: bool) -> Self {
        self.interpretation_line = on;
        self
    }

    pub fn interpretation_line_above(mut self, on: bool) -> Self {
        self.interpretation_line_above = on;
        self
    }

    pub fn thin_bar_width(mut self, dots: u32) -> Self {
        self.thin_bar_width = Some(dots);
        self
    }
}

/// # Bar Code Field Default (^BYw)
///
/// Sets the narrow bar (module) width in dots for following barcodes.
#[inline]
pub fn bar_width(dots: u32) -> String {
    format!("^BY{}", dots)
}

/// # Barcode (^B2 / ^B3 / ^BU)
///
/// Builds the symbology command with its per-type parameter order.
/// Height is in dots. The `^BY` prefix is not included; see
/// [`barcode_with_width`].
pub fn barcode(barcode_type: BarcodeType, height: u32, options: &BarcodeOptions) -> String {
    let o = options.orientation.code();
    let e = yes_no(options.check_digit);
    let f = yes_no(options.interpretation_line);
    let g = yes_no(options.interpretation_line_above);
    let b = barcode_type.code();

    match barcode_type {
        BarcodeType::Interleaved2Of5 | BarcodeType::UpcA => {
            format!("^B{b}{o},{height},{f},{g},{e}")
        }
        BarcodeType::Code39 => format!("^B{b}{o},{e},{height},{f},{g}"),
    }
}

/// Barcode command preceded by `^BY` when a thin bar width is set.
pub fn barcode_with_width(
    barcode_type: BarcodeType,
    height: u32,
    options: &BarcodeOptions,
) -> String {
    let cmd = barcode(barcode_type, height, options);
    match options.thin_bar_width {
        Some(w) => bar_width(w) + &cmd,
        None => cmd,
    }
}

// ============================================================================
// TESTS
// ============================================================================
