//! # ZPL II Format Commands
//!
//! This module implements the structural commands of the ZPL II language used
//! by Zebra label printers: label framing, field positioning, field data and
//! stored formats.
//!
//! ## Command Structure
//!
//! ZPL commands are plain ASCII. Each starts with a prefix character followed
//! by a two-letter mnemonic and comma-separated parameters:
//!
//! - Format commands: `^` prefix (`^XA`, `^FO120,60`)
//! - Control commands: `~` prefix (`~DG`), executed as soon as received
//!
//! Every builder here returns one self-contained fragment as a `String`.
//! Parameters are expected to be in printer dots already.
//!
//! ## Label Skeleton
//!
//! ```text
//! ^XA                 start of label
//! ^FO120,60           field origin (x, y in dots)
//! ^FDHello            field data
//! ^FS                 field separator (closes the field)
//! ^XZ                 end of label
//! ```
//!
//! ## Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

// ============================================================================
// LABEL FRAMING
// ============================================================================

/// Start of label format (`^XA`)
pub const START_FORMAT: &str = "^XA";

/// End of label format (`^XZ`)
pub const END_FORMAT: &str = "^XZ";

/// Field separator (`^FS`)
pub const FIELD_SEPARATOR: &str = "^FS";

/// # Start Format (^XA)
///
/// Opens a label format. Everything until the matching `^XZ` belongs to one
/// label.
///
/// ```
/// use etiqueta::protocol::commands;
///
/// assert_eq!(commands::start_format(), "^XA");
/// ```
#[inline]
pub fn start_format() -> String {
    START_FORMAT.to_string()
}

/// # End Format (^XZ)
///
/// Closes the label format and sends it to print.
#[inline]
pub fn end_format() -> String {
    END_FORMAT.to_string()
}

/// # Print Orientation Inverted (^POI)
///
/// Rotates the whole label 180 degrees. Useful when the printer feeds
/// labels "upside down" relative to the artwork.
#[inline]
pub fn print_orientation_inverted() -> String {
    "^POI".to_string()
}

// ============================================================================
// FIELDS
// ============================================================================

/// # Field Origin (^FOx,y)
///
/// Sets the upper-left corner of the next field, in dots, relative to the
/// label home position.
///
/// ```
/// use etiqueta::protocol::commands;
///
/// assert_eq!(commands::field_origin(120, 60), "^FO120,60");
/// ```
#[inline]
pub fn field_origin(x: u32, y: u32) -> String {
    format!("^FO{},{}", x, y)
}

/// # Field Separator (^FS)
///
/// Closes the field opened by `^FO`.
#[inline]
pub fn field_separator() -> String {
    FIELD_SEPARATOR.to_string()
}

/// # Field Data (^FD)
///
/// Carries the literal field content. The text is emitted as-is: a `^` or
/// `~` inside it is interpreted by the printer as a new command.
#[inline]
pub fn field_data(text: &str) -> String {
    format!("^FD{}", text)
}

/// # Field Number (^FNn)
///
/// Marks a variable field inside a stored format. The optional name is
/// appended quoted, e.g. `^FN1"serial"`. Callers must check the name with
/// [`is_valid_field_name`] first.
pub fn field_number(number: u32, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("^FN{}\"{}\"", number, name),
        None => format!("^FN{}", number),
    }
}

/// Field names may only contain ASCII letters, digits and spaces, and must
/// not be empty.
pub fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

// ============================================================================
// STORED FORMATS
// ============================================================================

/// # Download Format (^DFname^FS)
///
/// Saves the label being defined as a reusable format under `name`.
/// The printer expects this right after `^XA`.
#[inline]
pub fn download_format(name: &str) -> String {
    format!("^DF{}{}", name, FIELD_SEPARATOR)
}

/// # Recall Format (^XFname^FS)
///
/// Recalls a format previously stored with `^DF`.
#[inline]
pub fn recall_format(name: &str) -> String {
    format!("^XF{}{}", name, FIELD_SEPARATOR)
}

// ============================================================================
// TESTS
// ============================================================================
