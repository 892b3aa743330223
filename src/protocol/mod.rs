//! # ZPL II Protocol Implementation
//!
//! This module provides low-level command builders for the ZPL II language
//! used by Zebra label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Label framing, field origin/data, stored formats
//! - [`text`]: Fonts, field blocks, justification, orientation
//! - [`barcode`]: Interleaved 2 of 5, Code 39 and UPC-A barcodes
//! - [`graphics`]: Boxes, ellipses, inline and stored raster graphics
//!
//! Builders take dots, not millimeters. Unit conversion and argument
//! validation live in [`Label`](crate::label::Label).
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::protocol::{commands, text};
//!
//! let mut zpl = String::new();
//! zpl.push_str(&commands::start_format());
//! zpl.push_str(&commands::field_origin(120, 60));
//! zpl.push_str(&commands::field_data("Hello"));
//! zpl.push_str(&commands::field_separator());
//! zpl.push_str(&commands::end_format());
//!
//! assert_eq!(zpl, "^XA^FO120,60^FDHello^FS^XZ");
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

/// Declares a ZPL parameter enum whose variants map one-to-one onto single
/// code characters. Generates `code()`, `ALL`, `TryFrom<char>`, `FromStr`
/// and `Display`.
///
/// Unknown codes fail with `InvalidArgument` unless another
/// [`EtiquetaError`](crate::error::EtiquetaError) variant is named after the
/// description, as in `("compression type" => Unsupported)`.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),* $(,)?
        }
    ) => {
        code_enum! {
            $(#[$meta])*
            $vis enum $name ($what => InvalidArgument) {
                $( $(#[$vmeta])* $variant = $code ),*
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal => $kind:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The single-character ZPL code for this value.
            #[inline]
            pub fn code(self) -> char {
                match self {
                    $(Self::$variant => $code),*
                }
            }
        }

        impl TryFrom<char> for $name {
            type Error = crate::error::EtiquetaError;

            fn try_from(c: char) -> ::core::result::Result<Self, Self::Error> {
                match c {
                    $($code => Ok(Self::$variant),)*
                    other => Err(crate::error::EtiquetaError::$kind(
                        format!(concat!("unknown ", $what, ": {:?}"), other),
                    )),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::EtiquetaError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::try_from(c),
                    _ => Err(crate::error::EtiquetaError::$kind(
                        format!(concat!("unknown ", $what, ": {:?}"), s),
                    )),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;

/// ZPL yes/no flag.
#[inline]
pub(crate) fn yes_no(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}
