//! # ZPL II Text Commands
//!
//! Font selection and text layout commands.
//!
//! ## Overview
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `^A` | Select font, orientation and character size for the next field |
//! | `^A@` | Same, using a font file stored on the printer |
//! | `^CF` | Change the default font for the rest of the label |
//! | `^FB` | Field block: word-wrap into a box of given width and line count |
//!
//! ## Fonts
//!
//! Built-in fonts are named by one character (`0`, `A`..`Z`, `1`..`9`).
//! Downloaded fonts are referenced by path, e.g. `E:ARIAL.TTF`, where the
//! optional leading letter is the storage device (R: RAM, E: flash,
//! B: card, A: memory card).
//!
//! ## Orientation
//!
//! ```text
//! N  normal        ABC
//! R  rotated 90°   reads top to bottom
//! I  inverted 180° upside down
//! B  bottom-up     reads bottom to top (270°)
//! ```

use crate::error::{EtiquetaError, Result};

// ============================================================================
// PARAMETER TYPES
// ============================================================================

code_enum! {
    /// Text justification inside a field block
    #[derive(Default)]
    pub enum Justification ("justification") {
        #[default]
        Left = 'L',
        Right = 'R',
        Center = 'C',
        Justify = 'J',
    }
}

code_enum! {
    /// Field orientation
    #[derive(Default)]
    pub enum Orientation ("orientation") {
        #[default]
        Normal = 'N',
        Rotated = 'R',
        Inverted = 'I',
        BottomUp = 'B',
    }
}

/// Font-file extensions a stored font may carry.
///
/// `FNT` is the bitmap family, `TTF`/`TTE` the TrueType family.
pub const FONT_EXTENSIONS: [&str; 3] = ["FNT", "TTF", "TTE"];

/// A font reference accepted by `^A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Font {
    /// Resident font identified by a single `[A-Z0-9]` character
    Builtin(char),
    /// Font file stored on the printer, e.g. `E:ARIAL.TTF`
    Stored(String),
}

impl Font {
    /// Parse a font token.
    ///
    /// Accepts either one character of `[A-Z0-9]`, or a stored font path of
    /// the shape `[REBA]?:NAME.EXT` where `NAME` is `[A-Z0-9_]+` and `EXT`
    /// is one of [`FONT_EXTENSIONS`].
    ///
    /// ```
    /// use etiqueta::protocol::text::Font;
    ///
    /// assert_eq!(Font::parse("0").unwrap(), Font::Builtin('0'));
    /// assert!(Font::parse("E:ARIAL.TTF").is_ok());
    /// assert!(Font::parse("arial").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && is_builtin_font(c)
        {
            return Ok(Self::Builtin(c));
        }
        if is_stored_font(token) {
            return Ok(Self::Stored(token.to_string()));
        }
        Err(EtiquetaError::invalid(format!("invalid font: {:?}", token)))
    }

    /// Parse a token that must name a resident font (`^CF` only takes those).
    pub fn parse_builtin(token: &str) -> Result<char> {
        match Self::parse(token)? {
            Self::Builtin(c) => Ok(c),
            Self::Stored(_) => Err(EtiquetaError::invalid(format!("invalid font: {:?}", token))),
        }
    }
}

impl std::str::FromStr for Font {
    type Err = EtiquetaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[inline]
fn is_builtin_font(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn is_stored_font(token: &str) -> bool {
    let path = match token.split_once(':') {
        Some(("", path)) => path,
        Some((device, path)) if matches!(device, "R" | "E" | "B" | "A") => path,
        _ => return false,
    };
    let Some((name, ext)) = path.rsplit_once('.') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && FONT_EXTENSIONS.contains(&ext)
}

// ============================================================================
// COMMANDS
// ============================================================================

/// # Scalable/Bitmapped Font (^A)
///
/// Selects the font for the next field. Height and width are in dots.
///
/// ```
/// use etiqueta::protocol::text::{self, Font, Orientation};
///
/// let cmd = text::font(&Font::Builtin('0'), Orientation::Normal, 60, 48);
/// assert_eq!(cmd, "^A0N,60,48");
///
/// let cmd = text::font(&Font::Stored("E:ARIAL.TTF".into()), Orientation::Rotated, 60, 48);
/// assert_eq!(cmd, "^A@R,60,48,E:ARIAL.TTF");
/// ```
pub fn font(font: &Font, orientation: Orientation, height: u32, width: u32) -> String {
    match font {
        Font::Builtin(c) => format!("^A{}{},{},{}", c, orientation.code(), height, width),
        Font::Stored(path) => {
            format!("^A@{},{},{},{}", orientation.code(), height, width, path)
        }
    }
}

/// # Change Default Font (^CF)
///
/// Applies to every following field that does not select its own font.
#[inline]
pub fn default_font(font: char, height: u32, width: u32) -> String {
    format!("^CF{},{},{}", font, height, width)
}

/// # Field Block (^FB)
///
/// Wraps the field's text into a block `width` dots wide, at most
/// `max_lines` lines tall.
///
/// ## Parameters
///
/// - `width`: block width in dots
/// - `max_lines`: maximum number of lines; excess text overwrites the last line
/// - `line_spacing`: extra dots between lines (may be negative)
/// - `justification`: see [`Justification`]
/// - `hanging_indent`: indent in dots for every line after the first
pub fn field_block(
    width: u32,
    max_lines: u32,
    line_spacing: i32,
    justification: Justification,
    hanging_indent: u32,
) -> String {
    format!(
        "^FB{},{},{},{},{}",
        width,
        max_lines,
        line_spacing,
        justification.code(),
        hanging_indent
    )
}

// ============================================================================
// TESTS
// ============================================================================
