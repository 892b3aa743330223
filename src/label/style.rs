//! Text field styling shared by [`Label::write_text`](super::Label::write_text)
//! and [`Label::write_field_number`](super::Label::write_field_number).

use crate::protocol::text::{Justification, Orientation};

/// Optional font selection and line wrapping for one text field.
///
/// Sizes are in millimeters. A font command is only emitted when both
/// character dimensions are set and positive; a field block only when a
/// positive line width is set.
///
/// ```
/// use etiqueta::label::TextStyle;
/// use etiqueta::protocol::text::Justification;
///
/// let style = TextStyle::new()
///     .size(5.0, 4.0)
///     .wrap(60.0)
///     .max_lines(2)
///     .justification(Justification::Center);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Character height in mm
    pub char_height: Option<f64>,
    /// Character width in mm
    pub char_width: Option<f64>,
    /// Font token: `[A-Z0-9]` or a stored font path such as `E:ARIAL.TTF`
    pub font: String,
    pub orientation: Orientation,
    /// Wrap width in mm
    pub line_width: Option<f64>,
    pub max_lines: u32,
    /// Extra dots between wrapped lines
    pub line_spacing: i32,
    pub justification: Justification,
    /// Indent in dots for wrapped lines after the first
    pub hanging_indent: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            char_height: None,
            char_width: None,
            font: "0".to_string(),
            orientation: Orientation::Normal,
            line_width: None,
            max_lines: 1,
            line_spacing: 0,
            justification: Justification::Left,
            hanging_indent: 0,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character height and width in millimeters.
    pub fn size(mut self, height_mm: f64, width_mm: f64) -> Self {
        self.char_height = Some(height_mm);
        self.char_width = Some(width_mm);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Wrap the text into a block `line_width_mm` wide.
    pub fn wrap(mut self, line_width_mm: f64) -> Self {
        self.line_width = Some(line_width_mm);
        self
    }

    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = lines;
        self
    }

    pub fn line_spacing(mut self, dots: i32) -> Self {
        self.line_spacing = dots;
        self
    }

    pub fn justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn hanging_indent(mut self, dots: u32) -> Self {
        self.hanging_indent = dots;
        self
    }
}
