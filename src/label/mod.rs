//! # Label Builder
//!
//! [`Label`] accumulates ZPL fragments for one label. Callers work in
//! millimeters; every method converts to dots with `round(mm * dpmm)` at the
//! moment it emits.
//!
//! ## Example
//!
//! ```
//! use etiqueta::label::{Label, TextStyle};
//! use etiqueta::protocol::barcode::{BarcodeOptions, BarcodeType};
//!
//! let mut label = Label::new(65.0, 90.0, 12.0, false);
//!
//! label.origin(0.0, 20.0);
//! label.write_text("PN: OKC-2975", &TextStyle::new().size(5.0, 4.0))?;
//! label.end_origin();
//!
//! label.origin(0.0, 25.0);
//! label.write_barcode(
//!     50,
//!     BarcodeType::Code39,
//!     &BarcodeOptions::default().interpretation_line(false).thin_bar_width(3),
//! );
//! label.write_text("OKC-2975", &TextStyle::new())?;
//! label.end_origin();
//!
//! assert_eq!(
//!     label.dump(),
//!     "^XA^FO0,240^A0N,60,48^FDPN: OKC-2975^FS\
//!      ^FO0,300^BY3^B3N,N,50,N,N^FDOKC-2975^FS^XZ"
//! );
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Fields
//!
//! `origin` opens a field and `end_origin` closes it. The builder does not
//! track whether they pair up; an unmatched `^FO`/`^FS` is sent as written.
//!
//! ## Failure
//!
//! Fallible methods check everything before appending. On `Err` the label is
//! exactly as it was before the call.

mod config;
mod style;

pub use config::LabelConfig;
pub use style::TextStyle;

use std::fmt;

use crate::error::{EtiquetaError, Result};
use crate::printer::config::mm_to_dots;
use crate::protocol::barcode::{self, BarcodeOptions, BarcodeType};
use crate::protocol::commands;
use crate::protocol::graphics::{self, Compression, LineColor, MAX_ROUNDING};
use crate::protocol::text::{self, Font, Justification};
use crate::render::raster::{Bitmap, RasterPayload};

/// A ZPL II label under construction.
#[derive(Debug, Clone)]
pub struct Label {
    config: LabelConfig,
    /// Index 0 is always `^XA`.
    fragments: Vec<String>,
}

impl Label {
    /// Start a label `height_mm` tall and `width_mm` wide for a printer with
    /// `dpmm` dots per millimeter, optionally rotated by 180 degrees.
    pub fn new(height_mm: f64, width_mm: f64, dpmm: f64, rotate_180: bool) -> Self {
        Self::from_config(
            LabelConfig::new(height_mm)
                .width(width_mm)
                .dpmm(dpmm)
                .rotated(rotate_180),
        )
    }

    pub fn from_config(config: LabelConfig) -> Self {
        let mut fragments = vec![commands::start_format()];
        if config.rotate_180 {
            fragments.push(commands::print_orientation_inverted());
        }
        log::debug!(
            "new label {}x{}mm at {} dots/mm{}",
            config.width_mm,
            config.height_mm,
            config.dpmm,
            if config.rotate_180 { ", rotated" } else { "" }
        );
        Self { config, fragments }
    }

    #[inline]
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    #[inline]
    pub fn height_mm(&self) -> f64 {
        self.config.height_mm
    }

    #[inline]
    pub fn width_mm(&self) -> f64 {
        self.config.width_mm
    }

    #[inline]
    pub fn dpmm(&self) -> f64 {
        self.config.dpmm
    }

    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.config.rotate_180
    }

    /// Fragments emitted so far, without the closing `^XZ`.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    #[inline]
    fn dots(&self, mm: f64) -> u32 {
        mm_to_dots(mm, self.config.dpmm)
    }

    fn push(&mut self, fragment: String) -> &mut Self {
        log::trace!(
            "+{} {}",
            fragment.len(),
            fragment.get(..3).unwrap_or(&fragment)
        );
        self.fragments.push(fragment);
        self
    }

    fn reject(err: EtiquetaError) -> EtiquetaError {
        log::warn!("label call rejected: {}", err);
        err
    }

    // ------------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------------

    /// Open a field at (`x_mm`, `y_mm`).
    pub fn origin(&mut self, x_mm: f64, y_mm: f64) -> &mut Self {
        let fragment = commands::field_origin(self.dots(x_mm), self.dots(y_mm));
        self.push(fragment)
    }

    /// Close the current field.
    pub fn end_origin(&mut self) -> &mut Self {
        self.push(commands::field_separator())
    }

    /// Wrap the next field's text into a block `width_mm` wide.
    pub fn text_block(&mut self, width_mm: f64, justification: Justification, lines: u32) -> &mut Self {
        let fragment = text::field_block(self.dots(width_mm), lines, 0, justification, 0);
        self.push(fragment)
    }

    /// Optional `^A` and `^FB` for a style, built before anything is pushed.
    /// Zero or negative sizes count as unset.
    fn style_fragments(&self, style: &TextStyle) -> Result<Vec<String>> {
        let positive = |v: Option<f64>| v.filter(|mm| *mm > 0.0);
        let mut out = Vec::with_capacity(2);
        if let (Some(h), Some(w)) = (positive(style.char_height), positive(style.char_width))
            && !style.font.is_empty()
        {
            let font = Font::parse(&style.font)?;
            out.push(text::font(&font, style.orientation, self.dots(h), self.dots(w)));
        }
        if let Some(line_width) = positive(style.line_width) {
            out.push(text::field_block(
                self.dots(line_width),
                style.max_lines,
                style.line_spacing,
                style.justification,
                style.hanging_indent,
            ));
        }
        Ok(out)
    }

    /// Write `text` as field data, preceded by whatever font and wrapping
    /// `style` asks for.
    ///
    /// Fails with `InvalidArgument` if the style's font is neither a single
    /// `[A-Z0-9]` nor a stored font path.
    pub fn write_text(&mut self, text: &str, style: &TextStyle) -> Result<&mut Self> {
        let prefix = self.style_fragments(style).map_err(Self::reject)?;
        for fragment in prefix {
            self.push(fragment);
        }
        Ok(self.push(commands::field_data(text)))
    }

    /// Set the default font for the rest of the label.
    pub fn set_default_font(&mut self, height_mm: f64, width_mm: f64, font: &str) -> Result<&mut Self> {
        let font = Font::parse_builtin(font).map_err(Self::reject)?;
        let fragment = text::default_font(font, self.dots(height_mm), self.dots(width_mm));
        Ok(self.push(fragment))
    }

    /// Write a variable field number for stored formats, optionally named.
    ///
    /// `name` may only contain ASCII letters, digits and spaces.
    pub fn write_field_number(
        &mut self,
        number: u32,
        name: Option<&str>,
        style: &TextStyle,
    ) -> Result<&mut Self> {
        if let Some(name) = name
            && !commands::is_valid_field_name(name)
        {
            return Err(Self::reject(EtiquetaError::invalid(format!(
                "field name may only contain alphanumerical characters and spaces: {:?}",
                name
            ))));
        }
        let prefix = self.style_fragments(style).map_err(Self::reject)?;
        for fragment in prefix {
            self.push(fragment);
        }
        Ok(self.push(commands::field_number(number, name)))
    }

    // ------------------------------------------------------------------------
    // Barcodes
    // ------------------------------------------------------------------------

    /// Barcode `height_dots` tall. The data follows as a normal text field.
    pub fn write_barcode(
        &mut self,
        height_dots: u32,
        barcode_type: BarcodeType,
        options: &BarcodeOptions,
    ) -> &mut Self {
        self.push(barcode::barcode_with_width(barcode_type, height_dots, options))
    }

    // ------------------------------------------------------------------------
    // Graphics
    // ------------------------------------------------------------------------

    /// Height of an image placed `width_mm` wide. A missing or non-positive
    /// height keeps the image's native aspect ratio.
    fn resolve_height(bitmap: &impl Bitmap, width_mm: f64, height_mm: Option<f64>) -> Result<f64> {
        if let Some(h) = height_mm.filter(|h| *h > 0.0) {
            return Ok(h);
        }
        match bitmap.dimensions() {
            (0, _) => Err(EtiquetaError::invalid("image has zero width")),
            (w, h) => Ok(h as f64 / w as f64 * width_mm),
        }
    }

    fn rasterize(&self, bitmap: &impl Bitmap, width_mm: f64, height_mm: f64) -> RasterPayload {
        RasterPayload::from_bitmap(bitmap, self.dots(width_mm), self.dots(height_mm))
    }

    /// Store `bitmap` on the printer as `name.GRF` for later
    /// [`print_graphic`](Self::print_graphic).
    ///
    /// `name` must be 1 to 8 characters. Returns the height in mm the
    /// graphic was stored at.
    pub fn upload_graphic(
        &mut self,
        name: &str,
        bitmap: &impl Bitmap,
        width_mm: f64,
        height_mm: Option<f64>,
    ) -> Result<f64> {
        if !graphics::is_valid_graphic_name(name) {
            return Err(Self::reject(EtiquetaError::invalid(format!(
                "graphic name must have length [1:8]: {:?}",
                name
            ))));
        }
        let height_mm = Self::resolve_height(bitmap, width_mm, height_mm).map_err(Self::reject)?;
        let payload = self.rasterize(bitmap, width_mm, height_mm);
        self.push(graphics::download_graphic(name, &payload));
        Ok(height_mm)
    }

    /// Embed `bitmap` in the current field, `width_mm` wide.
    ///
    /// Only [`Compression::Ascii`] is implemented; anything else fails with
    /// `Unsupported`. Returns the height in mm the graphic was placed at.
    pub fn write_graphic(
        &mut self,
        bitmap: &impl Bitmap,
        width_mm: f64,
        height_mm: Option<f64>,
        compression: Compression,
    ) -> Result<f64> {
        compression.ensure_supported().map_err(Self::reject)?;
        let height_mm = Self::resolve_height(bitmap, width_mm, height_mm).map_err(Self::reject)?;
        let payload = self.rasterize(bitmap, width_mm, height_mm);
        self.push(graphics::graphic_field(&payload));
        Ok(height_mm)
    }

    /// Print a graphic stored with [`upload_graphic`](Self::upload_graphic).
    pub fn print_graphic(&mut self, name: &str, scale_x: u32, scale_y: u32) -> &mut Self {
        self.push(graphics::recall_graphic(name, scale_x, scale_y))
    }

    /// Box in dots. `rounding` runs from 0 (square corners) to 8.
    pub fn draw_box(
        &mut self,
        width_dots: u32,
        height_dots: u32,
        thickness: u32,
        color: LineColor,
        rounding: u8,
    ) -> Result<&mut Self> {
        if rounding > MAX_ROUNDING {
            return Err(Self::reject(EtiquetaError::invalid(format!(
                "invalid rounding: {} (0..={})",
                rounding, MAX_ROUNDING
            ))));
        }
        Ok(self.push(graphics::graphic_box(
            width_dots,
            height_dots,
            thickness,
            color,
            rounding,
        )))
    }

    /// Ellipse in dots.
    pub fn draw_ellipse(
        &mut self,
        width_dots: u32,
        height_dots: u32,
        thickness: u32,
        color: LineColor,
    ) -> &mut Self {
        self.push(graphics::graphic_ellipse(width_dots, height_dots, thickness, color))
    }

    // ------------------------------------------------------------------------
    // Formats
    // ------------------------------------------------------------------------

    /// Recall the stored format `name` into this label.
    pub fn run_script(&mut self, name: &str) -> &mut Self {
        self.push(commands::recall_format(name))
    }

    /// Save this label on the printer as format `name`.
    ///
    /// The declaration goes directly after `^XA`, wherever in the build this
    /// is called.
    pub fn save_format(&mut self, name: &str) -> &mut Self {
        let fragment = commands::download_format(name);
        log::trace!("+{} ^DF at 1", fragment.len());
        self.fragments.insert(1, fragment);
        self
    }

    /// The finished ZPL: every fragment followed by `^XZ`.
    ///
    /// Does not consume or modify the label; call it as often as needed.
    pub fn dump(&self) -> String {
        let len = self.fragments.iter().map(String::len).sum::<usize>() + commands::END_FORMAT.len();
        let mut out = String::with_capacity(len);
        for fragment in &self.fragments {
            out.push_str(fragment);
        }
        out.push_str(commands::END_FORMAT);
        out
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        f.write_str(commands::END_FORMAT)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::Orientation;
    use crate::render::raster::MonoBitmap;

    fn label() -> Label {
        Label::new(65.0, 90.0, 12.0, false)
    }

    #[test]
    fn test_new_starts_format() {
        assert_eq!(label().dump(), "^XA^XZ");
        assert_eq!(Label::new(10.0, 10.0, 8.0, true).dump(), "^XA^POI^XZ");
    }

    #[test]
    fn test_origin_converts_to_dots() {
        let mut l = label();
        l.origin(10.0, 5.0).end_origin();
        assert_eq!(l.dump(), "^XA^FO120,60^FS^XZ");
    }

    #[test]
    fn test_origin_rounds() {
        let mut l = Label::new(10.0, 10.0, 8.0, false);
        l.origin(0.3, 1.06);
        // 2.4 → 2, 8.48 → 8
        assert_eq!(l.fragments()[1], "^FO2,8");
    }

    #[test]
    fn test_dump_is_idempotent() {
        let mut l = label();
        l.origin(1.0, 1.0);
        l.write_text("A", &TextStyle::new()).unwrap();
        let first = l.dump();
        assert_eq!(first, l.dump());
        assert_eq!(first, l.to_string());
        assert_eq!(l.fragments().len(), 3);
    }

    #[test]
    fn test_text_block_all_justifications() {
        for (j, code) in Justification::ALL.iter().zip(["L", "R", "C", "J"]) {
            let mut l = label();
            l.text_block(50.0, *j, 2);
            assert_eq!(l.fragments()[1], format!("^FB600,2,0,{},0", code));
        }
    }

    #[test]
    fn test_write_text_plain() {
        let mut l = label();
        l.write_text("Hello", &TextStyle::new()).unwrap();
        assert_eq!(l.dump(), "^XA^FDHello^XZ");
    }

    #[test]
    fn test_write_text_font_and_wrap() {
        let mut l = label();
        let style = TextStyle::new()
            .size(5.0, 4.0)
            .orientation(Orientation::Rotated)
            .wrap(50.0)
            .max_lines(3)
            .line_spacing(2)
            .justification(Justification::Center)
            .hanging_indent(5);
        l.write_text("Hi", &style).unwrap();
        assert_eq!(l.dump(), "^XA^A0R,60,48^FB600,3,2,C,5^FDHi^XZ");
    }

    #[test]
    fn test_write_text_stored_font() {
        let mut l = label();
        l.write_text("Hi", &TextStyle::new().size(2.0, 2.0).font("E:ARIAL.TTF"))
            .unwrap();
        assert_eq!(l.fragments()[1], "^A@N,24,24,E:ARIAL.TTF");
    }

    #[test]
    fn test_write_text_needs_both_sizes_for_font() {
        let mut l = label();
        let style = TextStyle {
            char_height: Some(5.0),
            ..TextStyle::default()
        };
        l.write_text("x", &style).unwrap();
        assert_eq!(l.dump(), "^XA^FDx^XZ");
    }

    #[test]
    fn test_write_text_zero_sizes_are_unset() {
        let mut l = label();
        l.write_text("a", &TextStyle::new().size(0.0, 4.0)).unwrap();
        l.write_text("b", &TextStyle::new().size(5.0, 0.0)).unwrap();
        l.write_text("c", &TextStyle::new().wrap(0.0).max_lines(3)).unwrap();
        l.write_text("d", &TextStyle::new().size(-1.0, -1.0).wrap(-5.0)).unwrap();
        assert_eq!(l.dump(), "^XA^FDa^FDb^FDc^FDd^XZ");
    }

    #[test]
    fn test_write_text_bad_font_leaves_buffer() {
        let mut l = label();
        l.origin(1.0, 1.0);
        let before = l.dump();
        let style = TextStyle::new().size(5.0, 4.0).font("arial").wrap(10.0);
        assert!(matches!(
            l.write_text("x", &style),
            Err(EtiquetaError::InvalidArgument(_))
        ));
        assert_eq!(l.dump(), before);
    }

    #[test]
    fn test_bad_font_ignored_without_size() {
        // No character size means no font command, so the font is never read
        let mut l = label();
        l.write_text("x", &TextStyle::new().font("??")).unwrap();
        assert_eq!(l.dump(), "^XA^FDx^XZ");
    }

    #[test]
    fn test_set_default_font() {
        let mut l = label();
        l.set_default_font(3.0, 2.0, "A").unwrap();
        assert_eq!(l.fragments()[1], "^CFA,36,24");

        let before = l.dump();
        assert!(l.set_default_font(3.0, 2.0, "AB").is_err());
        assert!(l.set_default_font(3.0, 2.0, "E:ARIAL.TTF").is_err());
        assert!(l.set_default_font(3.0, 2.0, "").is_err());
        assert_eq!(l.dump(), before);
    }

    #[test]
    fn test_field_number() {
        let mut l = label();
        l.write_field_number(1, None, &TextStyle::new()).unwrap();
        l.write_field_number(2, Some("Lot no"), &TextStyle::new().size(3.0, 3.0))
            .unwrap();
        assert_eq!(l.dump(), "^XA^FN1^A0N,36,36^FN2\"Lot no\"^XZ");
    }

    #[test]
    fn test_field_number_bad_name_leaves_buffer() {
        let mut l = label();
        let style = TextStyle::new().size(3.0, 3.0).wrap(20.0);
        assert!(matches!(
            l.write_field_number(1, Some("lot#1"), &style),
            Err(EtiquetaError::InvalidArgument(_))
        ));
        assert!(l.write_field_number(1, Some(""), &style).is_err());
        assert_eq!(l.dump(), "^XA^XZ");
    }

    #[test]
    fn test_barcode_per_type_order() {
        let opts = BarcodeOptions::default().check_digit(true).interpretation_line_above(true);
        let mut l = label();
        l.write_barcode(50, BarcodeType::Interleaved2Of5, &opts);
        l.write_barcode(50, BarcodeType::Code39, &opts);
        l.write_barcode(50, BarcodeType::UpcA, &opts);
        assert_eq!(
            &l.fragments()[1..],
            &["^B2N,50,Y,Y,Y", "^B3N,Y,50,Y,Y", "^BUN,50,Y,Y,Y"]
        );
    }

    #[test]
    fn test_draw_box() {
        let mut l = label();
        l.draw_box(100, 50, 1, LineColor::Black, 0).unwrap();
        l.draw_box(100, 50, 3, LineColor::White, 8).unwrap();
        assert_eq!(&l.fragments()[1..], &["^GB100,50,1,B,0", "^GB100,50,3,W,8"]);
    }

    #[test]
    fn test_draw_box_rounding_out_of_range() {
        let mut l = label();
        assert!(matches!(
            l.draw_box(100, 50, 1, LineColor::Black, 9),
            Err(EtiquetaError::InvalidArgument(_))
        ));
        assert_eq!(l.dump(), "^XA^XZ");
    }

    #[test]
    fn test_draw_ellipse() {
        let mut l = label();
        l.draw_ellipse(80, 40, 2, LineColor::Black);
        assert_eq!(l.fragments()[1], "^GE80,40,2,B");
    }

    #[test]
    fn test_print_graphic_and_run_script() {
        let mut l = label();
        l.print_graphic("LOGO", 1, 1).run_script("R:BASE.ZPL");
        assert_eq!(l.dump(), "^XA^XGLOGO,1,1^XFR:BASE.ZPL^FS^XZ");
    }

    #[test]
    fn test_upload_graphic_proportional_height() {
        let mut l = Label::new(65.0, 90.0, 8.0, false);
        let image = MonoBitmap::filled(200, 100, true);
        let height = l.upload_graphic("LOGO", &image, 50.0, None).unwrap();
        assert_eq!(height, 25.0);
        // 50mm * 8 = 400 dots → 50 bytes per row, 25mm * 8 = 200 rows
        let fragment = &l.fragments()[1];
        assert!(fragment.starts_with("~DGLOGO.GRF,10000,50,"));
        assert_eq!(fragment.len(), "~DGLOGO.GRF,10000,50,".len() + 20000);
    }

    #[test]
    fn test_upload_graphic_explicit_height() {
        let mut l = label();
        let image = MonoBitmap::filled(10, 10, false);
        let height = l.upload_graphic("SQ", &image, 2.0, Some(1.0)).unwrap();
        assert_eq!(height, 1.0);
        // 24 x 12 dots, all black
        assert_eq!(l.fragments()[1], format!("~DGSQ.GRF,36,3,{}", "F".repeat(72)));
    }

    #[test]
    fn test_upload_graphic_name_length() {
        let mut l = label();
        let image = MonoBitmap::filled(8, 8, true);
        for bad in ["", "TOOLONG12"] {
            assert!(matches!(
                l.upload_graphic(bad, &image, 5.0, None),
                Err(EtiquetaError::InvalidArgument(_))
            ));
        }
        assert_eq!(l.dump(), "^XA^XZ");
    }

    #[test]
    fn test_write_graphic_inline() {
        let mut l = Label::new(10.0, 10.0, 8.0, false);
        let image = MonoBitmap::filled(4, 2, true);
        let height = l.write_graphic(&image, 2.0, None, Compression::Ascii).unwrap();
        assert_eq!(height, 1.0);
        // 16 x 8 dots white: 2 bytes per row, 16 bytes, 32 hex chars
        assert_eq!(l.fragments()[1], format!("^GFA,32,16,2,{}", "0".repeat(32)));
    }

    #[test]
    fn test_write_graphic_unsupported_compression() {
        let mut l = label();
        let image = MonoBitmap::filled(8, 8, true);
        for compression in [Compression::Binary, Compression::Compressed] {
            assert!(matches!(
                l.write_graphic(&image, 5.0, None, compression),
                Err(EtiquetaError::Unsupported(_))
            ));
        }
        assert_eq!(l.dump(), "^XA^XZ");
    }

    #[test]
    fn test_graphic_zero_width_image() {
        let mut l = label();
        let image = MonoBitmap::filled(0, 5, true);
        assert!(matches!(
            l.write_graphic(&image, 5.0, None, Compression::Ascii),
            Err(EtiquetaError::InvalidArgument(_))
        ));
        // An explicit height never looks at the aspect ratio
        assert!(l.write_graphic(&image, 1.0, Some(1.0), Compression::Ascii).is_ok());
    }

    #[test]
    fn test_save_format_goes_after_start() {
        let mut l = Label::new(10.0, 10.0, 12.0, true);
        l.origin(1.0, 1.0);
        l.write_text("x", &TextStyle::new()).unwrap();
        l.end_origin();
        l.save_format("PARTS");
        assert_eq!(l.dump(), "^XA^DFPARTS^FS^POI^FO12,12^FDx^FS^XZ");
    }

    #[test]
    fn test_unmatched_fields_are_passed_through() {
        let mut l = label();
        l.origin(0.0, 0.0).origin(1.0, 1.0).end_origin().end_origin().end_origin();
        assert_eq!(l.dump(), "^XA^FO0,0^FO12,12^FS^FS^FS^XZ");
    }

    #[test]
    fn test_accessors() {
        let l = Label::from_config(LabelConfig::new(30.0).dpmm(8.0).rotated(true));
        assert_eq!(l.height_mm(), 30.0);
        assert_eq!(l.width_mm(), 110.0);
        assert_eq!(l.dpmm(), 8.0);
        assert!(l.is_rotated());
        assert_eq!(l.config().height_dots(), 240);
    }
}
