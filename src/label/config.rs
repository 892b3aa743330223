//! Physical label parameters.

use crate::printer::PrinterConfig;
use crate::printer::config::mm_to_dots;

/// Size, resolution and orientation of one label.
///
/// ```
/// use etiqueta::label::LabelConfig;
/// use etiqueta::printer::PrinterConfig;
///
/// let config = LabelConfig::new(65.0)
///     .width(90.0)
///     .printer(&PrinterConfig::DPMM_8)
///     .rotated(true);
/// assert_eq!(config.width_dots(), 720);
/// assert_eq!(config.height_dots(), 520);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelConfig {
    /// Label height in millimeters
    pub height_mm: f64,
    /// Label width in millimeters
    pub width_mm: f64,
    /// Dots per millimeter of the target printer
    pub dpmm: f64,
    /// Print the whole label rotated by 180 degrees (`^POI`)
    pub rotate_180: bool,
}

impl LabelConfig {
    pub const DEFAULT_WIDTH_MM: f64 = 110.0;

    /// A label of the given height, 110mm wide, for a 12 dots/mm printer.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height_mm,
            width_mm: Self::DEFAULT_WIDTH_MM,
            dpmm: PrinterConfig::default().dpmm,
            rotate_180: false,
        }
    }

    pub fn width(mut self, width_mm: f64) -> Self {
        self.width_mm = width_mm;
        self
    }

    pub fn dpmm(mut self, dpmm: f64) -> Self {
        self.dpmm = dpmm;
        self
    }

    /// Take the resolution from a printer preset.
    pub fn printer(mut self, printer: &PrinterConfig) -> Self {
        self.dpmm = printer.dots_per_mm();
        self
    }

    pub fn rotated(mut self, rotate_180: bool) -> Self {
        self.rotate_180 = rotate_180;
        self
    }

    #[inline]
    pub fn width_dots(&self) -> u32 {
        mm_to_dots(self.width_mm, self.dpmm)
    }

    #[inline]
    pub fn height_dots(&self) -> u32 {
        mm_to_dots(self.height_mm, self.dpmm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabelConfig::new(65.0);
        assert_eq!(config.width_mm, 110.0);
        assert_eq!(config.dpmm, 12.0);
        assert!(!config.rotate_180);
        assert_eq!(config.width_dots(), 1320);
        assert_eq!(config.height_dots(), 780);
    }

    #[test]
    fn test_printer_preset() {
        let config = LabelConfig::new(10.0).printer(&PrinterConfig::DPMM_24);
        assert_eq!(config.dpmm, 24.0);
        assert_eq!(config.height_dots(), 240);
    }
}
