//! # Printer Configuration
//!
//! Print-head resolutions for Zebra ZPL II printers.
//!
//! ## Supported Resolutions
//!
//! | Preset | Dots/mm | Resolution |
//! |--------|---------|------------|
//! | `DPMM_6` | 6 | 152 DPI |
//! | `DPMM_8` | 8 | 203 DPI |
//! | `DPMM_12` | 12 | 300 DPI |
//! | `DPMM_24` | 24 | 600 DPI |
//!
//! ZPL measures everything in dots, so every millimeter a caller passes is
//! multiplied by the head's dots-per-millimeter before it is emitted.
//!
//! ## Usage
//!
//! ```
//! use etiqueta::printer::PrinterConfig;
//!
//! let config = PrinterConfig::DPMM_12;
//! assert_eq!(config.mm_to_dots(10.0), 120);
//! ```

use crate::error::{EtiquetaError, Result};

/// # Printer Configuration
///
/// Resolution of a ZPL print head.
///
/// ## Calculations
///
/// ```text
/// dpi = dots_per_mm * 25.4
///
/// For a 300 DPI head:
///   dots_per_mm = 12
///   10mm = 120 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterConfig {
    /// Human readable name
    pub name: &'static str,

    /// Dots per millimeter
    pub dpmm: f64,
}

impl PrinterConfig {
    /// 152 DPI heads (6 dots/mm)
    pub const DPMM_6: Self = Self {
        name: "6dpmm (152 dpi)",
        dpmm: 6.0,
    };

    /// 203 DPI heads (8 dots/mm), the most common desktop resolution
    pub const DPMM_8: Self = Self {
        name: "8dpmm (203 dpi)",
        dpmm: 8.0,
    };

    /// 300 DPI heads (12 dots/mm)
    pub const DPMM_12: Self = Self {
        name: "12dpmm (300 dpi)",
        dpmm: 12.0,
    };

    /// 600 DPI heads (24 dots/mm)
    pub const DPMM_24: Self = Self {
        name: "24dpmm (600 dpi)",
        dpmm: 24.0,
    };

    /// Calculate dots per inch
    ///
    /// ## Example
    ///
    /// ```
    /// use etiqueta::printer::PrinterConfig;
    ///
    /// assert_eq!(PrinterConfig::DPMM_8.dpi(), 203);
    /// ```
    #[inline]
    pub fn dpi(&self) -> u32 {
        (self.dpmm * 25.4) as u32
    }

    #[inline]
    pub fn dots_per_mm(&self) -> f64 {
        self.dpmm
    }

    /// Convert millimeters to dots, rounding to the nearest dot.
    ///
    /// Negative lengths clamp to zero.
    #[inline]
    pub fn mm_to_dots(&self, mm: f64) -> u32 {
        mm_to_dots(mm, self.dpmm)
    }

    /// Look up a preset by dots-per-millimeter or DPI.
    ///
    /// Accepts `"12"`, `"12dpmm"`, `"300dpi"` and the like.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        let dpmm = if let Some(dpi) = s.strip_suffix("dpi") {
            match dpi.trim() {
                "152" => 6.0,
                "203" => 8.0,
                "300" => 12.0,
                "600" => 24.0,
                other => {
                    return Err(EtiquetaError::invalid(format!("unknown resolution: {other}dpi")));
                }
            }
        } else {
            let raw = s.strip_suffix("dpmm").unwrap_or(&s).trim();
            raw.parse::<f64>()
                .map_err(|_| EtiquetaError::invalid(format!("unknown resolution: {s}")))?
        };

        Self::built_in()
            .into_iter()
            .find(|p| p.dpmm == dpmm)
            .ok_or_else(|| EtiquetaError::invalid(format!("no printer preset with {dpmm} dots/mm")))
    }

    /// List all built-in presets.
    pub fn built_in() -> Vec<Self> {
        vec![Self::DPMM_6, Self::DPMM_8, Self::DPMM_12, Self::DPMM_24]
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::DPMM_12
    }
}

/// Millimeters to dots at an arbitrary resolution: `round(mm * dpmm)`.
#[inline]
pub fn mm_to_dots(mm: f64, dpmm: f64) -> u32 {
    (mm * dpmm).round().max(0.0) as u32
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi() {
        assert_eq!(PrinterConfig::DPMM_6.dpi(), 152);
        assert_eq!(PrinterConfig::DPMM_8.dpi(), 203);
        assert_eq!(PrinterConfig::DPMM_12.dpi(), 304);
        assert_eq!(PrinterConfig::DPMM_24.dpi(), 609);
    }

    #[test]
    fn test_mm_to_dots() {
        let config = PrinterConfig::DPMM_12;
        assert_eq!(config.mm_to_dots(10.0), 120);
        assert_eq!(config.mm_to_dots(5.0), 60);
        // 2.3 * 10 lands just under 23 in floating point
        assert_eq!(mm_to_dots(2.3, 10.0), 23);
    }

    #[test]
    fn test_mm_to_dots_negative_clamps() {
        assert_eq!(PrinterConfig::DPMM_8.mm_to_dots(-3.0), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(PrinterConfig::parse("12").unwrap(), PrinterConfig::DPMM_12);
        assert_eq!(PrinterConfig::parse("8dpmm").unwrap(), PrinterConfig::DPMM_8);
        assert_eq!(PrinterConfig::parse("600dpi").unwrap(), PrinterConfig::DPMM_24);
        assert!(matches!(
            PrinterConfig::parse("7"),
            Err(EtiquetaError::InvalidArgument(_))
        ));
        assert!(PrinterConfig::parse("fast").is_err());
    }

    #[test]
    fn test_default_is_300_dpi() {
        assert_eq!(PrinterConfig::default(), PrinterConfig::DPMM_12);
    }
}
