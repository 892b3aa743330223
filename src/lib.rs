//! # Etiqueta - ZPL II Label Builder
//!
//! Etiqueta builds Zebra Programming Language (ZPL II) label streams for
//! thermal label printers. It provides:
//!
//! - **Label builder**: text, barcodes, boxes, ellipses and stored formats,
//!   positioned in millimeters
//! - **Raster encoding**: images packed into `^GF`/`~DG` hex payloads
//! - **Dithering**: Floyd-Steinberg and threshold 1-bit conversion
//! - **Preview**: rendering through the Labelary web service
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::{Label, label::TextStyle};
//! use etiqueta::protocol::barcode::{BarcodeOptions, BarcodeType};
//! use etiqueta::protocol::graphics::LineColor;
//!
//! let mut label = Label::new(30.0, 60.0, 8.0, false);
//!
//! label.origin(2.0, 2.0);
//! label.write_text("SN: 12345-1", &TextStyle::new().size(4.0, 3.0))?;
//! label.end_origin();
//!
//! label.origin(2.0, 8.0);
//! label.write_barcode(80, BarcodeType::Code39, &BarcodeOptions::default());
//! label.write_text("12345-1", &TextStyle::new())?;
//! label.end_origin();
//!
//! label.origin(0.0, 0.0);
//! label.draw_box(480, 240, 2, LineColor::Black, 0)?;
//! label.end_origin();
//!
//! let zpl = label.dump();
//! assert!(zpl.starts_with("^XA^FO16,16^A0N,32,24^FDSN: 12345-1^FS"));
//! assert!(zpl.ends_with("^GB480,240,2,B,0^FS^XZ"));
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`label`] | The label builder |
//! | [`protocol`] | ZPL II command builders |
//! | [`render`] | Bitmaps, dithering and raster encoding |
//! | [`preview`] | Labelary preview client |
//! | [`printer`] | Printer resolution presets |
//! | [`error`] | Error types |

pub mod error;
pub mod label;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use label::{Label, LabelConfig};
pub use printer::PrinterConfig;
