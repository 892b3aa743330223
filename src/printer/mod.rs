//! # Printer Module
//!
//! Print-head resolutions and unit conversion.
//!
//! ## Modules
//!
//! - [`config`]: Printer resolution presets

pub mod config;

pub use config::PrinterConfig;
