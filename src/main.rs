//! # Etiqueta CLI
//!
//! Command-line interface for building ZPL II labels.
//!
//! ## Usage
//!
//! ```bash
//! # Demo part label to stdout
//! etiqueta part --part-number OKC-2975 --lot M043737 --serial 12345-1
//!
//! # Same label with a picture, plus a rendered PNG preview
//! etiqueta part --image part.bmp --preview label.png
//!
//! # Store an image on the printer as LOGO.GRF
//! etiqueta graphic logo.png --name LOGO --width-mm 30
//!
//! # Inline image label, hard threshold instead of dithering
//! etiqueta graphic logo.png --width-mm 30 --threshold 100
//! ```
//!
//! Set `RUST_LOG=debug` to see raster sizing and image conversion.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use etiqueta::{
    EtiquetaError, Label, LabelConfig, PrinterConfig,
    label::TextStyle,
    preview::PreviewRequest,
    protocol::barcode::{BarcodeOptions, BarcodeType},
    protocol::graphics::Compression,
    render::{dither::DitheringAlgorithm, image::ImageBitmap},
};

/// Etiqueta - ZPL II label builder
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a part label with part number, quantity, lot and serial
    Part {
        #[arg(long, default_value = "OKC-2975")]
        part_number: String,

        /// Job (lot) number
        #[arg(long, default_value = "M043737")]
        lot: String,

        #[arg(long, default_value = "12345-1")]
        serial: String,

        #[arg(long, default_value = "1")]
        quantity: u32,

        /// Picture of the part, placed right of the text
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Render the label through Labelary and save the PNG
        #[arg(long, value_name = "FILE")]
        preview: Option<PathBuf>,
    },

    /// Convert an image file into a ZPL graphic
    Graphic {
        /// Image to convert
        file: PathBuf,

        /// Store on the printer as NAME.GRF (~DG) instead of printing inline
        #[arg(long)]
        name: Option<String>,

        /// Graphic width in mm
        #[arg(long, default_value = "30")]
        width_mm: f64,

        /// Graphic height in mm (defaults to the image's aspect ratio)
        #[arg(long)]
        height_mm: Option<f64>,

        /// Hard black/white threshold (0-255) instead of Floyd-Steinberg
        #[arg(long)]
        threshold: Option<u8>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(clap::Args, Debug)]
struct LayoutArgs {
    /// Label height in mm
    #[arg(long, default_value = "65")]
    height: f64,

    /// Label width in mm
    #[arg(long, default_value = "90")]
    width: f64,

    /// Printer resolution: dots/mm ("12", "8dpmm") or dpi ("300dpi")
    #[arg(long, default_value = "12")]
    dpmm: String,

    /// Print the label upside down
    #[arg(long)]
    rotate: bool,
}

impl LayoutArgs {
    fn config(&self) -> Result<LabelConfig, EtiquetaError> {
        let printer = PrinterConfig::parse(&self.dpmm)?;
        log::debug!("resolution {} dpi", printer.dpi());
        Ok(LabelConfig::new(self.height)
            .width(self.width)
            .printer(&printer)
            .rotated(self.rotate))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EtiquetaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Part {
            part_number,
            lot,
            serial,
            quantity,
            image,
            layout,
            preview,
        } => {
            let label = part_label(
                layout.config()?,
                &part_number,
                &lot,
                &serial,
                quantity,
                image.as_deref(),
            )?;
            println!("{}", label.dump());

            if let Some(path) = preview {
                save_preview(&label, &path)?;
                eprintln!("Saved preview to {}", path.display());
            }
        }

        Commands::Graphic {
            file,
            name,
            width_mm,
            height_mm,
            threshold,
            layout,
        } => {
            let dithering = threshold
                .map(DitheringAlgorithm::Threshold)
                .unwrap_or_default();
            let bitmap = ImageBitmap::open(&file)?.dithering(dithering);
            let mut label = Label::from_config(layout.config()?);

            let height = match name {
                Some(name) => label.upload_graphic(&name, &bitmap, width_mm, height_mm)?,
                None => {
                    label.origin(0.0, 0.0);
                    let height =
                        label.write_graphic(&bitmap, width_mm, height_mm, Compression::Ascii)?;
                    label.end_origin();
                    height
                }
            };
            log::info!("graphic placed at {}x{:.2}mm", width_mm, height);
            println!("{}", label.dump());
        }
    }

    Ok(())
}

/// The demo part label: text lines at 5mm intervals, Code 39 barcodes for
/// the part and lot numbers, and an optional picture on the right.
fn part_label(
    config: LabelConfig,
    part_number: &str,
    lot: &str,
    serial: &str,
    quantity: u32,
    image: Option<&Path>,
) -> Result<Label, EtiquetaError> {
    let left_margin = 0.0;
    let heading = TextStyle::new().size(5.0, 4.0);
    let code39 = BarcodeOptions::default()
        .interpretation_line(false)
        .thin_bar_width(3);

    let mut label = Label::from_config(config);

    label.origin(left_margin, 20.0);
    label.write_text(&format!("PN: {}", part_number), &heading)?;
    label.end_origin();

    label.origin(left_margin, 25.0);
    label.write_barcode(50, BarcodeType::Code39, &code39);
    label.write_text(part_number, &TextStyle::new())?;
    label.end_origin();

    label.origin(left_margin, 30.0);
    label.write_text(&format!("QTY: {}", quantity), &heading)?;
    label.end_origin();

    label.origin(left_margin, 35.0);
    label.write_text(&format!("Lot #: {}", lot), &heading)?;
    label.end_origin();

    label.origin(left_margin, 40.0);
    label.write_barcode(50, BarcodeType::Code39, &code39);
    label.write_text(lot, &TextStyle::new())?;
    label.end_origin();

    label.origin(left_margin, 45.0);
    label.write_text(&format!("SN: {}", serial), &heading)?;
    label.end_origin();

    if let Some(path) = image {
        let bitmap = ImageBitmap::open(path)?;
        label.origin(50.0, 35.0);
        label.write_graphic(&bitmap, 35.0, None, Compression::Ascii)?;
        label.end_origin();
    }

    Ok(label)
}

/// Fetch a Labelary render and save it as a PNG
fn save_preview(label: &Label, path: &Path) -> Result<(), EtiquetaError> {
    let client = reqwest::Client::builder()
        .user_agent("etiqueta/0.1")
        .build()
        .map_err(|e| EtiquetaError::Preview(format!("HTTP client error: {}", e)))?;

    let runtime = tokio::runtime::Runtime::new()?;
    let png = runtime.block_on(PreviewRequest::for_label(label, 0).fetch(&client))?;

    png.save(path)
        .map_err(|e| EtiquetaError::Image(format!("Failed to save PNG: {}", e)))?;

    Ok(())
}
