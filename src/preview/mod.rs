//! # Label Preview
//!
//! Renders a finished label through the public Labelary API and returns the
//! PNG it sends back. Not every ZPL command is supported by the service; see
//! <http://labelary.com>.
//!
//! ```no_run
//! use etiqueta::Label;
//! use etiqueta::preview::PreviewRequest;
//!
//! # async fn run() -> Result<(), etiqueta::EtiquetaError> {
//! let mut label = Label::new(65.0, 90.0, 12.0, false);
//! label.origin(5.0, 5.0).end_origin();
//!
//! let client = reqwest::Client::new();
//! let png = PreviewRequest::for_label(&label, 0).fetch(&client).await?;
//! png.save("label.png").map_err(|e| etiqueta::EtiquetaError::Image(e.to_string()))?;
//! # Ok(())
//! # }
//! ```

use image::DynamicImage;

use crate::error::{EtiquetaError, Result};
use crate::label::Label;

pub const LABELARY_URL: &str = "https://api.labelary.com/v1/printers";

const MM_PER_INCH: f64 = 25.4;

const INVALID_PREVIEW: &str = "Invalid preview received, most likely bad ZPL uploaded";

/// One render of one label.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    /// Dots per millimeter; the service takes a whole number
    pub dpmm: u32,
    pub width_in: f64,
    pub height_in: f64,
    /// Which label of a multi-label stream to render
    pub index: u32,
    pub body: String,
}

impl PreviewRequest {
    pub fn for_label(label: &Label, index: u32) -> Self {
        Self {
            dpmm: label.dpmm().max(0.0) as u32,
            width_in: label.width_mm() / MM_PER_INCH,
            height_in: label.height_mm() / MM_PER_INCH,
            index,
            body: label.dump(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}dpmm/labels/{:.6}x{:.6}/{}/",
            LABELARY_URL, self.dpmm, self.width_in, self.height_in, self.index
        )
    }

    /// POST the label and decode the returned PNG.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<DynamicImage> {
        let url = self.url();
        log::debug!("requesting preview from {}", url);

        let response = client
            .post(&url)
            .body(self.body.clone())
            .send()
            .await
            .map_err(|e| EtiquetaError::Preview(format!("{}: {}", INVALID_PREVIEW, e)))?;

        if !response.status().is_success() {
            return Err(EtiquetaError::Preview(format!(
                "{}: HTTP {}",
                INVALID_PREVIEW,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EtiquetaError::Preview(format!("{}: {}", INVALID_PREVIEW, e)))?;

        image::load_from_memory(&bytes)
            .map_err(|e| EtiquetaError::Preview(format!("{}: {}", INVALID_PREVIEW, e)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
