use image::GrayImage;
use rxing::BarcodeFormat;

use crate::error::{SymbolError, SymbolResult};

/// Extracts symbol payloads from an encoded image (PNG, JPEG).
pub trait SymbolDecoder: Send + Sync {
    /// Returns payloads in detection order. An image without symbols yields an
    /// empty list, not an error.
    fn decode(&self, image_bytes: &[u8]) -> SymbolResult<Vec<String>>;
}

/// QR code reader backed by `rqrr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrDecoder;

impl QrDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode every QR grid found in an already-loaded grayscale image.
    ///
    /// Grids are read top to bottom, then left to right.
    pub fn decode_luma(&self, luma: GrayImage) -> Vec<String> {
        let mut prepared = rqrr::PreparedImage::prepare(luma);
        let mut grids = prepared.detect_grids();
        grids.sort_by_key(|grid| {
            let top = grid.bounds.iter().map(|p| p.y).min().unwrap_or_default();
            let left = grid.bounds.iter().map(|p| p.x).min().unwrap_or_default();
            (top, left)
        });

        let mut payloads = Vec::with_capacity(grids.len());
        for (index, grid) in grids.into_iter().enumerate() {
            match grid.decode() {
                Ok((_meta, content)) => payloads.push(content),
                Err(e) => tracing::debug!(grid = index, error = %e, "skipping unreadable QR grid"),
            }
        }
        payloads
    }
}

/// Reader for every non-QR symbology `rxing` knows: EAN, UPC, Code 128,
/// Code 39, ITF, Data Matrix, PDF417 and friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeDecoder;

impl BarcodeDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Payloads in the order `rxing` reports them. QR results are left to
    /// [`QrDecoder`].
    pub fn decode_luma(&self, luma: &GrayImage) -> Vec<String> {
        let (width, height) = luma.dimensions();
        match rxing::helpers::detect_multiple_in_luma(luma.as_raw().clone(), width, height) {
            Ok(results) => results
                .into_iter()
                .filter(|r| *r.getBarcodeFormat() != BarcodeFormat::QR_CODE)
                .map(|r| r.getText().to_string())
                .collect(),
            // rxing reports "nothing found" as an error.
            Err(e) => {
                tracing::debug!(error = %e, "no barcode found");
                Vec::new()
            }
        }
    }
}

/// Reads QR codes and barcodes out of one image.
///
/// QR payloads come first in reading order, followed by barcode payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolReader {
    qr: QrDecoder,
    barcodes: BarcodeDecoder,
}

impl SymbolReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_luma(&self, luma: GrayImage) -> Vec<String> {
        let barcodes = self.barcodes.decode_luma(&luma);
        let mut payloads = self.qr.decode_luma(luma);
        payloads.extend(barcodes);
        payloads
    }
}

impl SymbolDecoder for SymbolReader {
    fn decode(&self, image_bytes: &[u8]) -> SymbolResult<Vec<String>> {
        let img = image::load_from_memory(image_bytes).map_err(SymbolError::ImageDecode)?;
        Ok(self.decode_luma(img.to_luma8()))
    }
}
