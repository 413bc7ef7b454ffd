use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::{SymbolError, SymbolResult};

/// Smallest edge of the rendered image, in pixels (quiet zone included).
const DEFAULT_MIN_DIMENSION: u32 = 290;

/// Renders text as a black-on-white QR code PNG.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    min_dimension: u32,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
        }
    }
}

impl QrEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_dimension(mut self, px: u32) -> Self {
        self.min_dimension = px;
        self
    }

    pub fn encode_png(&self, text: &str) -> SymbolResult<Vec<u8>> {
        let code = QrCode::new(text.as_bytes())?;
        let img = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)
            .map_err(SymbolError::PngEncode)?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];

    #[test]
    fn output_is_png() {
        let png = QrEncoder::new().encode_png("https://example.test/p/A1").unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn respects_min_dimension() {
        let png = QrEncoder::new().with_min_dimension(400).encode_png("A1").unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() >= 400);
        assert!(img.height() >= 400);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let huge = "x".repeat(8000);
        assert!(matches!(
            QrEncoder::new().encode_png(&huge),
            Err(SymbolError::QrEncode(_))
        ));
    }
}
