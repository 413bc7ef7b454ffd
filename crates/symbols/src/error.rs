use thiserror::Error;

pub type SymbolResult<T> = Result<T, SymbolError>;

#[derive(Debug, Error)]
pub enum SymbolError {
    /// The uploaded bytes are not a readable raster image.
    #[error("cannot decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// The payload does not fit in a QR code.
    #[error("cannot encode QR code: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("cannot write PNG: {0}")]
    PngEncode(#[source] image::ImageError),
}
