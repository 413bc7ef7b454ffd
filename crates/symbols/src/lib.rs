//! Machine-readable symbols: reading payloads out of uploaded images and
//! rendering text as QR code images.
//!
//! QR recognition is delegated to `rqrr`, barcode recognition to `rxing`, and
//! QR encoding to `qrcode`; this crate only adapts their inputs and outputs.

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{BarcodeDecoder, QrDecoder, SymbolDecoder, SymbolReader};
pub use encode::QrEncoder;
pub use error::{SymbolError, SymbolResult};
