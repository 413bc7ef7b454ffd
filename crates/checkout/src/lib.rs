//! Checkout workflow: scan → cart → receipt, plus QR issuance.
//!
//! ```text
//! catalog ──▶ ScanProcessor ──▶ CartStore ──▶ ReceiptRenderer
//!    └──────▶ QrIssuer
//! ```
//!
//! Services are generic over the catalog and decoder seams so tests can run
//! them against in-memory fixtures. None of them does any HTTP.

pub mod error;
pub mod qr;
pub mod receipt;
pub mod scan;

pub use error::{CheckoutError, CheckoutResult};
pub use qr::{IssuedQr, QrIssuer};
pub use receipt::ReceiptRenderer;
pub use scan::{ScanOutcome, ScanProcessor};
