use rust_decimal::Decimal;
use serde::Serialize;

use scancart_cart::LineItem;
use scancart_checkout::ScanOutcome;

// -------------------------
// Response DTOs
// -------------------------

/// `POST /scan` response: the whole cart after the scan.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Items appended by this scan.
    pub added: usize,
    /// Decoded symbols with no catalog match.
    pub unmatched: usize,
}

impl From<ScanOutcome> for ScanResponse {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            added: outcome.added.len(),
            unmatched: outcome.unmatched.len(),
            items: outcome.cart,
            total: outcome.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
