use thiserror::Error;

use scancart_catalog::CatalogError;
use scancart_core::{DomainError, ProductId};
use scancart_receipts::ReceiptError;
use scancart_symbols::SymbolError;

pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The catalog could not be read; fatal for the current request.
    #[error(transparent)]
    CatalogUnavailable(#[from] CatalogError),

    /// The uploaded bytes are not a readable image.
    #[error("{0}")]
    ImageDecode(#[source] SymbolError),

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The requested product id is blank.
    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    /// The cart total would leave the decimal range; the cart is unchanged.
    #[error("cart total exceeds the representable range")]
    TotalOverflow,

    /// QR or PDF output could not be produced.
    #[error("render failed: {0}")]
    Render(String),
}

impl From<SymbolError> for CheckoutError {
    fn from(err: SymbolError) -> Self {
        match err {
            SymbolError::ImageDecode(_) => CheckoutError::ImageDecode(err),
            other => CheckoutError::Render(other.to_string()),
        }
    }
}

impl From<DomainError> for CheckoutError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(msg) => CheckoutError::InvalidProductId(msg),
            DomainError::TotalOverflow => CheckoutError::TotalOverflow,
        }
    }
}

impl From<ReceiptError> for CheckoutError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::Total(inner) => inner.into(),
            other => CheckoutError::Render(other.to_string()),
        }
    }
}
