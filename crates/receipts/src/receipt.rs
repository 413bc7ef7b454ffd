use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use scancart_cart::{CartSnapshot, LineItem};
use scancart_core::{DomainError, sum_prices};

pub type ReceiptResult<T> = Result<T, ReceiptError>;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Total(#[from] DomainError),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    Html,
    Pdf,
}

impl ReceiptFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ReceiptFormat::Html => "text/html; charset=utf-8",
            ReceiptFormat::Pdf => "application/pdf",
        }
    }
}

/// Receipt view over a cart snapshot.
///
/// The total is computed once here from the items; an empty cart is a valid
/// receipt with a zero total. Items whose total overflows cannot form a
/// receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(items: Vec<LineItem>, issued_at: DateTime<Utc>) -> ReceiptResult<Self> {
        let total = sum_prices(items.iter().map(|i| i.price))?;
        Ok(Self {
            items,
            total,
            issued_at,
        })
    }

    pub fn now(items: Vec<LineItem>) -> ReceiptResult<Self> {
        Self::new(items, Utc::now())
    }

    /// Build from a cart snapshot whose total was already checked.
    pub fn from_snapshot(snapshot: CartSnapshot, issued_at: DateTime<Utc>) -> Self {
        Self {
            items: snapshot.items,
            total: snapshot.total,
            issued_at,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use scancart_catalog::Product;

    #[test]
    fn total_is_sum_of_items() {
        let receipt = Receipt::now(vec![
            LineItem::from(Product::new("A1", "Pen", dec!(1.50))),
            LineItem::from(Product::new("B2", "Notebook", dec!(3.25))),
        ])
        .unwrap();
        assert_eq!(receipt.total(), dec!(4.75));
        assert_eq!(receipt.items().len(), 2);
    }

    #[test]
    fn empty_receipt_totals_zero() {
        let receipt = Receipt::now(Vec::new()).unwrap();
        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), Decimal::ZERO);
    }

    #[test]
    fn overflowing_items_are_rejected() {
        let big = LineItem::from(Product::new("A1", "Big", Decimal::MAX));
        let err = Receipt::now(vec![big.clone(), big]).unwrap_err();
        assert!(matches!(err, ReceiptError::Total(DomainError::TotalOverflow)));
    }

    #[test]
    fn snapshot_total_is_kept() {
        let snapshot = CartSnapshot {
            items: vec![LineItem::from(Product::new("D4", "Eraser", dec!(0.75)))],
            total: dec!(0.75),
        };
        let receipt = Receipt::from_snapshot(snapshot, Utc::now());
        assert_eq!(receipt.total(), dec!(0.75));
        assert_eq!(receipt.items()[0].name, "Eraser");
    }
}
