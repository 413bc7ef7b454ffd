use std::sync::Arc;

use scancart_cart::CartStore;
use chrono::Utc;
use scancart_receipts::{Receipt, ReceiptFormat};

use crate::error::CheckoutResult;

/// Renders the current cart as a receipt document.
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    cart: Arc<CartStore>,
}

impl ReceiptRenderer {
    pub fn new(cart: Arc<CartStore>) -> Self {
        Self { cart }
    }

    /// Receipt view over a snapshot of the cart taken now.
    pub fn receipt(&self) -> CheckoutResult<Receipt> {
        let snapshot = self.cart.snapshot_with_total()?;
        Ok(Receipt::from_snapshot(snapshot, Utc::now()))
    }

    pub fn render(&self, format: ReceiptFormat) -> CheckoutResult<Vec<u8>> {
        let receipt = self.receipt()?;
        tracing::info!(
            ?format,
            items = receipt.items().len(),
            total = %receipt.total(),
            "generating receipt"
        );
        Ok(scancart_receipts::render(&receipt, format)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use scancart_cart::LineItem;
    use scancart_catalog::Product;

    #[test]
    fn empty_cart_renders_both_formats() {
        let renderer = ReceiptRenderer::new(Arc::new(CartStore::new()));
        assert_eq!(renderer.receipt().unwrap().total(), Decimal::ZERO);

        let html = String::from_utf8(renderer.render(ReceiptFormat::Html).unwrap()).unwrap();
        assert!(html.contains("Total: $0.00"));

        let pdf = renderer.render(ReceiptFormat::Pdf).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn receipt_reflects_cart_contents() {
        let cart = Arc::new(CartStore::new());
        cart.append(LineItem::from(Product::new("A1", "Pen", dec!(1.50)))).unwrap();
        let renderer = ReceiptRenderer::new(cart.clone());

        let receipt = renderer.receipt().unwrap();
        assert_eq!(receipt.items().len(), 1);
        assert_eq!(receipt.total(), dec!(1.50));

        cart.clear();
        assert!(renderer.receipt().unwrap().is_empty());
    }

    #[test]
    fn cart_at_decimal_max_still_renders() {
        let cart = Arc::new(CartStore::new());
        cart.append(LineItem::from(Product::new("A1", "Big", Decimal::MAX))).unwrap();
        let renderer = ReceiptRenderer::new(cart);

        let html = String::from_utf8(renderer.render(ReceiptFormat::Html).unwrap()).unwrap();
        assert!(html.contains("Big"));
        assert!(renderer.render(ReceiptFormat::Pdf).unwrap().starts_with(b"%PDF"));
    }
}
