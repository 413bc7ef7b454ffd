use std::sync::Arc;

use rust_decimal::Decimal;

use scancart_cart::{CartStore, LineItem};
use scancart_catalog::CatalogSource;
use scancart_symbols::SymbolDecoder;

use crate::error::CheckoutResult;

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Items appended by this scan, in detection order.
    pub added: Vec<LineItem>,
    /// Payloads with no catalog match. They are not an error.
    pub unmatched: Vec<String>,
    /// The whole cart right after this scan's items were appended.
    pub cart: Vec<LineItem>,
    /// Total over `cart`.
    pub total: Decimal,
}

/// Turns uploaded images into cart line items.
pub struct ScanProcessor<C, D> {
    catalog: C,
    decoder: D,
    cart: Arc<CartStore>,
}

impl<C, D> ScanProcessor<C, D>
where
    C: CatalogSource,
    D: SymbolDecoder,
{
    pub fn new(catalog: C, decoder: D, cart: Arc<CartStore>) -> Self {
        Self {
            catalog,
            decoder,
            cart,
        }
    }

    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    /// Decode every symbol in the image and append the catalog matches.
    ///
    /// Nothing is appended if decoding or the catalog load fails, or if the
    /// matched prices would overflow the cart total.
    pub fn process(&self, image_bytes: &[u8]) -> CheckoutResult<ScanOutcome> {
        let payloads = self.decoder.decode(image_bytes)?;
        tracing::debug!(symbols = payloads.len(), "symbols decoded");

        let products = self.catalog.load()?;

        let mut added = Vec::new();
        let mut unmatched = Vec::new();
        for payload in payloads {
            match products.iter().find(|p| p.id == payload.as_str()) {
                Some(product) => {
                    tracing::info!(product_id = %product.id, name = %product.name, "scanned product");
                    added.push(LineItem::from(product));
                }
                None => {
                    tracing::debug!(payload = %payload, "no catalog match for symbol");
                    unmatched.push(payload);
                }
            }
        }

        let snapshot = self.cart.extend(added.iter().cloned()).inspect_err(|err| {
            tracing::warn!(added = added.len(), error = %err, "scan rejected, cart unchanged");
        })?;
        let (cart, total) = (snapshot.items, snapshot.total);
        tracing::info!(
            added = added.len(),
            unmatched = unmatched.len(),
            total = %total,
            "scan processed"
        );

        Ok(ScanOutcome {
            added,
            unmatched,
            cart,
            total,
        })
    }
}
