use std::sync::Arc;

use scancart_cart::CartStore;
use scancart_catalog::{CatalogSource, CsvCatalog};
use scancart_checkout::{QrIssuer, ReceiptRenderer, ScanProcessor};
use scancart_symbols::SymbolReader;

use crate::config::ApiConfig;

pub type SharedCatalog = Arc<dyn CatalogSource>;

/// Process-wide state shared by all handlers.
///
/// Created once at startup; the cart lives exactly as long as the router.
pub struct AppServices {
    pub cart: Arc<CartStore>,
    pub scanner: ScanProcessor<SharedCatalog, SymbolReader>,
    pub qr: QrIssuer<SharedCatalog>,
    pub receipts: ReceiptRenderer,
}

impl AppServices {
    pub fn new(catalog: SharedCatalog, product_url_base: &str) -> Self {
        let cart = Arc::new(CartStore::new());
        Self {
            scanner: ScanProcessor::new(catalog.clone(), SymbolReader::new(), cart.clone()),
            qr: QrIssuer::new(catalog, product_url_base),
            receipts: ReceiptRenderer::new(cart.clone()),
            cart,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let catalog: SharedCatalog = Arc::new(CsvCatalog::new(config.catalog_path.clone()));
        Self::new(catalog, &config.product_url_base)
    }
}
