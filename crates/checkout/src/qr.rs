use scancart_catalog::CatalogSource;
use scancart_core::ProductId;
use scancart_symbols::QrEncoder;

use crate::error::{CheckoutError, CheckoutResult};

/// Default landing page prefix encoded in product QR codes.
pub const DEFAULT_PRODUCT_URL_BASE: &str = "https://q-rcodeshopping.vercel.app/scan_product";

/// A rendered product QR code.
#[derive(Debug, Clone)]
pub struct IssuedQr {
    pub product_id: ProductId,
    pub url: String,
    pub png: Vec<u8>,
}

/// Issues QR codes for catalog products.
pub struct QrIssuer<C> {
    catalog: C,
    encoder: QrEncoder,
    url_base: String,
}

impl<C> QrIssuer<C>
where
    C: CatalogSource,
{
    pub fn new(catalog: C, url_base: impl Into<String>) -> Self {
        let url_base = url_base.into().trim_end_matches('/').to_string();
        Self {
            catalog,
            encoder: QrEncoder::new(),
            url_base,
        }
    }

    pub fn with_encoder(mut self, encoder: QrEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Landing page URL for a product. The id is embedded verbatim.
    pub fn product_url(&self, product_id: &str) -> String {
        format!("{}/{}", self.url_base, product_id)
    }

    /// Render the QR code for a product that exists in the catalog.
    ///
    /// A blank id is rejected before the catalog is read.
    pub fn issue(&self, product_id: &str) -> CheckoutResult<IssuedQr> {
        tracing::info!(product_id, "generating QR code");
        let id: ProductId = product_id.parse()?;

        let product = match self.catalog.find(id.as_str())? {
            Some(p) => p,
            None => {
                tracing::warn!(product_id, "product not found");
                return Err(CheckoutError::ProductNotFound(id));
            }
        };

        let url = self.product_url(product.id.as_str());
        let png = self.encoder.encode_png(&url)?;

        tracing::info!(product_id, bytes = png.len(), "QR code generated");
        Ok(IssuedQr {
            product_id: product.id,
            url,
            png,
        })
    }
}
