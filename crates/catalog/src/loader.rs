use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

const REQUIRED_COLUMNS: [&str; 3] = ["id", "name", "price"];

/// Source of the product table.
///
/// Implementations must return the full table on every call.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> CatalogResult<Vec<Product>>;

    /// Look up a product by exact id. The first matching row wins.
    fn find(&self, id: &str) -> CatalogResult<Option<Product>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }
}

impl<S> CatalogSource for Arc<S>
where
    S: CatalogSource + ?Sized,
{
    fn load(&self) -> CatalogResult<Vec<Product>> {
        (**self).load()
    }

    fn find(&self, id: &str) -> CatalogResult<Option<Product>> {
        (**self).find(id)
    }
}

/// Catalog backed by a CSV file on disk, re-read on every call.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

/// Raw CSV row. Every column is text; price is parsed afterwards so a bad
/// cell can be reported with its line number.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    price: String,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CatalogResult<Vec<Product>> {
        let file = File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        let mut products = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let row: CatalogRow = record.deserialize(Some(&headers))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let price = parse_price(&row.price).ok_or_else(|| CatalogError::InvalidPrice {
                line,
                value: row.price.clone(),
            })?;
            products.push(Product::new(row.id, row.name, price));
        }

        Ok(products)
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> CatalogResult<Vec<Product>> {
        tracing::info!(path = %self.path.display(), "loading products from catalog file");
        let products = self.read()?;
        tracing::debug!(rows = products.len(), "catalog loaded");
        Ok(products)
    }
}

/// Accepts plain decimals (`1.50`) and scientific notation (`1.5e2`).
fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Fixed product table for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}
