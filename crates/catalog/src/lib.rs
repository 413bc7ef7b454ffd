//! Product catalog.
//!
//! The catalog is a read-only CSV file (`id,name,price`). It is re-read on
//! every call; there is no cache to invalidate.

pub mod error;
pub mod loader;
pub mod product;

pub use error::{CatalogError, CatalogResult};
pub use loader::{CatalogSource, CsvCatalog, InMemoryCatalog};
pub use product::Product;
