//! Service configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use scancart_checkout::qr::DEFAULT_PRODUCT_URL_BASE;

pub const CATALOG_PATH_ENV: &str = "SCANCART_CATALOG_PATH";
pub const BIND_ADDR_ENV: &str = "SCANCART_BIND_ADDR";
pub const PRODUCT_URL_BASE_ENV: &str = "SCANCART_PRODUCT_URL_BASE";
pub const MAX_UPLOAD_BYTES_ENV: &str = "SCANCART_MAX_UPLOAD_BYTES";

const DEFAULT_CATALOG_PATH: &str = "products.csv";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(std::net::SocketAddrV4::new(
    std::net::Ipv4Addr::UNSPECIFIED,
    8080,
));
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// CSV catalog, re-read on every request that needs it.
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Prefix of the product page URL encoded in QR codes.
    pub product_url_base: String,
    /// Request body limit for `/scan` uploads.
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            bind_addr: DEFAULT_BIND_ADDR,
            product_url_base: DEFAULT_PRODUCT_URL_BASE.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get(CATALOG_PATH_ENV) {
            config.catalog_path = PathBuf::from(v);
        }

        if let Some(v) = get(BIND_ADDR_ENV) {
            config.bind_addr = v
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::invalid(BIND_ADDR_ENV, &v, e.to_string()))?;
        }

        if let Some(v) = get(PRODUCT_URL_BASE_ENV) {
            let base = v.trim().trim_end_matches('/');
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::invalid(PRODUCT_URL_BASE_ENV, &v, "must be an http(s) URL"));
            }
            config.product_url_base = base.to_string();
        }

        if let Some(v) = get(MAX_UPLOAD_BYTES_ENV) {
            config.max_upload_bytes = match v.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(MAX_UPLOAD_BYTES_ENV, &v, "must be greater than zero"));
                }
                Ok(n) => n,
                Err(e) => return Err(ConfigError::invalid(MAX_UPLOAD_BYTES_ENV, &v, e.to_string())),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("products.csv"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.product_url_base,
            "https://q-rcodeshopping.vercel.app/scan_product"
        );
    }

    #[test]
    fn reads_every_key() {
        let config = ApiConfig::from_lookup(lookup(&[
            (CATALOG_PATH_ENV, "/srv/catalog.csv"),
            (BIND_ADDR_ENV, "127.0.0.1:9000"),
            (PRODUCT_URL_BASE_ENV, "http://shop.local/p/"),
            (MAX_UPLOAD_BYTES_ENV, "1024"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.csv"));
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.product_url_base, "http://shop.local/p");
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[(CATALOG_PATH_ENV, "  ")])).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("products.csv"));
    }

    #[test]
    fn rejects_bad_values() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: BIND_ADDR_ENV, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(PRODUCT_URL_BASE_ENV, "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: PRODUCT_URL_BASE_ENV, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(MAX_UPLOAD_BYTES_ENV, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: MAX_UPLOAD_BYTES_ENV, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(MAX_UPLOAD_BYTES_ENV, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: MAX_UPLOAD_BYTES_ENV, .. }));
    }
}
