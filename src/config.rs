//! Service configuration from the environment (`.env` is loaded by `main`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::pricing::{CatalogError, PricingCatalog};

/// Configuration could not be read from the environment
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {name}: '{value}'")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// JSON catalog replacing the built-in pricing
    pub catalog_path: Option<PathBuf>,
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            catalog_path: None,
            cors_allow_any: true,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `PRICING_CATALOG_PATH` and `CORS_ALLOW_ANY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError { name: "HOST", value })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError { name: "PORT", value })?,
            None => defaults.port,
        };

        let catalog_path = lookup("PRICING_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let cors_allow_any = match lookup("CORS_ALLOW_ANY") {
            Some(value) => parse_bool(&value).ok_or(ConfigError {
                name: "CORS_ALLOW_ANY",
                value,
            })?,
            None => defaults.cors_allow_any,
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            cors_allow_any,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured catalog, or the built-in one, and validate it
    pub fn load_catalog(&self) -> Result<PricingCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => PricingCatalog::load(path),
            None => {
                let catalog = PricingCatalog::standard();
                catalog.validate()?;
                Ok(catalog)
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
