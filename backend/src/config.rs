use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
    #[error("PKG_NAME may only contain letters, digits, '_' and '-', got {0:?}")]
    InvalidPkgName(String),
}

/// The package name ends up verbatim in a module import path.
fn valid_pkg_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the built `pkg/` of the frontend.
    pub static_files_path: Option<String>,
    /// JSON list of blocks served at `/`. A built-in sample is used if unset.
    pub demo_page_path: Option<String>,
    /// Base name of the frontend's generated JS module.
    pub pkg_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let pkg_name = env::var("PKG_NAME").unwrap_or_else(|_| "accordion_frontend".to_string());
        if !valid_pkg_name(&pkg_name) {
            return Err(ConfigError::InvalidPkgName(pkg_name));
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port.parse().map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            static_files_path: env::var("STATIC_FILES_PATH").ok(),
            demo_page_path: env::var("DEMO_PAGE_PATH").ok(),
            pkg_name,
        })
    }
}
