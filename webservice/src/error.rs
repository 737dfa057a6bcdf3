//! Error types for the web service

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("HTTP server error: {0}")]
    HttpServer(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
