//! # Webservice
//!
//! A minimal HTTP service answering liveness probes.
//!
//! ## Routes
//!
//! *   `GET /health` returns `200 OK` with the JSON body `{"status":"ok"}`.
//!
//! The same check is available in-process through [`health_check`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use webservice::{ServiceConfig, start_server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig {
//!         bind_addr: "127.0.0.1:8000".parse()?,
//!         ..ServiceConfig::default()
//!     };
//!
//!     // Runs until Ctrl-C
//!     start_server(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod health;
pub mod server;

pub use config::{ConfigOverrides, ServiceConfig};
pub use error::{Result, ServiceError};
pub use health::{HealthStatus, Status, health_check};
pub use server::{BOUND_PORT_MARKER, router, serve, start_server, start_server_with_shutdown};
