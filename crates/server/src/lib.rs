//! Textfix Server - HTTP API for the Textfix normalization pipeline
//!
//! Thin hosting layer: it receives a UTF-8 text string, runs the pipeline,
//! and returns the result. There is no authentication, rate limiting, or
//! persistence; the pipeline itself lives in the `normalize` crate and can be
//! used without this one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /handler/text` - `{"text": ...}` in, `{"handled_text": ...}` out
//! - `POST /handler/text/inspect` - text after every pipeline stage
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use crate::config::ServerConfig;
pub use crate::error::{ServerError, ServerResult};
pub use crate::server::{build_router, start_server};
pub use crate::state::ServerState;
