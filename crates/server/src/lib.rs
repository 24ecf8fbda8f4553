//! txt2json Server - HTTP API for text-to-JSON file conversion
//!
//! One endpoint does the work: `POST /v1/convert/text-to-json` accepts
//! a `.txt` file as multipart form data, authenticates the caller with
//! HTTP Basic credentials checked against an external secret store,
//! and answers with a JSON description of the file's lines.
//!
//! # Features
//!
//! - **Authentication**: Basic credentials, constant-time comparison
//!   against secrets fetched fresh per request
//! - **Middleware**: correlation id tracking, structured logging,
//!   panic containment, compression, CORS, timeouts
//! - **Configuration**: environment variable and file-based
//! - **Error Handling**: one envelope shape for every failure, always
//!   carrying the request's correlation id
//! - **Graceful Shutdown**: SIGTERM / Ctrl+C handling
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
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /v1/convert/text-to-json` - Convert an uploaded text file

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorEnvelope, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::AppState;
