//! jobmatch server - HTTP REST API for skill extraction and match scoring
//!
//! This crate exposes the jobmatch engine over a small REST surface:
//!
//! - **Skill extraction**: scan free text against a fixed vocabulary
//! - **Two-list matching**: Jaccard similarity between skill lists
//! - **Ranked listings**: per-job match scores for one candidate, sorted
//! - **Health**: liveness/readiness probes and a basic metrics endpoint
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with rate limiting
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Error responses with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
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
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Basic metrics
//! - `POST /ai/extract` - Extract skills (curated vocabulary, whole-word)
//! - `POST /ai/match` - Jaccard score between two skill lists
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /users/extract-skills` - Extract skills (broad vocabulary, substring)
//! - `POST /jobs/match-scores` - Ranked job listing for one candidate

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
