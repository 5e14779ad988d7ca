//! # HTTP Server Module
//!
//! Axum server exposing the customer API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/customers/` - Create (POST) and list (GET) customers

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::{HttpConfigError, HttpServerConfig};
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
