//! # Database Access
//!
//! Storage accessor for the `customers` table. Connections are built on
//! demand from an explicit [`DbConfig`] and handed to the caller; there is
//! no pool and no reuse across requests.

pub mod config;
pub mod connection;
pub mod errors;

pub use config::DbConfig;
pub use connection::connect;
pub use errors::{DbError, DbResult};
