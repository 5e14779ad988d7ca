//! cms-api - a minimal customer management HTTP service
//!
//! Two operations over a `customers` table (create, list), each served by a
//! fresh PostgreSQL connection. No pooling, no caching, no shared state.

pub mod customer;
pub mod db;
pub mod http_server;
