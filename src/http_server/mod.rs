//! HTTP server module
//!
//! Axum server, per-route handlers, and the shared request state.

pub mod config;
pub mod item_routes;
pub mod meta_routes;
pub mod server;
pub mod table_routes;

pub use config::HttpServerConfig;
pub use server::{AppState, HttpServer};
