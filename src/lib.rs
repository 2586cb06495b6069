//! pgbridge - a stateless HTTP/JSON gateway over PostgreSQL tables
//!
//! Generic endpoints to list tables, introspect columns, fetch and search
//! rows, plus CRUD on a demo `your_table` entity.

pub mod cli;
pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod http_server;
pub mod query;
pub mod schema;
