//! Query module
//!
//! Construction of the SQL text executed by the handlers.

pub mod builder;
