//! Schema module
//!
//! Live catalog introspection and identifier validation. Nothing here is
//! cached: descriptors are discovered from `information_schema` on every
//! request, so only names present in the catalog at query time are valid.

pub mod introspect;
pub mod types;
pub mod validator;

pub use introspect::{describe_table, list_columns, list_tables, table_exists};
pub use types::{ColumnDescriptor, TableDescriptor};
pub use validator::{is_allowed_column, is_allowed_table};
