//! Database module
//!
//! Pool construction and demo schema initialization. The database is the
//! sole owner of state; the service keeps nothing across requests.

pub mod init;
pub mod pool;

pub use init::init_schema;
pub use pool::connect_lazy;
