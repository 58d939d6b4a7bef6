//! Common infrastructure for the FleetKeeper site runtime

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{FleetKeeperError, Result};
pub use logging::{init_default_logging, init_logging, init_test_logging, LoggingConfig};
