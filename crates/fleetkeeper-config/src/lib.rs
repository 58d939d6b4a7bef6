//! Configuration management for the FleetKeeper site runtime
//!
//! Configuration is read from a YAML file (`fleetkeeper.yaml` by default),
//! merged with `FLEETKEEPER_*` / `LOG_*` environment variable overrides, and
//! validated before use.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{I18nSettings, LoggingSettings, SiteConfig, StorageSettings};
