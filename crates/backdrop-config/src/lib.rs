//! Backdrop configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//! Config is read once at startup; nothing is written back at runtime.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BackdropConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use backdrop_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a commented
/// default file if none exists, and validates the result.
pub fn load_config() -> Result<BackdropConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (CLI `--config` override).
pub fn load_config_from(path: &Path) -> Result<BackdropConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
