//! Full configuration validation.
//!
//! Validates window size ranges, the startup background descriptor, and
//! wallpaper catalog entries. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod background;
mod helpers;
mod wallpapers;
mod window;


use crate::schema::BackdropConfig;
use backdrop_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BackdropConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    background::validate_background(&mut errors, config);
    wallpapers::validate_wallpapers(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
