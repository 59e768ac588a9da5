use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "backdrop";

/// Returns the platform-specific configuration directory for Backdrop.
///
/// - macOS: `~/Library/Application Support/backdrop`
/// - Linux: `$XDG_CONFIG_HOME/backdrop` (defaults to `~/.config/backdrop`)
/// - Windows: `%APPDATA%\backdrop`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .expect("could not determine config directory")
        .join(APP_NAME)
}

/// Returns the platform-specific data directory for Backdrop.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .expect("could not determine data directory")
        .join(APP_NAME)
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the path to the log directory.
///
/// Located at `data_dir()/logs`.
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Returns the path to the crash report directory.
///
/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> PathBuf {
    log_dir().join("crash-reports")
}

/// Non-panicking variant of [`crash_report_dir`], safe inside a panic hook.
pub fn try_crash_report_dir() -> Option<PathBuf> {
    Some(
        dirs::data_dir()?
            .join(APP_NAME)
            .join("logs")
            .join("crash-reports"),
    )
}

/// Creates all Backdrop directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), std::io::Error> {
    fs::create_dir_all(config_dir())?;
    fs::create_dir_all(data_dir())?;
    fs::create_dir_all(log_dir())?;
    fs::create_dir_all(crash_report_dir())?;
    Ok(())
}
