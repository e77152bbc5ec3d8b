//! Centralized configuration paths for flyout
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/flyout/`
//! - Windows: `%APPDATA%\flyout\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "flyout";

/// Base config directory for flyout
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/flyout`
///   - Else: `~/.config/flyout`
///
/// Windows:
///   - `%APPDATA%\flyout`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/flyout/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/flyout/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot locate a home or APPDATA directory for flyout logs",
        )
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
