//! Path utilities for casinobot.
//!
//! A `config.toml` in the working directory wins; otherwise data lives
//! under `~/.casinobot/`.

use std::path::PathBuf;

/// Returns the casinobot home directory (`~/.casinobot/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".casinobot")
}

/// Returns the default config file path.
pub fn default_config() -> PathBuf {
    let local = PathBuf::from("config.toml");
    if local.exists() {
        return local;
    }
    home_dir().join("config.toml")
}
