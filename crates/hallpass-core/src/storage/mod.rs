mod config;
mod progress;

pub use config::{Config, TickerConfig};
pub use progress::ProgressStore;

use std::path::PathBuf;

/// Returns the Hallpass data directory, creating it if needed.
///
/// `HALLPASS_DATA_DIR` wins when set. Otherwise `~/.config/hallpass`, or
/// `~/.config/hallpass-dev` when `HALLPASS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("HALLPASS_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HALLPASS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("hallpass-dev")
            } else {
                base_dir.join("hallpass")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
