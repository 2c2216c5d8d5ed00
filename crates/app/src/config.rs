//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use domain::AdminCredentials;

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `WATERBAR_DATA_DIR` — collection store directory (default: `"data"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
///
/// The privileged credential pair is compiled-in configuration; it is
/// carried here so the directory receives it by injection rather than
/// reaching for a global.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub admin: AdminCredentials,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("WATERBAR_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            admin: AdminCredentials::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            admin: AdminCredentials::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.admin.email, "admin@shuiba.local");
    }
}
