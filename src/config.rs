// Configuration de l'application (fenêtre et journalisation)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const APP_DIR: &str = "themed-todo";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Write logs to a daily-rolling file in this directory instead of stdout.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            log_filter: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// `<config_dir>/themed-todo/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.window_width) && ok(self.window_height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("themed-todo-{}-{}-{}", name, std::process::id(), nanos))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        assert_eq!(AppConfig::load_from_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let config = AppConfig {
            window_width: 800.0,
            window_height: 450.0,
            log_filter: "themed_todo=debug".to_string(),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(AppConfig::load_from_file(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "window_width": 640 }"#).unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.window_height, 600.0);
        assert_eq!(config.log_filter, "info");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let config = AppConfig {
            window_height: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindowSize { .. })
        ));
    }
}
