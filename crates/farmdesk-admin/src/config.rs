//! Configuration.
//!
//! Settings come from a YAML file, then environment overrides, then CLI
//! flags (applied by the binary). Every field has a default, so a missing
//! default config file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use farmdesk_query::{DEFAULT_PAGE_SIZE, WILDCARD};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "farmdesk.yaml";
/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FARMDESK_CONFIG";
/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV: &str = "FARMDESK_PAGE_SIZE";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value '{value}' for {name}: expected a positive integer")]
    InvalidEnv { name: &'static str, value: String },

    #[error("page_size must be at least 1")]
    ZeroPageSize,
}

/// Record files for each list. Unset lists use the built-in records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub users: Option<PathBuf>,
    pub farms: Option<PathBuf>,
    pub notifications: Option<PathBuf>,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records per page (default: 8)
    pub page_size: usize,
    /// Filter value meaning "no filter" (default: "all")
    pub wildcard: String,
    pub data: DataConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            wildcard: WILDCARD.to_string(),
            data: DataConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration using the process environment.
    ///
    /// `path` wins over `FARMDESK_CONFIG`, which wins over `farmdesk.yaml`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        ConfigLoader::new(RealEnv).load(path)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

/// Abstraction over environment variables.
pub trait EnvReader {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Resolves configuration from a file and environment overrides.
pub struct ConfigLoader<R: EnvReader> {
    env: R,
}

impl<R: EnvReader> ConfigLoader<R> {
    pub fn new(env: R) -> Self {
        Self { env }
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match self.env.var(CONFIG_ENV).filter(|v| !v.is_empty()) {
                Some(p) => (PathBuf::from(p), true),
                None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            },
        };

        let mut cfg = match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Config::from_yaml(&text, &path)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Config::default(),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        self.apply_env_overrides(&mut cfg)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply FARMDESK_* environment variable overrides.
    fn apply_env_overrides(&self, cfg: &mut Config) -> Result<(), ConfigError> {
        if let Some(v) = self.env.var(PAGE_SIZE_ENV) {
            cfg.page_size = v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidEnv {
                    name: PAGE_SIZE_ENV,
                    value: v,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[derive(Default)]
    struct MockEnv(HashMap<String, String>);

    impl MockEnv {
        fn with_var(mut self, name: &str, value: &str) -> Self {
            self.0.insert(name.to_string(), value.to_string());
            self
        }
    }

    impl EnvReader for MockEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.page_size, 8);
        assert_eq!(cfg.wildcard, "all");
        assert_eq!(cfg.data, DataConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = yaml_file("page_size: 5\ndata:\n  users: users.json\n");
        let cfg = ConfigLoader::new(MockEnv::default())
            .load(Some(file.path()))
            .unwrap();

        assert_eq!(cfg.page_size, 5);
        assert_eq!(cfg.wildcard, "all");
        assert_eq!(cfg.data.users, Some(PathBuf::from("users.json")));
        assert_eq!(cfg.data.farms, None);
    }

    #[test]
    fn env_names_config_file() {
        let file = yaml_file("wildcard: any\n");
        let env = MockEnv::default().with_var(CONFIG_ENV, &file.path().display().to_string());
        let cfg = ConfigLoader::new(env).load(None).unwrap();
        assert_eq!(cfg.wildcard, "any");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::new(MockEnv::default())
            .load(Some(&dir.path().join("missing.yaml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn page_size_env_override() {
        let file = yaml_file("page_size: 5\n");
        let env = MockEnv::default().with_var(PAGE_SIZE_ENV, "12");
        let cfg = ConfigLoader::new(env).load(Some(file.path())).unwrap();
        assert_eq!(cfg.page_size, 12);
    }

    #[test]
    fn invalid_page_size_env() {
        let file = yaml_file("page_size: 5\n");
        for bad in ["0", "-3", "eight"] {
            let env = MockEnv::default().with_var(PAGE_SIZE_ENV, bad);
            let err = ConfigLoader::new(env).load(Some(file.path())).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnv { .. }), "{bad}");
        }
    }

    #[test]
    fn zero_page_size_in_file_is_rejected() {
        let file = yaml_file("page_size: 0\n");
        let err = ConfigLoader::new(MockEnv::default())
            .load(Some(file.path()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn empty_file_is_defaults() {
        let file = yaml_file("\n");
        let cfg = ConfigLoader::new(MockEnv::default())
            .load(Some(file.path()))
            .unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn malformed_yaml() {
        let file = yaml_file("page_size: [not, a, number]\n");
        let err = ConfigLoader::new(MockEnv::default())
            .load(Some(file.path()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
