use crate::error::{Result, StatusError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DDCLIENT_LOG: &str = "/var/log/ddclient.log";
pub const DEFAULT_HEALTHCHECK_LOG: &str = "/var/log/healthcheck.log";
pub const DEFAULT_DDCLIENT_BIN: &str = "ddclient";
pub const DEFAULT_DDCLIENT_CONF: &str = "/etc/ddclient/ddclient.conf";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Locations of the two log files and of the ddclient binary.
///
/// Every key is optional in YAML; missing keys take the stock paths used by a
/// Debian-style ddclient install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ddclient_log")]
    pub ddclient_log: PathBuf,
    #[serde(default = "default_healthcheck_log")]
    pub healthcheck_log: PathBuf,
    #[serde(default = "default_ddclient_bin")]
    pub ddclient_bin: PathBuf,
    #[serde(default = "default_ddclient_conf")]
    pub ddclient_conf: PathBuf,
}

fn default_ddclient_log() -> PathBuf {
    PathBuf::from(DEFAULT_DDCLIENT_LOG)
}

fn default_healthcheck_log() -> PathBuf {
    PathBuf::from(DEFAULT_HEALTHCHECK_LOG)
}

fn default_ddclient_bin() -> PathBuf {
    PathBuf::from(DEFAULT_DDCLIENT_BIN)
}

fn default_ddclient_conf() -> PathBuf {
    PathBuf::from(DEFAULT_DDCLIENT_CONF)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ddclient_log: default_ddclient_log(),
            healthcheck_log: default_healthcheck_log(),
            ddclient_bin: default_ddclient_bin(),
            ddclient_conf: default_ddclient_conf(),
        }
    }
}

impl Config {
    /// Load a YAML config file. Keys absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| StatusError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&data).map_err(|source| StatusError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(data: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(data)
    }

    /// Argument vector for a single, non-daemon ddclient run.
    pub fn ddclient_args(&self) -> Vec<String> {
        vec![
            "-daemon=0".to_string(),
            "--file".to_string(),
            self.ddclient_conf.display().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_system_paths() {
        let config = Config::default();
        assert_eq!(config.ddclient_log, PathBuf::from("/var/log/ddclient.log"));
        assert_eq!(config.healthcheck_log, PathBuf::from("/var/log/healthcheck.log"));
        assert_eq!(config.ddclient_bin, PathBuf::from("ddclient"));
        assert_eq!(
            config.ddclient_conf,
            PathBuf::from("/etc/ddclient/ddclient.conf")
        );
    }

    #[test]
    fn ddclient_args_are_single_shot() {
        let config = Config::default();
        assert_eq!(
            config.ddclient_args(),
            vec!["-daemon=0", "--file", "/etc/ddclient/ddclient.conf"]
        );
    }

    #[test]
    fn load_partial_yaml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddwatch.yaml");
        std::fs::write(&path, "ddclient_log: /tmp/dd.log\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ddclient_log, PathBuf::from("/tmp/dd.log"));
        assert_eq!(config.healthcheck_log, PathBuf::from(DEFAULT_HEALTHCHECK_LOG));
    }

    #[test]
    fn load_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddwatch.yaml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_file_is_config_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, StatusError::ConfigRead { .. }));
    }

    #[test]
    fn load_malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddwatch.yaml");
        std::fs::write(&path, "ddclient_log: [unterminated\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, StatusError::ConfigParse { .. }));
    }
}
