use anyhow::Context;
use clap::Args;
use ddwatch_core::config::Config;
use std::path::{Path, PathBuf};

/// Per-key overrides layered on top of the config file.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// ddclient log to read and append to
    #[arg(long, global = true, env = "DDWATCH_DDCLIENT_LOG")]
    pub ddclient_log: Option<PathBuf>,

    /// Health-check log to read
    #[arg(long, global = true, env = "DDWATCH_HEALTHCHECK_LOG")]
    pub healthcheck_log: Option<PathBuf>,

    /// ddclient executable
    #[arg(long, global = true, env = "DDWATCH_DDCLIENT_BIN")]
    pub ddclient_bin: Option<PathBuf>,

    /// ddclient configuration file passed via --file
    #[arg(long, global = true, env = "DDWATCH_DDCLIENT_CONF")]
    pub ddclient_conf: Option<PathBuf>,
}

/// Resolve the effective config.
///
/// Priority (highest first):
/// 1. Individual flags / env vars
/// 2. `--config` file
/// 3. Built-in defaults
pub fn resolve(file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Config> {
    let mut config = match file {
        Some(path) => Config::load(path).context("failed to load config")?,
        None => Config::default(),
    };

    if let Some(p) = &overrides.ddclient_log {
        config.ddclient_log = p.clone();
    }
    if let Some(p) = &overrides.healthcheck_log {
        config.healthcheck_log = p.clone();
    }
    if let Some(p) = &overrides.ddclient_bin {
        config.ddclient_bin = p.clone();
    }
    if let Some(p) = &overrides.ddclient_conf {
        config.ddclient_conf = p.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_no_overrides_is_default() {
        let config = resolve(None, &Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flag_beats_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddwatch.yaml");
        std::fs::write(
            &path,
            "ddclient_log: /from/file.log\nhealthcheck_log: /from/file-hc.log\n",
        )
        .unwrap();

        let overrides = Overrides {
            ddclient_log: Some(PathBuf::from("/from/flag.log")),
            ..Overrides::default()
        };
        let config = resolve(Some(&path), &overrides).unwrap();
        assert_eq!(config.ddclient_log, PathBuf::from("/from/flag.log"));
        assert_eq!(config.healthcheck_log, PathBuf::from("/from/file-hc.log"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve(Some(&dir.path().join("absent.yaml")), &Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }
}
