//! Configuration management for framescan.
//!
//! Settings are layered, lowest precedence first: built-in defaults, a YAML
//! configuration file, color environment variables, then command-line flags.
//!
//! The configuration file is looked up in this order:
//! 1. the path given with `--config`
//! 2. the path in `FRAMESCAN_CONFIG`
//! 3. `.framescan.yaml` in the working directory, if it exists
//!
//! An explicitly named file that cannot be read is an error.

use crate::error::{Error, Result};
use crate::output::OutputMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".framescan.yaml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "FRAMESCAN_CONFIG";

/// Configuration file structure for framescan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FramescanConfig {
    /// Output format (`text` or `json`)
    pub format: OutputMode,

    /// Whether text output may use colors
    pub color: bool,

    /// Stop after this many frames
    pub limit: Option<usize>,

    /// Report skipped and unrecognized lines on stderr
    pub report_skipped: bool,

    /// Fail when a line starting with `at` is not a recognized frame
    pub strict: bool,
}

impl Default for FramescanConfig {
    fn default() -> Self {
        Self {
            format: OutputMode::Text,
            color: true,
            limit: None,
            report_skipped: false,
            strict: false,
        }
    }
}

impl FramescanConfig {
    /// Parse configuration from YAML text. Blank text yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::parse(content).map_err(Error::Config)
    }

    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if config.limit == Some(0) {
            return Err("limit must be at least 1".to_string());
        }
        Ok(config)
    }

    /// Find and load the configuration for a run in `dir`.
    pub async fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let from_env = env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
            return Self::load(&path).await;
        }

        let local = dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&local).await? {
            return Self::load(&local).await;
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn blank_yaml_is_default() {
        assert_eq!(FramescanConfig::from_yaml("").unwrap(), FramescanConfig::default());
        assert_eq!(FramescanConfig::from_yaml("\n  \n").unwrap(), FramescanConfig::default());
    }

    #[test]
    fn parses_every_key() {
        let config = FramescanConfig::from_yaml(
            "format: json\ncolor: false\nlimit: 5\nreport-skipped: true\nstrict: true\n",
        )
        .unwrap();

        assert_eq!(
            config,
            FramescanConfig {
                format: OutputMode::Json,
                color: false,
                limit: Some(5),
                report_skipped: true,
                strict: true,
            }
        );
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = FramescanConfig::from_yaml("strict: true\n").unwrap();
        assert!(config.strict);
        assert!(config.color);
        assert_eq!(config.format, OutputMode::Text);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FramescanConfig::from_yaml("colour: false\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(FramescanConfig::from_yaml("limit: 0\n").is_err());
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FramescanConfig::load(&temp.path().join("nope.yaml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[tokio::test]
    async fn discover_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "format: text\n").unwrap();
        let explicit = temp.path().join("custom.yaml");
        std::fs::write(&explicit, "format: json\n").unwrap();

        let config = FramescanConfig::discover(Some(&explicit), temp.path())
            .await
            .unwrap();
        assert_eq!(config.format, OutputMode::Json);
    }

    #[tokio::test]
    async fn discover_reads_local_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "limit: 3\n").unwrap();

        let config = FramescanConfig::discover(None, temp.path()).await.unwrap();
        assert_eq!(config.limit, Some(3));
    }
}
