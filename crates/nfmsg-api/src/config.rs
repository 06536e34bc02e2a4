//! # Configuration
//!
//! NF configuration loaded from a YAML file with environment overrides.
//!
//! ```yaml
//! info:
//!   version: 1.0.0
//!   description: NF message example configuration
//! configuration:
//!   nfName: NF-MSG
//!   sbi:
//!     scheme: http
//!     bindingIPv4: 127.0.0.1
//!     port: 8000
//! logger:
//!   level: info
//!   format: text
//! ```
//!
//! Every key is optional. Environment variables take precedence over the
//! file:
//!
//! - `NFMSG_BIND_ADDR` — overrides `configuration.sbi.bindingIPv4`
//! - `PORT` — overrides `configuration.sbi.port`
//! - `NFMSG_LOG_LEVEL` — overrides `logger.level`

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Only plain HTTP is served.
    #[error("unsupported SBI scheme \"{0}\" (expected \"http\")")]
    UnsupportedScheme(String),

    /// The binding address is not an IPv4 address.
    #[error("invalid SBI binding address \"{0}\" (expected an IPv4 address)")]
    InvalidBindAddress(String),

    /// The port is zero or not a number.
    #[error("invalid SBI port \"{0}\"")]
    InvalidPort(String),
}

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub info: Info,
    pub configuration: Configuration,
    pub logger: LoggerConfig,
}

/// Descriptive metadata about the configuration file itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub version: String,
    pub description: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            description: "NF message example configuration".to_string(),
        }
    }
}

/// NF-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub nf_name: String,
    pub sbi: Sbi,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            nf_name: "NF-MSG".to_string(),
            sbi: Sbi::default(),
        }
    }
}

/// Service-based interface listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sbi {
    pub scheme: String,
    #[serde(rename = "bindingIPv4")]
    pub binding_ipv4: String,
    pub port: u16,
}

impl Default for Sbi {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            binding_ipv4: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `tracing` filter directive, e.g. `info` or `nfmsg_api=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from `path` (or defaults when `None`), apply
    /// environment overrides, and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides from a variable lookup (normally the process
    /// environment).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(addr) = lookup("NFMSG_BIND_ADDR") {
            self.configuration.sbi.binding_ipv4 = addr;
        }
        if let Some(port) = lookup("PORT") {
            self.configuration.sbi.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(level) = lookup("NFMSG_LOG_LEVEL") {
            self.logger.level = level;
        }
        Ok(())
    }

    /// Check that the SBI section describes something we can bind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sbi = &self.configuration.sbi;
        if !sbi.scheme.eq_ignore_ascii_case("http") {
            return Err(ConfigError::UnsupportedScheme(sbi.scheme.clone()));
        }
        if sbi.port == 0 {
            return Err(ConfigError::InvalidPort(sbi.port.to_string()));
        }
        self.bind_ip()?;
        Ok(())
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::from((self.bind_ip()?, self.configuration.sbi.port)))
    }

    fn bind_ip(&self) -> Result<Ipv4Addr, ConfigError> {
        let raw = &self.configuration.sbi.binding_ipv4;
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(raw.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE: &str = r#"
info:
  version: 1.0.0
  description: test config
configuration:
  nfName: ANYA
  sbi:
    scheme: http
    bindingIPv4: 127.0.0.1
    port: 8001
logger:
  level: debug
  format: json
"#;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_full_document() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.info.description, "test config");
        assert_eq!(config.configuration.nf_name, "ANYA");
        assert_eq!(config.configuration.sbi.binding_ipv4, "127.0.0.1");
        assert_eq!(config.configuration.sbi.port, 8001);
        assert_eq!(config.logger.level, "debug");
        assert_eq!(config.logger.format, LogFormat::Json);
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:8001".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_yaml("configuration:\n  sbi:\n    port: 9000\n").unwrap();
        assert_eq!(config.configuration.sbi.port, 9000);
        assert_eq!(config.configuration.sbi.scheme, "http");
        assert_eq!(config.configuration.sbi.binding_ipv4, "0.0.0.0");
        assert_eq!(config.logger, LoggerConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = Config::from_yaml("configuration: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::from_yaml(SAMPLE).unwrap();
        config
            .apply_overrides(env(&[
                ("PORT", "9090"),
                ("NFMSG_BIND_ADDR", "10.0.0.1"),
                ("NFMSG_LOG_LEVEL", "warn"),
            ]))
            .unwrap();
        assert_eq!(config.configuration.sbi.port, 9090);
        assert_eq!(config.configuration.sbi.binding_ipv4, "10.0.0.1");
        assert_eq!(config.logger.level, "warn");
    }

    #[test]
    fn non_numeric_port_override_rejected() {
        let mut config = Config::default();
        let err = config.apply_overrides(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn https_scheme_rejected() {
        let mut config = Config::default();
        config.configuration.sbi.scheme = "https".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "https"
        ));
    }

    #[test]
    fn zero_port_rejected() {
        let mut config = Config::default();
        config.configuration.sbi.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn hostname_binding_rejected() {
        let mut config = Config::default();
        config.configuration.sbi.binding_ipv4 = "localhost".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBindAddress(_))
        ));
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.configuration.sbi.port, 8001);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}
