//! CLI configuration management
//!
//! Settings come from, highest priority first: command-line arguments,
//! `CASHRISK_*` environment variables, a TOML file and built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cashrisk_core::Densification;
use cashrisk_risk::RiskThresholds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CASHRISK_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Simulation horizon in days
    pub horizon_days: usize,
    /// Number of Monte Carlo paths
    pub num_paths: usize,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
    /// Gap handling in the aggregated series
    pub densification: Densification,
    /// Output format
    pub output_format: OutputFormat,
    /// Overdraft probability that raises an alert
    pub overdraft_alert: f64,
    /// p5 runway, in days, that raises an alert
    pub runway_alert_days: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        let thresholds = RiskThresholds::default();
        Self {
            log_level: LogLevel::Info,
            horizon_days: 90,
            num_paths: 5_000,
            seed: None,
            densification: Densification::Sparse,
            output_format: OutputFormat::Table,
            overdraft_alert: thresholds.overdraft_probability,
            runway_alert_days: thresholds.runway_days,
        }
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields for every variable `lookup` resolves
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(horizon) = var("HORIZON_DAYS") {
            self.horizon_days = parse_env("horizon_days", &horizon)?;
        }
        if let Some(paths) = var("NUM_PATHS") {
            self.num_paths = parse_env("num_paths", &paths)?;
        }
        if let Some(seed) = var("SEED") {
            self.seed = Some(parse_env("seed", &seed)?);
        }
        if let Some(densification) = var("DENSIFICATION") {
            self.densification = densification.parse().map_err(|_| ConfigError::InvalidValue {
                key: "densification",
                value: densification.clone(),
            })?;
        }
        if let Some(format) = var("OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(alert) = var("OVERDRAFT_ALERT") {
            self.overdraft_alert = parse_env("overdraft_alert", &alert)?;
        }
        if let Some(days) = var("RUNWAY_ALERT_DAYS") {
            self.runway_alert_days = parse_env("runway_alert_days", &days)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "horizon_days",
                value: "0".to_string(),
            });
        }
        if self.num_paths == 0 {
            return Err(ConfigError::InvalidValue {
                key: "num_paths",
                value: "0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.overdraft_alert) {
            return Err(ConfigError::InvalidValue {
                key: "overdraft_alert",
                value: self.overdraft_alert.to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(horizon) = cli.horizon_days {
            self.horizon_days = horizon;
        }
        if let Some(paths) = cli.num_paths {
            self.num_paths = paths;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.dense {
            self.densification = Densification::Dense;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Alert thresholds derived from this configuration
    pub fn thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            runway_days: self.runway_alert_days,
            overdraft_probability: self.overdraft_alert,
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::FileError(e.to_string()))
    }
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Force debug logging
    pub verbose: bool,
    /// Horizon override
    pub horizon_days: Option<usize>,
    /// Path count override
    pub num_paths: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Zero-fill inactive days
    pub dense: bool,
    /// Output format override
    pub output_format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.horizon_days, 90);
        assert_eq!(config.num_paths, 5_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.densification, Densification::Sparse);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.thresholds(), RiskThresholds::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("CASHRISK_HORIZON_DAYS", "30"),
                ("CASHRISK_SEED", "42"),
                ("CASHRISK_DENSIFICATION", "dense"),
                ("CASHRISK_OUTPUT_FORMAT", "json"),
                ("CASHRISK_OVERDRAFT_ALERT", "0.5"),
            ]))
            .unwrap();

        assert_eq!(config.horizon_days, 30);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.densification, Densification::Dense);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.overdraft_alert, 0.5);
        assert_eq!(config.num_paths, 5_000);
    }

    #[test]
    fn test_env_invalid_value() {
        let mut config = CliConfig::default();
        let result = config.apply_env(env(&[("CASHRISK_NUM_PATHS", "many")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "num_paths",
                ..
            })
        ));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            horizon_days = 180
            num_paths = 20000
            seed = 7
            densification = "dense"
            output_format = "csv"
            overdraft_alert = 0.1
            runway_alert_days = 45
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.horizon_days, 180);
        assert_eq!(config.num_paths, 20_000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.densification, Densification::Dense);
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert_eq!(config.runway_alert_days, 45);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("num_paths = 100").unwrap();
        assert_eq!(config.num_paths, 100);
        assert_eq!(config.horizon_days, 90);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig {
            seed: Some(3),
            ..Default::default()
        };
        let rendered = config.to_toml().unwrap();
        let parsed: CliConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        config.overdraft_alert = 1.5;
        assert!(config.validate().is_err());

        config.overdraft_alert = 0.2;
        config.num_paths = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_priority_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "horizon_days = 10\nnum_paths = 10\nseed = 1").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            seed: Some(99),
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env(&[("CASHRISK_NUM_PATHS", "20"), ("CASHRISK_SEED", "5")]),
        )
        .unwrap();

        // file < env < cli
        assert_eq!(config.horizon_days, 10);
        assert_eq!(config.num_paths, 20);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/cashrisk.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_verbose_forces_debug() {
        let cli = CliArgs {
            verbose: true,
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
