//! Configuration management for Rollout
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (ROLLOUT_*)
//! 3. Config file (~/.config/rollout/config.toml)
//! 4. Default values

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;
use crate::{Error, Result};

/// Employee counts the input layer accepts; values outside are clamped
pub const EMPLOYEE_RANGE: RangeInclusive<u32> = 10..=1000;

/// Output format for rendered plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary plus a week-scaled text chart
    #[default]
    Text,
    /// The serialized plan structure
    Json,
}

impl OutputFormat {
    /// Get the short name for this format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "t" => Ok(OutputFormat::Text),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Planner input defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Employee count used when none is given
    pub employees: u32,

    /// Optional items selected in addition to the mandatory ones
    pub include: Vec<ItemId>,

    /// Output format for the plan command
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            employees: 50,
            include: vec![ItemId::Training],
            format: OutputFormat::Text,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Planner defaults
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/rollout/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rollout").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - ROLLOUT_EMPLOYEES: Default employee count
    /// - ROLLOUT_FORMAT: Output format (text or json)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var("ROLLOUT_EMPLOYEES") {
            match raw.parse() {
                Ok(employees) => self.defaults.employees = employees,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring unparseable ROLLOUT_EMPLOYEES")
                }
            }
        }

        if let Ok(raw) = std::env::var("ROLLOUT_FORMAT") {
            match raw.parse() {
                Ok(format) => self.defaults.format = format,
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable ROLLOUT_FORMAT"),
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        employees: Option<u32>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(employees) = employees {
            self.defaults.employees = employees;
        }

        if let Some(format) = format {
            self.defaults.format = format;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        employees: Option<u32>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(employees, format))
    }

    /// Effective employee count, clamped to the supported input range
    pub fn employees(&self) -> u32 {
        let requested = self.defaults.employees;
        if EMPLOYEE_RANGE.contains(&requested) {
            return requested;
        }

        let clamped = requested.clamp(*EMPLOYEE_RANGE.start(), *EMPLOYEE_RANGE.end());
        tracing::warn!(requested, clamped, "employee count outside supported range");
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.employees, 50);
        assert_eq!(config.defaults.include, vec![ItemId::Training]);
        assert_eq!(config.defaults.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(Some(250), Some(OutputFormat::Json));

        assert_eq!(config.defaults.employees, 250);
        assert_eq!(config.defaults.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[defaults]
employees = 120
include = ["integrations", "training"]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.employees, 120);
        assert_eq!(
            config.defaults.include,
            vec![ItemId::Integrations, ItemId::Training]
        );
        assert_eq!(config.defaults.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[defaults]
employees = 300
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.employees, 300);
        // include and format should use defaults
        assert_eq!(config.defaults.include, vec![ItemId::Training]);
        assert_eq!(config.defaults.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nemployees = 42").unwrap();

        let config = Config::load_from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.defaults.employees, 42);
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults = 7").unwrap();

        assert!(Config::load_from_file(&file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_employees_clamped_to_range() {
        let low = Config::default().with_cli_overrides(Some(5), None);
        assert_eq!(low.employees(), 10);

        let high = Config::default().with_cli_overrides(Some(5000), None);
        assert_eq!(high.employees(), 1000);

        let in_range = Config::default().with_cli_overrides(Some(777), None);
        assert_eq!(in_range.employees(), 777);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("j".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
