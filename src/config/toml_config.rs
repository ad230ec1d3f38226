use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::Deserialize;
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub precision: Option<usize>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            CalcError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read '{}': {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn precision(&self) -> Option<usize> {
        self.display.as_ref().and_then(|d| d.precision)
    }

    pub fn json_output(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.json)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision() {
            validate_range("display.precision", precision, 0, MAX_PRECISION)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[display]
precision = 4
json = true

[logging]
level = "info"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.precision(), Some(4));
        assert!(config.json_output());
        assert_eq!(config.log_level(), Some("info"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.precision(), None);
        assert!(!config.json_output());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = TomlConfig::from_toml_str("[display]\nprecision = 30\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfigValueError { .. })
        ));

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_are_parse_errors() {
        let result = TomlConfig::from_toml_str("[display]\ncolour = true\n");
        assert!(matches!(
            result,
            Err(CalcError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nprecision = 2").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.precision(), Some(2));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/calc.toml").unwrap_err();
        assert!(matches!(err, CalcError::ConfigValidationError { .. }));
        assert_eq!(
            err.user_friendly_message(),
            "The configuration value 'config' is not usable"
        );
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the configuration file or pass the value on the command line"
        );
    }
}
