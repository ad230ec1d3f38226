#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub precision: Option<usize>,
    pub json: bool,
    pub log_level: Option<String>,
}

impl Settings {
    /// Command-line values win over the file; absent values fall back to it.
    pub fn merge(file: Option<&TomlConfig>, precision: Option<usize>, json: bool) -> Self {
        let file_precision = file.and_then(|f| f.precision());
        let file_json = file.map(|f| f.json_output()).unwrap_or(false);

        Self {
            precision: precision.or(file_precision),
            json: json || file_json,
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
        }
    }
}

impl ConfigProvider for Settings {
    fn precision(&self) -> Option<usize> {
        self.precision
    }

    fn json_output(&self) -> bool {
        self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_without_file() {
        let settings = Settings::merge(None, None, false);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[display]\nprecision = 6\njson = false\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::merge(Some(&file), Some(2), true);
        assert_eq!(settings.precision, Some(2));
        assert!(settings.json);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));

        let settings = Settings::merge(Some(&file), None, false);
        assert_eq!(settings.precision, Some(6));
        assert!(!settings.json);
    }
}
