use crate::config::toml_config::{TomlConfig, MAX_PRECISION};
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "math-calc")]
#[command(version)]
#[command(about = "Interactive arithmetic calculator")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Fixed number of decimals for real-valued results
    #[arg(long)]
    pub precision: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads and validates the config file (if any), then applies command-line overrides.
    pub fn load_settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Settings::merge(file.as_ref(), self.precision, self.json))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}
