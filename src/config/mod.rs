pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "word-sort")]
#[command(about = "Sorts the words in a text file, one word per line")]
pub struct CliConfig {
    #[arg(long, help = "Input file to sort; prompted for on stdin when omitted")]
    pub input_path: Option<String>,

    #[arg(long, default_value = "output.txt")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system resource monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input_path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input_path = validate_required_field("input_path", &self.input_path)?;
        validate_path("input_path", input_path)?;
        validate_non_empty_string("input_path", input_path)?;

        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_path", &self.output_path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input_path: Some("words.txt".to_string()),
            output_path: "output.txt".to_string(),
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_input_path() {
        let mut config = base_config();
        config.input_path = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let mut config = base_config();
        config.output_path = String::new();
        assert!(config.validate().is_err());
    }
}
