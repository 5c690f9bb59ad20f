pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date_format, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nonagon")]
#[command(about = "Compute a nonagon numerology profile from a birth date and core list")]
pub struct CliConfig {
    /// Optional display name for the profile
    #[arg(long)]
    pub name: Option<String>,

    /// Date of birth in dd/mm/yyyy format
    #[arg(long)]
    pub date_of_birth: String,

    /// Core list digits, e.g. "1,7,1,7,7,5,5,2" (periods also separate)
    #[arg(long, default_value = "")]
    pub core_list: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Hide the 140 degree (9-5) angle note on the chart
    #[arg(long)]
    pub hide_angle_note: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    fn core_list(&self) -> &str {
        &self.core_list
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn show_angle_note(&self) -> bool {
        !self.hide_angle_note
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_date_format("date_of_birth", &self.date_of_birth)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(date_of_birth: &str) -> CliConfig {
        CliConfig {
            name: None,
            date_of_birth: date_of_birth.to_string(),
            core_list: String::new(),
            output_path: "./output".to_string(),
            hide_angle_note: false,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_date() {
        assert!(config("17/08/1990").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        assert!(config("17-08-1990").validate().is_err());
        assert!(config("").validate().is_err());
    }

    #[test]
    fn test_angle_note_defaults_on() {
        assert!(config("17/08/1990").show_angle_note());
        let mut hidden = config("17/08/1990");
        hidden.hide_angle_note = true;
        assert!(!hidden.show_angle_note());
    }
}
