use crate::core::ConfigProvider;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{
    validate_date_format, validate_path, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub profile: ProfileSection,
    pub output: Option<OutputSection>,
    pub chart: Option<ChartSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub core_list: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSection {
    pub show_angle_note: Option<bool>,
}

impl TomlConfig {
    /// Load and parse a configuration file.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(ProfileError::InvalidConfigValueError {
                field: "config".to_string(),
                value: path.to_string(),
                reason: "File does not exist".to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn output_path_or_default(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|output| output.path.as_deref())
            .unwrap_or("./output")
    }

    pub fn show_angle_note_enabled(&self) -> bool {
        self.chart
            .as_ref()
            .and_then(|chart| chart.show_angle_note)
            .unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn name(&self) -> Option<&str> {
        self.profile.name.as_deref()
    }

    fn date_of_birth(&self) -> &str {
        self.profile.date_of_birth.as_deref().unwrap_or("")
    }

    fn core_list(&self) -> &str {
        self.profile.core_list.as_deref().unwrap_or("")
    }

    fn output_path(&self) -> &str {
        self.output_path_or_default()
    }

    fn show_angle_note(&self) -> bool {
        self.show_angle_note_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let date_of_birth =
            validate_required_field("profile.date_of_birth", &self.profile.date_of_birth)?;
        validate_date_format("profile.date_of_birth", date_of_birth)?;
        validate_path("output.path", self.output_path_or_default())?;
        Ok(())
    }
}
