use crate::error::{config_error, env_error, GridResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default input calendar path
pub const DEFAULT_INPUT_PATH: &str = "schedule.ics";

/// Default output calendar path
pub const DEFAULT_OUTPUT_PATH: &str = "term_weeks.ics";

/// Default color annotation for the generated week events
pub const DEFAULT_EVENT_COLOR: &str = "#FF0000";

/// Main configuration structure for the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the schedule calendar to read
    pub input_path: String,
    /// Path the week calendar is written to
    pub output_path: String,
    /// Color annotation applied to every generated week event
    pub event_color: String,
}

/// Optional overrides read from the config file; missing keys keep defaults
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    input_path: Option<String>,
    output_path: Option<String>,
    event_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            event_color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> GridResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        // Overlay values from the config file if it exists
        if let Ok(content) = fs::read_to_string("config/weekgrid.toml") {
            let file_config: FileConfig = toml::from_str(&content)?;
            if let Some(input_path) = file_config.input_path {
                config.input_path = input_path;
            }
            if let Some(output_path) = file_config.output_path {
                config.output_path = output_path;
            }
            if let Some(event_color) = file_config.event_color {
                config.event_color = event_color;
            }
        }

        // Environment variables take precedence over the file
        if let Some(input_path) = env_override("WEEKGRID_INPUT")? {
            config.input_path = input_path;
        }
        if let Some(output_path) = env_override("WEEKGRID_OUTPUT")? {
            config.output_path = output_path;
        }
        if let Some(event_color) = env_override("WEEKGRID_EVENT_COLOR")? {
            config.event_color = event_color;
        }

        config.validate()?;

        Ok(config)
    }

    /// Check that the configured values are usable
    fn validate(&self) -> GridResult<()> {
        if self.input_path.is_empty() {
            return Err(config_error("Input path must not be empty"));
        }
        if self.output_path.is_empty() {
            return Err(config_error("Output path must not be empty"));
        }
        if !is_hex_color(&self.event_color) {
            return Err(config_error(&format!(
                "Invalid event color '{}', expected #RRGGBB",
                self.event_color
            )));
        }
        Ok(())
    }
}

/// Read an optional environment override, rejecting non-unicode values
fn env_override(var: &str) -> GridResult<Option<String>> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(env_error(&format!("{} is not valid unicode", var)))
        }
    }
}

/// Check for a #RRGGBB hex color string
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input_path, "schedule.ics");
        assert_eq!(config.output_path, "term_weeks.ics");
        assert_eq!(config.event_color, "#FF0000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#FF0000"));
        assert!(is_hex_color("#00aaff"));
        assert!(!is_hex_color("FF0000")); // Missing hash
        assert!(!is_hex_color("#FF00")); // Too short
        assert!(!is_hex_color("#GG0000")); // Not hex digits
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let config = Config {
            event_color: "red".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
