use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty_cell: char,
    pub show_history: bool,
    pub show_evaluation: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            empty_cell: '.',
            show_history: true,
            show_evaluation: false,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if matches!(self.empty_cell.to_ascii_uppercase(), 'X' | 'O') {
            return Err("empty_cell must differ from the player marks".to_string());
        }
        if self.empty_cell.is_control() {
            return Err("empty_cell must be a printable character".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub debug: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(|prefix| prefix.trim().is_empty()) {
            return Err("logging prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);

        let config = Config {
            display: DisplayConfig {
                empty_cell: '_',
                show_history: false,
                show_evaluation: true,
            },
            logging: LoggingConfig {
                prefix: Some("Client".to_string()),
                debug: true,
            },
        };
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(&path).get_config().unwrap();
        assert_eq!(reloaded, config);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let path = get_temp_file_path();
        std::fs::write(&path, "display:\n  show_evaluation: true\n").unwrap();

        let config = get_config_manager(&path).get_config().unwrap();
        assert!(config.display.show_evaluation);
        assert_eq!(config.display.empty_cell, '.');
        assert_eq!(config.logging, LoggingConfig::default());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_rejects_mark_as_empty_cell() {
        let mut config = Config::default();
        config.display.empty_cell = 'o';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_prefix() {
        let mut config = Config::default();
        config.logging.prefix = Some("  ".to_string());
        assert!(config.validate().is_err());
    }
}
