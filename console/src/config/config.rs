use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::FirstPlayerMode;

use super::LoggingConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_NAME_LENGTH: usize = 32;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Player name cannot be blank".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Player name cannot be longer than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Last name entered in single player mode, offered as the default.
    pub player_name: Option<String>,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub show_hints: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.player_name {
            validate_name(name)?;
        }
        self.logging.validate()?;
        Ok(())
    }
}
