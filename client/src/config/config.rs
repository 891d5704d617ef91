use std::path::Path;

use super::{ConfigManager, FileContentConfigProvider, LogConfig, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::FirstPlayerMode;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}
