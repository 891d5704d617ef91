mod config;
mod log_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
pub use log_config::LogConfig;
