use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

use super::{
    BoardConfig, ConfigManager, FileContentConfigProvider, MoveListConfig, WindowConfig,
    YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub window: WindowConfig,
    pub board: BoardConfig,
    #[serde(default)]
    pub move_list: MoveListConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.board.validate()?;
        Ok(())
    }
}
