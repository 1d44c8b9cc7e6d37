mod board_config;
mod main_config;
mod move_list_config;
mod window_config;

pub(crate) use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};

pub use board_config::BoardConfig;
pub use main_config::{Config, get_config_manager};
pub use move_list_config::MoveListConfig;
pub use window_config::WindowConfig;
