use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct BoardConfig {
    pub cell_size: f32,
    #[serde(default = "default_show_winning_line")]
    pub show_winning_line: bool,
}

fn default_show_winning_line() -> bool {
    true
}

impl BoardConfig {
    pub const MIN_CELL_SIZE: f32 = 40.0;
    pub const MAX_CELL_SIZE: f32 = 200.0;
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.cell_size.is_finite() {
            return Err(format!("cell_size must be a finite number, got {}", self.cell_size));
        }
        if self.cell_size < Self::MIN_CELL_SIZE || self.cell_size > Self::MAX_CELL_SIZE {
            return Err(format!(
                "cell_size must be between {} and {}, got {}",
                Self::MIN_CELL_SIZE,
                Self::MAX_CELL_SIZE,
                self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            show_winning_line: default_show_winning_line(),
        }
    }
}
