use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

const MAX_WINDOW_DIMENSION: f32 = 4096.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(format!(
                "window dimensions must be finite numbers, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err("window dimensions must be greater than 0".to_string());
        }
        if self.width > MAX_WINDOW_DIMENSION || self.height > MAX_WINDOW_DIMENSION {
            return Err(format!(
                "window dimensions must not exceed {}",
                MAX_WINDOW_DIMENSION
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 420.0,
        }
    }
}
