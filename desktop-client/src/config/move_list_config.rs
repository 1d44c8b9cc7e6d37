use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct MoveListConfig {
    pub visible: bool,
}

impl Default for MoveListConfig {
    fn default() -> Self {
        Self { visible: true }
    }
}
