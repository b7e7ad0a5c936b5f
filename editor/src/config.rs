#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_FILL, HISTORY_DEPTH};

/// Startup settings for an [`EditorContext`](crate::engine::EditorContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo stack capacity, current state included. Values below 1 are raised to 1.
    pub history_depth: usize,
    /// Canvas background colour for a new scene.
    pub background: String,
    /// Initial fill colour for new elements.
    pub fill: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: HISTORY_DEPTH,
            background: DEFAULT_BACKGROUND.to_owned(),
            fill: DEFAULT_FILL.to_owned(),
        }
    }
}
