use std::path::PathBuf;

use engine::settings::{Action, Settings};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Socket address the server binds to
    pub address: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    pub board: BoardDefaults,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("./static"),
            board: BoardDefaults::default(),
        }
    }
}

/// Board shown when the page is opened without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardDefaults {
    pub width: usize,
    pub height: usize,
    /// Milliseconds between automatic steps, `0` steps on click only
    pub iteration_speed: u64,
}

impl Default for BoardDefaults {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            iteration_speed: 500,
        }
    }
}

impl BoardDefaults {
    pub fn settings(&self) -> Settings {
        Settings::with_size(self.width, self.height).reduce(Action::SetIterationSpeed(
            Some(self.iteration_speed).filter(|ms| *ms > 0),
        ))
    }
}

impl ViewConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
