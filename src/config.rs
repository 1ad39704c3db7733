//! Configuration loading for the maze solver.

use crate::error::Result;
use crate::render::Symbols;
use crate::TARGET_SENTINEL;
use grid_util::point::Point;
use serde::Deserialize;
use std::path::Path;

/// Solver settings, read from a TOML file such as
///
/// ```toml
/// start = [0, 0]
/// target_sentinel = 1
///
/// [symbols]
/// wall = "X"
/// free = "O"
/// path = "_"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start cell as `[row, col]` (default: `[0, 0]`)
    pub start: [i32; 2],

    /// Cell value marking the exit (default: 1)
    pub target_sentinel: i32,

    /// Rendering characters
    pub symbols: Symbols,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: [0, 0],
            target_sentinel: TARGET_SENTINEL,
            symbols: Symbols::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn start_point(&self) -> Point {
        Point::new(self.start[0], self.start[1])
    }
}
