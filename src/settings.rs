//! Game configuration
//!
//! Loaded once at startup and injected into [`Game`](crate::sim::Game).
//! Every field has a default, so a config file only needs the values it
//! wants to change.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The fixed world rectangle, anchored at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl WorldBounds {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Layout of the brick wall built on restart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickGrid {
    /// Columns
    pub count_x: u32,
    /// Rows
    pub count_y: u32,
    /// Empty grid cells left of the first column
    pub start_column: u32,
    /// Empty grid cells above the first row
    pub start_row: u32,
    /// Gap between neighbouring bricks
    pub spacing: f32,
    /// Extra horizontal shift of the whole wall
    pub offset_x: f32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self {
            count_x: 11,
            count_y: 4,
            start_column: 1,
            start_row: 2,
            spacing: 3.0,
            offset_x: 22.0,
        }
    }
}

impl BrickGrid {
    /// Total number of bricks in a fresh wall
    pub fn len(&self) -> usize {
        self.count_x as usize * self.count_y as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldBounds,
    /// Lives at the start of a round
    pub starting_lives: i32,
    pub bricks: BrickGrid,
    /// Distance from the bottom edge to the paddle's center
    pub paddle_offset_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            starting_lives: 3,
            bricks: BrickGrid::default(),
            paddle_offset_y: 50.0,
        }
    }
}

impl GameConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults on any problem
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
