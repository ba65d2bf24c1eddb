//! Arkanoid - a fixed-timestep brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, store, collisions, round state)
//! - `renderer`: Draw command sink plus software and vertex-batch backends
//! - `settings`: World bounds and brick layout configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{BrickGrid, GameConfig, WorldBounds};
pub use sim::{Game, GamePhase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use crate::sim::Color;

    /// Fixed simulation timestep (velocities are per tick)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 8.0;
    pub const BALL_COLOR: Color = Color::rgba(255, 0, 0, 255);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_COLOR: Color = Color::rgba(255, 0, 0, 255);

    /// Brick defaults - same hue, more opaque the more hits it needs
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLOR_HITS_1: Color = Color::rgba(255, 255, 0, 80);
    pub const BRICK_COLOR_HITS_2: Color = Color::rgba(255, 255, 0, 170);
    pub const BRICK_COLOR_HITS_3: Color = Color::rgba(255, 255, 0, 255);

    pub const BACKGROUND: Color = Color::rgba(0, 0, 0, 255);
}
