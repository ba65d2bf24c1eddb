//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (creation order)
//! - No platform dependencies; drawing goes through the `Renderer` trait

pub mod collision;
pub mod entity;
pub mod shape;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{BrickHit, intersects, resolve_brick_ball, resolve_collisions, resolve_paddle_ball};
pub use entity::{Ball, Brick, Entity, EntityKind, Paddle, UpdateContext, Variant};
pub use shape::{Bounds, Circle, Color, Rectangle};
pub use state::{Game, GameEvent, GamePhase};
pub use store::{EntityId, EntityStore, Others};
pub use tick::{TickInput, tick};
