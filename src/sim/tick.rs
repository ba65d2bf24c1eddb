//! Fixed timestep frame tick
//!
//! Advances the round state machine by one frame from an input snapshot.
//! Velocities are in pixels per tick, so the driver must call this at a
//! fixed rate (see [`FRAME_DT`](crate::consts::FRAME_DT)).

use glam::Vec2;

use super::entity::{Ball, Brick};
use super::state::{Game, GameEvent, GamePhase};
use crate::settings::WorldBounds;

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Pointer/touch location in world coordinates
    pub pointer: Vec2,
    /// A touch started this frame
    pub tap: bool,
    /// Pause key is held
    pub pause: bool,
    /// Restart key is held
    pub restart: bool,
}

impl TickInput {
    /// Idle input with the pointer resting at the world center
    pub fn centered(bounds: &WorldBounds) -> Self {
        Self {
            pointer: bounds.center(),
            tap: false,
            pause: false,
            restart: false,
        }
    }
}

/// Advance the game by one frame
///
/// Returns true when the gameplay step ran (the round was in progress), in
/// which case the playfield should be drawn; otherwise the driver shows
/// [`GamePhase::status_text`].
pub fn tick(game: &mut Game, input: &TickInput) -> bool {
    // Pause only ever starts a round; it fires on the press, not while held
    if input.pause || input.tap {
        if !game.pause_held && game.phase == GamePhase::Paused {
            set_phase(game, GamePhase::InProgress);
        }
        game.pause_held = true;
    } else {
        game.pause_held = false;
    }

    if input.restart || (game.phase == GamePhase::GameOver && input.tap) {
        game.restart();
    }

    if game.phase != GamePhase::InProgress {
        return false;
    }

    if game.is_empty::<Ball>() {
        game.lose_life();
    }

    if game.is_empty::<Brick>() {
        set_phase(game, GamePhase::Victory);
        game.push_event(GameEvent::Victory);
    }

    if game.lives_remaining() <= 0 {
        set_phase(game, GamePhase::GameOver);
        game.push_event(GameEvent::GameOver);
    }

    // The frame that ends the round still plays out
    game.update(input.pointer);
    true
}

fn set_phase(game: &mut Game, phase: GamePhase) {
    if game.phase != phase {
        log::info!("Phase {:?} -> {:?}", game.phase, phase);
        game.phase = phase;
    }
}
