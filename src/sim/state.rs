//! Game state and round lifecycle
//!
//! [`Game`] owns the entity store plus the round bookkeeping (lives, phase)
//! and exposes the hooks a frame driver needs. The phase machine itself is
//! advanced by [`tick`](super::tick::tick).

use glam::Vec2;

use super::collision::resolve_collisions;
use super::entity::{Ball, Brick, Paddle, UpdateContext, Variant};
use super::store::EntityStore;
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::renderer::Renderer;
use crate::settings::GameConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player to start
    Paused,
    /// Active gameplay
    InProgress,
    /// Every brick cleared
    Victory,
    /// Out of lives
    GameOver,
}

impl GamePhase {
    /// Message shown instead of the playfield, if any
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            GamePhase::Paused => Some("Paused"),
            GamePhase::InProgress => None,
            GamePhase::Victory => Some("You won!"),
            GamePhase::GameOver => Some("Game over!"),
        }
    }
}

/// Things that happened during a frame, for audio/HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// Brick took a hit and survived
    BrickHit { remaining: i32 },
    /// Brick broke
    BrickDestroyed,
    /// Ball fell out of the bottom of the world
    BallLost,
    /// A replacement ball was served at the cost of a life
    LifeLost { remaining: i32 },
    Victory,
    GameOver,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    store: EntityStore,
    lives: i32,
    pub(super) phase: GamePhase,
    /// Whether pause/tap was held on the previous frame (edge detection)
    pub(super) pause_held: bool,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create an empty game. Call [`Game::restart`] before playing.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            store: EntityStore::new(),
            lives: 0,
            phase: GamePhase::GameOver,
            pause_held: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn lives_remaining(&self) -> i32 {
        self.lives
    }

    /// HUD line for the lives counter
    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// True when no entity of kind `T` is registered
    pub fn is_empty<T: Variant>(&self) -> bool {
        self.store.is_group_empty::<T>()
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Reset lives, rebuild the brick wall and serve a fresh ball
    pub fn restart(&mut self) {
        self.lives = self.config.starting_lives;
        self.phase = GamePhase::Paused;
        self.store.clear();

        let grid = self.config.bricks;
        for ix in 0..grid.count_x {
            for iy in 0..grid.count_y {
                let x = (ix + grid.start_column) as f32 * (BRICK_WIDTH + grid.spacing);
                let y = (iy + grid.start_row) as f32 * (BRICK_HEIGHT + grid.spacing);
                let required_hits = 1 + ((ix * iy) % 3) as i32;
                self.store
                    .create(Brick::new(Vec2::new(grid.offset_x + x, y), required_hits));
            }
        }

        self.spawn_ball();
        let world = self.config.world;
        self.store.create(Paddle::new(Vec2::new(
            world.width / 2.0,
            world.height - self.config.paddle_offset_y,
        )));

        log::info!(
            "Round restarted: {} bricks, {} lives",
            self.store.count::<Brick>(),
            self.lives
        );
        self.push_event(GameEvent::Restarted);
    }

    /// Put a new ball at the center of the world
    pub fn spawn_ball(&mut self) {
        self.store.create(Ball::new(self.config.world.center()));
    }

    /// Spend a life to serve a replacement ball
    pub(super) fn lose_life(&mut self) {
        self.spawn_ball();
        self.lives -= 1;
        log::info!("Life lost, {} remaining", self.lives);
        self.push_event(GameEvent::LifeLost {
            remaining: self.lives,
        });
    }

    /// One gameplay step: update, collide, sweep
    pub fn update(&mut self, pointer: Vec2) {
        let ctx = UpdateContext {
            bounds: self.config.world,
            pointer,
        };
        self.store.update_all(&ctx);

        let lost = self.store.iter::<Ball>().filter(|b| b.destroyed).count();
        for _ in 0..lost {
            log::debug!("Ball lost");
            self.events.push(GameEvent::BallLost);
        }

        let events = resolve_collisions(&mut self.store);
        self.events.extend(events);

        self.store.refresh();
    }

    /// Draw every surviving entity
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.store.draw_all(renderer);
    }
}
