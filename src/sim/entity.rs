//! Gameplay entities
//!
//! The entity set is closed: [`Entity`] is an enum over Ball, Paddle and
//! Brick, each of which owns its shape. Per-frame behavior is dispatched by
//! `match`, and typed access goes through the [`Variant`] trait so the store
//! can hand out `&mut Ball` without downcasting.

use glam::Vec2;

use super::shape::{Bounds, Circle, Rectangle};
use crate::consts::*;
use crate::renderer::Renderer;
use crate::settings::WorldBounds;

/// Read-only inputs for one entity update
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    /// World rectangle the ball bounces inside
    pub bounds: WorldBounds,
    /// Pointer/touch location in world coordinates
    pub pointer: Vec2,
}

/// Variant tag, also the group index key in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ball,
    Paddle,
    Brick,
}

impl EntityKind {
    /// Number of variants
    pub const COUNT: usize = 3;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            EntityKind::Ball => 0,
            EntityKind::Paddle => 1,
            EntityKind::Brick => 2,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub shape: Circle,
    pub vel: Vec2,
    pub destroyed: bool,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            shape: Circle::new(pos, BALL_RADIUS, BALL_COLOR),
            vel: Vec2::new(-BALL_SPEED, -BALL_SPEED),
            destroyed: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.pos
    }

    pub fn update(&mut self, ctx: &UpdateContext) {
        self.shape.move_by(self.vel);
        self.solve_bound_collisions(&ctx.bounds);
    }

    /// Bounce off the left, right and top walls; fall out of the bottom
    fn solve_bound_collisions(&mut self, bounds: &WorldBounds) {
        if self.left() < 0.0 {
            self.vel.x = BALL_SPEED;
        } else if self.right() > bounds.width {
            self.vel.x = -BALL_SPEED;
        }

        if self.top() < 0.0 {
            self.vel.y = BALL_SPEED;
        } else if self.bottom() >= bounds.height {
            self.destroyed = true;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub shape: Rectangle,
    /// Unused while the paddle follows the pointer
    pub vel: Vec2,
    pub destroyed: bool,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            shape: Rectangle::new(pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT), PADDLE_COLOR),
            vel: Vec2::ZERO,
            destroyed: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.pos
    }

    /// Follow the pointer horizontally. Not clamped to the world.
    pub fn update(&mut self, ctx: &UpdateContext) {
        self.shape.pos.x = ctx.pointer.x;
        self.shape.move_by(self.vel);
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub shape: Rectangle,
    /// Hits left before the brick breaks
    pub required_hits: i32,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, required_hits: i32) -> Self {
        let mut brick = Self {
            shape: Rectangle::new(pos, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT), BRICK_COLOR_HITS_1),
            required_hits,
            destroyed: false,
        };
        brick.update_color();
        brick
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.pos
    }

    pub fn update(&mut self, _ctx: &UpdateContext) {
        self.update_color();
    }

    /// Tougher bricks are drawn more opaque
    fn update_color(&mut self) {
        self.shape.color = match self.required_hits {
            1 => BRICK_COLOR_HITS_1,
            2 => BRICK_COLOR_HITS_2,
            _ => BRICK_COLOR_HITS_3,
        };
    }
}

macro_rules! delegate_bounds {
    ($ty:ty) => {
        impl Bounds for $ty {
            #[inline]
            fn left(&self) -> f32 {
                self.shape.left()
            }

            #[inline]
            fn right(&self) -> f32 {
                self.shape.right()
            }

            #[inline]
            fn top(&self) -> f32 {
                self.shape.top()
            }

            #[inline]
            fn bottom(&self) -> f32 {
                self.shape.bottom()
            }
        }
    };
}

delegate_bounds!(Ball);
delegate_bounds!(Paddle);
delegate_bounds!(Brick);

/// Any entity owned by the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Ball(Ball),
    Paddle(Paddle),
    Brick(Brick),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Ball(_) => EntityKind::Ball,
            Entity::Paddle(_) => EntityKind::Paddle,
            Entity::Brick(_) => EntityKind::Brick,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        match self {
            Entity::Ball(b) => b.destroyed,
            Entity::Paddle(p) => p.destroyed,
            Entity::Brick(b) => b.destroyed,
        }
    }

    pub fn update(&mut self, ctx: &UpdateContext) {
        match self {
            Entity::Ball(b) => b.update(ctx),
            Entity::Paddle(p) => p.update(ctx),
            Entity::Brick(b) => b.update(ctx),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            Entity::Ball(b) => b.shape.draw(renderer),
            Entity::Paddle(p) => p.shape.draw(renderer),
            Entity::Brick(b) => b.shape.draw(renderer),
        }
    }
}

/// Typed access to one entity variant
pub trait Variant: Sized + Into<Entity> {
    const KIND: EntityKind;

    fn from_entity(entity: &Entity) -> Option<&Self>;
    fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self>;
}

impl From<Ball> for Entity {
    fn from(ball: Ball) -> Self {
        Entity::Ball(ball)
    }
}

impl Variant for Ball {
    const KIND: EntityKind = EntityKind::Ball;

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Ball(b) => Some(b),
            _ => None,
        }
    }

    fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self> {
        match entity {
            Entity::Ball(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Paddle> for Entity {
    fn from(paddle: Paddle) -> Self {
        Entity::Paddle(paddle)
    }
}

impl Variant for Paddle {
    const KIND: EntityKind = EntityKind::Paddle;

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Paddle(p) => Some(p),
            _ => None,
        }
    }

    fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self> {
        match entity {
            Entity::Paddle(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Brick> for Entity {
    fn from(brick: Brick) -> Self {
        Entity::Brick(brick)
    }
}

impl Variant for Brick {
    const KIND: EntityKind = EntityKind::Brick;

    fn from_entity(entity: &Entity) -> Option<&Self> {
        match entity {
            Entity::Brick(b) => Some(b),
            _ => None,
        }
    }

    fn from_entity_mut(entity: &mut Entity) -> Option<&mut Self> {
        match entity {
            Entity::Brick(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> UpdateContext {
        UpdateContext {
            bounds: WorldBounds::default(),
            pointer: Vec2::new(400.0, 300.0),
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0));
        ball.update(&ctx());
        assert_eq!(ball.pos(), Vec2::new(392.0, 292.0));
        assert!(!ball.destroyed);
    }

    #[test]
    fn test_ball_bounces_off_left_and_top() {
        let mut ball = Ball::new(Vec2::new(12.0, 12.0));
        ball.update(&ctx());
        assert_eq!(ball.vel, Vec2::new(BALL_SPEED, BALL_SPEED));
    }

    #[test]
    fn test_ball_bounces_off_right() {
        let mut ball = Ball::new(Vec2::new(790.0, 300.0));
        ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        ball.update(&ctx());
        assert_eq!(ball.vel.x, -BALL_SPEED);
    }

    #[test]
    fn test_ball_lost_at_bottom_edge() {
        // Lands with bottom() exactly on the world edge
        let mut ball = Ball::new(Vec2::new(400.0, 600.0 - BALL_RADIUS - BALL_SPEED));
        ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);
        ball.update(&ctx());
        assert_eq!(ball.bottom(), 600.0);
        assert!(ball.destroyed);
    }

    #[test]
    fn test_ball_survives_just_above_bottom() {
        let mut ball = Ball::new(Vec2::new(400.0, 600.0 - BALL_RADIUS - BALL_SPEED - 1.0));
        ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);
        ball.update(&ctx());
        assert_eq!(ball.bottom(), 599.0);
        assert!(!ball.destroyed);
    }

    #[test]
    fn test_paddle_follows_pointer_unclamped() {
        let mut paddle = Paddle::new(Vec2::new(400.0, 550.0));
        let ctx = UpdateContext {
            pointer: Vec2::new(-250.0, 10.0),
            ..ctx()
        };
        paddle.update(&ctx);
        assert_eq!(paddle.pos(), Vec2::new(-250.0, 550.0));
    }

    #[test]
    fn test_brick_color_tiers() {
        let mut brick = Brick::new(Vec2::ZERO, 3);
        assert_eq!(brick.shape.color, BRICK_COLOR_HITS_3);
        brick.required_hits = 2;
        brick.update(&ctx());
        assert_eq!(brick.shape.color, BRICK_COLOR_HITS_2);
        brick.required_hits = 1;
        brick.update(&ctx());
        assert_eq!(brick.shape.color, BRICK_COLOR_HITS_1);
        assert!(!brick.destroyed);
        assert_eq!(brick.pos(), Vec2::ZERO);
    }

    #[test]
    fn test_variant_access() {
        let mut entity: Entity = Paddle::new(Vec2::ZERO).into();
        assert_eq!(entity.kind(), EntityKind::Paddle);
        assert!(Paddle::from_entity(&entity).is_some());
        assert!(Ball::from_entity(&entity).is_none());
        if let Some(p) = Paddle::from_entity_mut(&mut entity) {
            p.destroyed = true;
        }
        assert!(entity.is_destroyed());
    }
}
