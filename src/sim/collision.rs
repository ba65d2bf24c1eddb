//! Collision detection and response
//!
//! Everything is axis-aligned: shapes are compared by their edge extents
//! and bounces set velocity components to fixed speeds instead of
//! reflecting the incoming vector.

use super::entity::{Ball, Brick, Paddle};
use super::shape::Bounds;
use super::state::GameEvent;
use super::store::EntityStore;
use crate::consts::BALL_SPEED;

/// Outcome of a ball striking a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    /// Hits the brick still needs after this one
    pub remaining: i32,
    /// Whether this hit broke the brick
    pub destroyed: bool,
}

/// Inclusive AABB overlap test (touching counts)
#[inline]
pub fn intersects<A: Bounds + ?Sized, B: Bounds + ?Sized>(a: &A, b: &B) -> bool {
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// Send the ball upward, away from the paddle's center
///
/// Returns true if the two were touching.
pub fn resolve_paddle_ball(paddle: &Paddle, ball: &mut Ball) -> bool {
    if !intersects(paddle, ball) {
        return false;
    }

    ball.vel.y = -BALL_SPEED;
    // Dead center goes right
    ball.vel.x = if ball.pos().x < paddle.pos().x {
        -BALL_SPEED
    } else {
        BALL_SPEED
    };
    true
}

/// Damage the brick and bounce the ball along the shallowest penetration axis
pub fn resolve_brick_ball(brick: &mut Brick, ball: &mut Ball) -> Option<BrickHit> {
    if !intersects(brick, ball) {
        return None;
    }

    let was_destroyed = brick.destroyed;
    brick.required_hits -= 1;
    if brick.required_hits <= 0 {
        brick.destroyed = true;
    }

    let overlap_left = ball.right() - brick.left();
    let overlap_right = brick.right() - ball.left();
    let overlap_top = ball.bottom() - brick.top();
    let overlap_bottom = brick.bottom() - ball.top();

    let from_left = overlap_left.abs() < overlap_right.abs();
    let from_top = overlap_top.abs() < overlap_bottom.abs();

    let min_overlap_x = if from_left { overlap_left } else { overlap_right };
    let min_overlap_y = if from_top { overlap_top } else { overlap_bottom };

    if min_overlap_x.abs() < min_overlap_y.abs() {
        ball.vel.x = if from_left { -BALL_SPEED } else { BALL_SPEED };
    } else {
        ball.vel.y = if from_top { -BALL_SPEED } else { BALL_SPEED };
    }

    Some(BrickHit {
        remaining: brick.required_hits,
        destroyed: !was_destroyed && brick.destroyed,
    })
}

/// Run every ball against every brick, then every paddle
///
/// No early exit: a ball touching two bricks in the same frame damages both.
pub fn resolve_collisions(store: &mut EntityStore) -> Vec<GameEvent> {
    let mut events = Vec::new();

    store.for_each_with_others::<Ball, _>(|ball, others| {
        others.for_each::<Brick, _>(|brick| {
            if let Some(hit) = resolve_brick_ball(brick, ball) {
                if hit.destroyed {
                    log::debug!("Brick destroyed at ({}, {})", brick.pos().x, brick.pos().y);
                    events.push(GameEvent::BrickDestroyed);
                } else {
                    events.push(GameEvent::BrickHit {
                        remaining: hit.remaining,
                    });
                }
            }
        });
        others.for_each::<Paddle, _>(|paddle| {
            if resolve_paddle_ball(paddle, ball) {
                events.push(GameEvent::PaddleHit);
            }
        });
    });

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::sim::shape::{Circle, Color, Rectangle};

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y))
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Rectangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Color::default());
        let b = Rectangle::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0), Color::default());
        assert!(intersects(&a, &b));

        let c = Rectangle::new(Vec2::new(10.01, 0.0), Vec2::new(10.0, 10.0), Color::default());
        assert!(!intersects(&a, &c));
    }

    #[test]
    fn test_paddle_sends_ball_away_from_center() {
        let paddle = Paddle::new(Vec2::new(400.0, 550.0));
        // Ball moving left, left of the paddle center
        let mut ball = ball_at(390.0, 535.0);
        ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);
        assert!(resolve_paddle_ball(&paddle, &mut ball));
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, -BALL_SPEED));

        let mut ball = ball_at(415.0, 535.0);
        ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);
        resolve_paddle_ball(&paddle, &mut ball);
        assert_eq!(ball.vel, Vec2::new(BALL_SPEED, -BALL_SPEED));
    }

    #[test]
    fn test_paddle_tie_bounces_right() {
        let paddle = Paddle::new(Vec2::new(400.0, 550.0));
        let mut ball = ball_at(400.0, 535.0);
        ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);
        resolve_paddle_ball(&paddle, &mut ball);
        assert_eq!(ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn test_paddle_miss_is_noop() {
        let paddle = Paddle::new(Vec2::new(400.0, 550.0));
        let mut ball = ball_at(400.0, 300.0);
        let before = ball;
        assert!(!resolve_paddle_ball(&paddle, &mut ball));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_single_hit_brick_breaks() {
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 1);
        let mut ball = ball_at(100.0, 118.0);
        let hit = resolve_brick_ball(&mut brick, &mut ball);
        assert_eq!(
            hit,
            Some(BrickHit {
                remaining: 0,
                destroyed: true
            })
        );
        assert!(brick.destroyed);
    }

    #[test]
    fn test_three_hit_brick_survives_two_hits() {
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 3);
        let mut ball = ball_at(100.0, 118.0);
        resolve_brick_ball(&mut brick, &mut ball);
        resolve_brick_ball(&mut brick, &mut ball);
        assert_eq!(brick.required_hits, 1);
        assert!(!brick.destroyed);
    }

    #[test]
    fn test_brick_hit_from_below_flips_vertical_only() {
        // Ball grazes the bottom face: shallow vertical penetration,
        // deep horizontal overlap
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 2);
        let mut ball = ball_at(95.0, 118.0);
        ball.vel = Vec2::new(-BALL_SPEED, -BALL_SPEED);
        resolve_brick_ball(&mut brick, &mut ball);
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, BALL_SPEED));
    }

    #[test]
    fn test_brick_hit_from_side_flips_horizontal_only() {
        // Ball clips the left face near mid-height
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 2);
        let mut ball = ball_at(62.0, 100.0);
        ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        resolve_brick_ball(&mut brick, &mut ball);
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, -BALL_SPEED));
    }

    #[test]
    fn test_brick_miss_is_noop() {
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 1);
        let mut ball = ball_at(300.0, 300.0);
        assert!(resolve_brick_ball(&mut brick, &mut ball).is_none());
        assert_eq!(brick.required_hits, 1);
    }

    #[test]
    fn test_resolve_collisions_hits_every_touching_brick() {
        let mut store = EntityStore::new();
        // Two bricks side by side, ball straddling the seam from below
        store.create(Brick::new(Vec2::new(70.0, 100.0), 1));
        store.create(Brick::new(Vec2::new(130.0, 100.0), 2));
        store.create(Ball::new(Vec2::new(100.0, 118.0)));
        store.create(Paddle::new(Vec2::new(400.0, 550.0)));

        let events = resolve_collisions(&mut store);
        assert_eq!(
            events,
            vec![GameEvent::BrickDestroyed, GameEvent::BrickHit { remaining: 1 }]
        );
        assert_eq!(store.refresh(), 1);
        assert_eq!(store.count::<Brick>(), 1);
    }

    #[test]
    fn test_brick_broken_once_by_two_balls() {
        let mut store = EntityStore::new();
        store.create(Brick::new(Vec2::new(100.0, 100.0), 1));
        store.create(Ball::new(Vec2::new(95.0, 118.0)));
        store.create(Ball::new(Vec2::new(105.0, 118.0)));

        let events = resolve_collisions(&mut store);
        // The second ball still bounces off the already broken brick
        assert_eq!(events, vec![GameEvent::BrickDestroyed, GameEvent::BrickHit { remaining: -1 }]);
        assert!(store.iter::<Ball>().all(|b| b.vel.y == BALL_SPEED));
        assert_eq!(store.refresh(), 1);
        assert!(store.is_group_empty::<Brick>());
    }

    #[test]
    fn test_hit_on_broken_brick_is_not_a_break() {
        let mut brick = Brick::new(Vec2::new(100.0, 100.0), 1);
        let mut ball = ball_at(100.0, 118.0);
        assert!(resolve_brick_ball(&mut brick, &mut ball).is_some_and(|hit| hit.destroyed));
        let again = resolve_brick_ball(&mut brick, &mut ball);
        assert_eq!(
            again,
            Some(BrickHit {
                remaining: -1,
                destroyed: false
            })
        );
        assert!(brick.destroyed);
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.0f32..50.0, ah in 0.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            br in 0.0f32..50.0,
        ) {
            let rect = Rectangle::new(Vec2::new(ax, ay), Vec2::new(aw, ah), Color::default());
            let circle = Circle::new(Vec2::new(bx, by), br, Color::default());
            prop_assert_eq!(intersects(&rect, &circle), intersects(&circle, &rect));
        }
    }
}
