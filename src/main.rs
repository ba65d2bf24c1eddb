//! Arkanoid entry point
//!
//! Native headless driver: plays one round with an autopilot pointer that
//! tracks the ball, rendering every frame into a software framebuffer.
//! Pass a JSON config path as the first argument to override defaults.

use arkanoid::consts::{BACKGROUND, FRAME_DT};
use arkanoid::renderer::{Framebuffer, Renderer};
use arkanoid::sim::{Ball, Brick, GameEvent};
use arkanoid::{Game, GameConfig, GamePhase, TickInput, tick};

/// Give up after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Arkanoid (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from(path),
        None => GameConfig::default(),
    };
    let world = config.world;

    let mut game = Game::new(config);
    let mut framebuffer = Framebuffer::new(world.width as u32, world.height as u32);
    let mut input = TickInput::centered(&world);
    game.restart();

    let mut frames = 0;
    let mut bricks_broken = 0;
    while frames < MAX_FRAMES {
        // Autopilot: follow the ball with a drifting offset so rallies vary
        if let Some(ball) = game.store().iter::<Ball>().next() {
            let time_factor = frames as f32 * 0.05;
            input.pointer.x = ball.pos().x + time_factor.sin() * 20.0;
        }
        // Serve whenever the round is waiting
        input.tap = game.phase() == GamePhase::Paused;

        framebuffer.clear(BACKGROUND);
        let running = tick(&mut game, &input);
        if running {
            game.draw(&mut framebuffer);
        }

        for event in game.drain_events() {
            match event {
                GameEvent::BrickDestroyed => bricks_broken += 1,
                GameEvent::LifeLost { remaining } => log::info!("Ball lost - {} lives left", remaining),
                _ => {}
            }
        }

        frames += 1;
        if !running && matches!(game.phase(), GamePhase::Victory | GamePhase::GameOver) {
            break;
        }
    }

    let outcome = game.phase().status_text().unwrap_or("Out of time");
    log::info!(
        "{} after {} frames ({:.1}s simulated)",
        outcome,
        frames,
        frames as f32 * FRAME_DT
    );
    println!(
        "{} - {} bricks broken, {} left, {}",
        outcome,
        bricks_broken,
        game.store().count::<Brick>(),
        game.lives_text()
    );
}
