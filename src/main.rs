//! Pixel Invaders entry point
//!
//! Headless demo host: runs one round with a small autopilot and a
//! no-op surface, logging progress. A real front end supplies its own
//! `Surface` implementation and input wiring; the loop below shows the
//! host contract - gate on `status`/`forced_pause`, then one `update`
//! and one `draw_frame` per tick.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use pixel_invaders::consts::*;
use pixel_invaders::render::{Color, Surface, TextStyle, draw_frame};
use pixel_invaders::sim::{BulletKind, GameState, GameStatus};
use pixel_invaders::tuning::Tuning;

/// Surface that swallows every draw call.
struct NullSurface {
    size: Vec2,
}

impl Surface for NullSurface {
    fn width(&self) -> f32 {
        self.size.x
    }
    fn height(&self) -> f32 {
        self.size.y
    }
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {}
    fn fill_text(&mut self, _text: &str, _pos: Vec2, _style: TextStyle) {}
}

fn main() {
    env_logger::init();

    let tuning = Tuning::load_or_default("tuning.json");
    let field = Vec2::new(800.0, 600.0);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(field, seed, tuning);
    let mut surface = NullSurface { size: field };

    log::info!("demo round starting (seed {seed})");

    let frame_ms = 1000.0 / 60.0;
    for frame in 0u64..3600 {
        // Host responsibility: skip ticks when paused or over
        if state.forced_pause || state.status != GameStatus::Started {
            break;
        }

        autopilot(&mut state, frame);
        state.update(frame as f64 * frame_ms);
        draw_frame(&state, &mut surface);

        if frame % 600 == 0 {
            log::info!(
                "frame {frame}: score {} health {} ammo {}",
                state.score,
                state.ship.health,
                state.ship.ammo
            );
        }
    }

    log::info!(
        "demo round over: score {} health {} ammo {}",
        state.score,
        state.ship.health,
        state.ship.ammo
    );
}

/// Steer at the nearest alien and shoot when lined up; drop a supply
/// block on a fixed timer so the pickup economy gets exercised.
fn autopilot(state: &mut GameState, frame: u64) {
    if frame % 240 == 120 {
        state.drop_block(10, 40);
    }

    let ship_center = state.ship.x + SHIP_WIDTH / 2.0;
    let target = state
        .aliens
        .iter()
        .map(|a| a.pos.x + ALIEN_WIDTH / 2.0)
        .min_by(|a, b| (a - ship_center).abs().total_cmp(&(b - ship_center).abs()));

    if let Some(target) = target {
        let dx = (target - ship_center).clamp(-SHIP_SPEED, SHIP_SPEED);
        state.steer(dx);
        if (target - ship_center).abs() < ALIEN_WIDTH / 2.0 && frame % 6 == 0 {
            state.fire(BulletKind::Default);
        }
    }
}
