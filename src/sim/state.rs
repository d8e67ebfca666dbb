//! Game state and core simulation types
//!
//! All mutable game data lives here. The per-frame step is in
//! [`tick`](super::tick); this file owns the entities, the lifecycle
//! (`replay`) and the externally-driven operations (fire, steer,
//! block drops).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Session status. The host consults this (and `forced_pause`) to decide
/// whether to keep ticking; `update` itself never gates on either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Started,
    GameOver,
    Paused,
}

/// Bullet flavor. The collision pass branches exhaustively on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletKind {
    #[default]
    Default,
    /// One-shot kill on any alien it touches
    Super,
}

/// A bullet, treated as a point by collision and culled once y <= 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub kind: BulletKind,
}

/// A descending alien
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Vec2,
    /// Remaining hits. Signed: a super hit forces it to 0 before the
    /// shared decrement, so it can pass through -1 on the way out.
    /// An alien at life <= 0 is removed within the same update.
    pub life: i32,
    /// Palette index, visual only - the sim never reads it
    pub color: u32,
}

/// A falling resource block. Overlapping blocks merge (values summed,
/// position at the midpoint) once they have fallen past the merge
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub health_value: u32,
    pub ammo_value: u32,
}

/// The player's ship, anchored to the bottom edge of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerShip {
    pub x: f32,
    /// Clamped to [0, max_ammo] by every mutation path
    pub ammo: u32,
    /// Floors at 0; pickups have no ceiling
    pub health: u32,
}

impl PlayerShip {
    pub fn new(field_width: f32, tuning: &Tuning) -> Self {
        Self {
            x: field_width / 2.0 - SHIP_WIDTH / 2.0,
            ammo: tuning.default_ammo,
            health: tuning.default_health,
        }
    }

    /// Recenter and restore defaults. The ship is created once per
    /// session and mutated in place across replays.
    pub fn reset(&mut self, field_width: f32, tuning: &Tuning) {
        self.ammo = tuning.default_ammo;
        self.health = tuning.default_health;
        self.x = field_width / 2.0 - SHIP_WIDTH / 2.0;
    }
}

/// Complete game state. Owns every entity exclusively; entities hold no
/// back-references. Serializable end to end (the RNG included), so a
/// round can be snapshotted mid-flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// External pause override, independent of `status`
    pub forced_pause: bool,
    pub score: u32,
    pub ship: PlayerShip,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub blocks: Vec<Block>,
    /// Play-field size; the host refreshes this when the surface resizes
    pub field: Vec2,
    /// Timestamp (ms) of the most recent alien spawn
    pub last_alien_spawn: f64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session over a `field`-sized play area.
    pub fn new(field: Vec2, seed: u64, tuning: Tuning) -> Self {
        Self {
            status: GameStatus::Started,
            forced_pause: false,
            score: 0,
            ship: PlayerShip::new(field.x, &tuning),
            bullets: Vec::new(),
            aliens: Vec::new(),
            blocks: Vec::new(),
            field,
            last_alien_spawn: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Reset to a fresh round: status back to Started, collections
    /// cleared, ship recentered with default ammo/health, score zeroed.
    ///
    /// The sole path back to a playable state from `GameOver` or
    /// `Paused`. Idempotent - calling it twice yields the same state.
    pub fn replay(&mut self) {
        self.status = GameStatus::Started;
        self.bullets.clear();
        self.aliens.clear();
        self.blocks.clear();
        self.ship.reset(self.field.x, &self.tuning);
        self.score = 0;
        log::info!("round reset");
    }

    /// Fire a bullet from the ship's muzzle, debiting ammo.
    ///
    /// Returns false (and spawns nothing) when ammo can't cover the
    /// shot.
    pub fn fire(&mut self, kind: BulletKind) -> bool {
        let cost = match kind {
            BulletKind::Default => self.tuning.fire_cost_default,
            BulletKind::Super => self.tuning.fire_cost_super,
        };
        if self.ship.ammo < cost {
            return false;
        }
        self.ship.ammo -= cost;
        self.bullets.push(Bullet {
            pos: Vec2::new(
                self.ship.x + SHIP_WIDTH / 2.0,
                self.field.y - SHIP_HEIGHT,
            ),
            kind,
        });
        true
    }

    /// Move the ship horizontally, clamped to the field.
    pub fn steer(&mut self, dx: f32) {
        self.ship.x = (self.ship.x + dx).clamp(0.0, self.field.x - SHIP_WIDTH);
    }

    /// Drop a resource block at a uniform-random x along the top edge.
    /// Cadence is host-driven.
    pub fn drop_block(&mut self, health_value: u32, ammo_value: u32) {
        let span = (self.field.x - BLOCK_WIDTH).max(1.0);
        let x = self.rng.random_range(0.0..span);
        self.blocks.push(Block {
            pos: Vec2::new(x, 0.0),
            health_value,
            ammo_value,
        });
    }

    /// Spawn one alien along the top edge: uniform-random life in
    /// [1, max], uniform-random x, palette color picked at construction.
    pub(crate) fn spawn_alien(&mut self) {
        let life = self.rng.random_range(1..=self.tuning.alien_max_life) as i32;
        let span = (self.field.x - ALIEN_WIDTH).max(1.0);
        let x = self.rng.random_range(0.0..span);
        let color = self.rng.random_range(0..ALIEN_COLOR_COUNT);
        log::debug!("alien spawned at x={x:.0} with life {life}");
        self.aliens.push(Alien {
            pos: Vec2::new(x, 0.0),
            life,
            color,
        });
    }
}
