//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Seeded RNG only
//! - One discrete frame per `update` call
//!
//! Given a seed and a timestamp sequence, a whole round is reproducible.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{point_in_rect, rects_overlap};
pub use state::{Alien, Block, Bullet, BulletKind, GameState, GameStatus, PlayerShip};
