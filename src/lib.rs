//! Pixel Invaders - a falling-blocks invaders arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, economy)
//! - `render`: Surface abstraction and pixel-art drawing
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use sim::{GameState, GameStatus};
pub use tuning::Tuning;

/// Fixed entity geometry (pixels). Balance values live in [`tuning`].
pub mod consts {
    /// Player ship bounding box, anchored to the bottom edge of the field
    pub const SHIP_WIDTH: f32 = 45.0;
    pub const SHIP_HEIGHT: f32 = 25.0;
    /// Horizontal steering step per input event
    pub const SHIP_SPEED: f32 = 5.0;

    /// Alien bounding box
    pub const ALIEN_WIDTH: f32 = 40.0;
    pub const ALIEN_HEIGHT: f32 = 30.0;

    /// Resource block bounding box
    pub const BLOCK_WIDTH: f32 = 40.0;
    pub const BLOCK_HEIGHT: f32 = 40.0;

    /// Bullet rect (visual only; collision treats bullets as points)
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;

    /// Number of entries in the alien color palette
    pub const ALIEN_COLOR_COUNT: u32 = 3;
}
