//! Render surface abstraction
//!
//! The sim never touches a real drawing backend. Entities draw through
//! an injected [`Surface`], so a front end can back it with a canvas,
//! a GPU pipeline, or nothing at all for headless runs. No call
//! returns anything the simulation consumes.

pub mod draw;
pub mod sprites;

pub use draw::draw_frame;
pub use sprites::{ALIEN_PALETTE, Color};

use glam::Vec2;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Font size, fill color and alignment for a text draw
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Minimal drawing contract the game renders through.
///
/// Implementations need filled rects plus left/center-aligned text
/// with a settable size and fill color. `width`/`height` double as the
/// play-field bounds the host feeds back into the sim.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}
