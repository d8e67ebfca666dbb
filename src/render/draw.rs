//! Effectful drawing, surface-injected
//!
//! Each entity draws itself through a `&mut dyn Surface` parameter
//! rather than holding a surface. Draw order is ship, bullets, aliens,
//! blocks, HUD; later draws may overlap earlier ones, which only
//! affects visual layering.

use glam::Vec2;

use super::sprites::{
    ALIEN_PALETTE, ALIEN_PATTERN, BLOCK_PATTERN, BLOCK_TEAL, Color, PALE_BLUE, RED, SHIP_PATTERN,
    SPRITE_CELL, WHITE,
};
use super::{Surface, TextAlign, TextStyle};
use crate::consts::*;
use crate::sim::{Alien, Block, Bullet, BulletKind, GameState, PlayerShip};

/// Caption style for the small per-entity labels
const CAPTION: TextStyle = TextStyle {
    size_px: 8.0,
    color: WHITE,
    align: TextAlign::Center,
};

/// Stamp a pattern into `size`, one fixed-size fill per 'x' cell.
fn stamp_pattern(
    surface: &mut dyn Surface,
    pattern: &[&str],
    origin: Vec2,
    size: Vec2,
    color: Color,
) {
    let rows = pattern.len() as f32;
    for (row, line) in pattern.iter().enumerate() {
        let cols = line.len() as f32;
        for (col, cell) in line.chars().enumerate() {
            if cell != 'x' {
                continue;
            }
            let cell_origin =
                origin + Vec2::new(col as f32 * (size.x / cols), row as f32 * (size.y / rows));
            surface.fill_rect(cell_origin, Vec2::splat(SPRITE_CELL), color);
        }
    }
}

impl PlayerShip {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let origin = Vec2::new(self.x, surface.height() - SHIP_HEIGHT);
        stamp_pattern(
            surface,
            &SHIP_PATTERN,
            origin,
            Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            WHITE,
        );
    }
}

impl Bullet {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = match self.kind {
            BulletKind::Default => RED,
            BulletKind::Super => PALE_BLUE,
        };
        surface.fill_rect(
            self.pos - Vec2::new(BULLET_WIDTH / 2.0, 0.0),
            Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            color,
        );
    }
}

impl Alien {
    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = ALIEN_PALETTE[self.color as usize % ALIEN_PALETTE.len()];
        stamp_pattern(
            surface,
            &ALIEN_PATTERN,
            self.pos,
            Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT),
            color,
        );
        // Remaining life, captioned under the sprite
        surface.fill_text(
            &self.life.to_string(),
            self.pos + Vec2::new(ALIEN_WIDTH / 2.0, ALIEN_HEIGHT + 10.0),
            CAPTION,
        );
    }
}

impl Block {
    pub fn draw(&self, surface: &mut dyn Surface) {
        stamp_pattern(
            surface,
            &BLOCK_PATTERN,
            self.pos,
            Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            BLOCK_TEAL,
        );
        // Ammo payload, captioned above the sprite
        surface.fill_text(
            &self.ammo_value.to_string(),
            self.pos + Vec2::new(BLOCK_WIDTH / 2.0, -5.0),
            CAPTION,
        );
    }
}

/// Draw one frame: ship, bullets, aliens, blocks, then the HUD.
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    state.ship.draw(surface);
    for bullet in &state.bullets {
        bullet.draw(surface);
    }
    for alien in &state.aliens {
        alien.draw(surface);
    }
    for block in &state.blocks {
        block.draw(surface);
    }

    let hud = TextStyle {
        size_px: 13.0,
        color: WHITE,
        align: TextAlign::Left,
    };
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 30.0),
        hud,
    );
    surface.fill_text(
        &format!("Health: {}", state.ship.health),
        Vec2::new(surface.width() - 300.0, 30.0),
        hud,
    );
    surface.fill_text(
        &format!("Ammo: {}", state.ship.ammo),
        Vec2::new(surface.width() - 150.0, 30.0),
        hud,
    );
}
