//! Per-frame simulation step
//!
//! Advances the world by exactly one discrete frame. Stage order is
//! load-bearing: later stages observe the collections as already
//! mutated by earlier stages within the same frame.

use glam::Vec2;

use super::collision::{point_in_rect, rects_overlap};
use super::state::{BulletKind, GameState, GameStatus};
use crate::consts::*;

impl GameState {
    /// Advance the simulation by one frame.
    ///
    /// `now_ms` must be monotonic non-decreasing across calls; the
    /// spawn-timer arithmetic assumes it and does not check. Skipping
    /// calls while paused or game-over is the host's job.
    pub fn update(&mut self, now_ms: f64) {
        self.spawn_stage(now_ms);
        self.bullet_stage();
        self.alien_stage();
        self.merge_stage();
        self.block_stage();
    }

    /// Current alien spawn delay: shrinks as score grows, floored.
    pub fn spawn_delay_ms(&self) -> f64 {
        (self.tuning.spawn_delay_base_ms - f64::from(self.score))
            .max(self.tuning.spawn_delay_floor_ms)
    }

    /// At most one spawn per frame, however far `now_ms` has advanced.
    fn spawn_stage(&mut self, now_ms: f64) {
        if now_ms - self.last_alien_spawn > self.spawn_delay_ms() {
            self.last_alien_spawn = now_ms;
            self.spawn_alien();
        }
    }

    /// Cull bullets against their pre-move position, then integrate.
    fn bullet_stage(&mut self) {
        self.bullets.retain(|b| b.pos.y > 0.0);
        let speed = self.tuning.bullet_speed;
        for bullet in &mut self.bullets {
            bullet.pos.y -= speed;
        }
    }

    /// Alien fall, bullet hits, and escape damage, in collection order.
    ///
    /// Removal is index-stable: a consumed bullet can never hit a second
    /// alien, and removing the current alien never skips or double-visits
    /// a neighbour.
    fn alien_stage(&mut self) {
        let alien_size = Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT);

        let mut ai = 0;
        while ai < self.aliens.len() {
            self.aliens[ai].pos.y += self.tuning.alien_fall_speed;

            let mut killed = false;
            let mut bi = 0;
            while bi < self.bullets.len() {
                if !point_in_rect(self.bullets[bi].pos, self.aliens[ai].pos, alien_size) {
                    bi += 1;
                    continue;
                }
                let kind = self.bullets[bi].kind;
                self.bullets.remove(bi);

                let alien = &mut self.aliens[ai];
                if kind == BulletKind::Super {
                    // One-shot: zero first, the shared decrement below
                    // still applies
                    alien.life = 0;
                }
                alien.life -= 1;
                if alien.life <= 0 {
                    self.aliens.remove(ai);
                    self.score += self.tuning.kill_reward;
                    killed = true;
                    break;
                }
            }
            if killed {
                // `ai` already addresses the next alien
                continue;
            }

            // Escape: an alien past the bottom edge damages the ship by
            // its remaining life, floored at zero health
            if self.aliens[ai].pos.y > self.field.y {
                let damage = self.aliens[ai].life.max(0) as u32;
                self.ship.health = self.ship.health.saturating_sub(damage);
                self.aliens.remove(ai);
                if self.ship.health == 0 && self.status == GameStatus::Started {
                    self.status = GameStatus::GameOver;
                    log::info!("game over at score {}", self.score);
                }
                continue;
            }

            ai += 1;
        }
    }

    /// Merge nearby blocks pairwise, lowest y first.
    ///
    /// Boxes are padded by the merge slack on both axes; the lower block
    /// of a pair must have fallen past the merge threshold, so blocks
    /// fresh off the top edge never consolidate at spawn. Values are
    /// summed, the survivor relocates to the ceiling of the midpoint.
    fn merge_stage(&mut self) {
        self.blocks.sort_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        let padded = Vec2::new(
            BLOCK_WIDTH + self.tuning.merge_slack,
            BLOCK_HEIGHT + self.tuning.merge_slack,
        );
        let mut i = 0;
        while i < self.blocks.len() {
            let mut j = i + 1;
            while j < self.blocks.len() {
                let near =
                    rects_overlap(self.blocks[i].pos, padded, self.blocks[j].pos, padded);
                if near && self.blocks[i].pos.y > self.tuning.merge_min_y {
                    // j > i, so removing j leaves i stable; the block
                    // shifted into j's slot is re-tested next iteration
                    let other = self.blocks.remove(j);
                    let block = &mut self.blocks[i];
                    block.health_value += other.health_value;
                    block.ammo_value += other.ammo_value;
                    block.pos = ((block.pos + other.pos) / 2.0).ceil();
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }

    /// Block fall (richer blocks fall faster, capped) and ship pickup.
    fn block_stage(&mut self) {
        let ship_pos = Vec2::new(self.ship.x, self.field.y - SHIP_HEIGHT);
        let ship_size = Vec2::new(SHIP_WIDTH, SHIP_HEIGHT);
        let block_size = Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT);

        let mut i = 0;
        while i < self.blocks.len() {
            let richness = (self.blocks[i].health_value + self.blocks[i].ammo_value) as f32
                / self.tuning.block_value_scale;
            self.blocks[i].pos.y +=
                self.tuning.block_fall_speed * richness.min(self.tuning.block_speed_cap);

            if rects_overlap(self.blocks[i].pos, block_size, ship_pos, ship_size) {
                let block = self.blocks.remove(i);
                self.ship.health += block.health_value; // no ceiling
                self.ship.ammo =
                    (self.ship.ammo + block.ammo_value).min(self.tuning.max_ammo);
                log::debug!(
                    "pickup: +{} health +{} ammo",
                    block.health_value,
                    block.ammo_value
                );
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Alien, Block, Bullet};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Vec2::new(800.0, 600.0), 7, Tuning::default())
    }

    fn alien(x: f32, y: f32, life: i32) -> Alien {
        Alien {
            pos: Vec2::new(x, y),
            life,
            color: 0,
        }
    }

    fn bullet(x: f32, y: f32, kind: BulletKind) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            kind,
        }
    }

    fn block(x: f32, y: f32, health: u32, ammo: u32) -> Block {
        Block {
            pos: Vec2::new(x, y),
            health_value: health,
            ammo_value: ammo,
        }
    }

    #[test]
    fn test_spawn_delay_shrinks_to_floor() {
        let mut s = state();
        assert_eq!(s.spawn_delay_ms(), 2000.0);
        s.score = 300;
        assert_eq!(s.spawn_delay_ms(), 1700.0);
        s.score = 1600;
        assert_eq!(s.spawn_delay_ms(), 500.0);
        s.score = 100_000;
        assert_eq!(s.spawn_delay_ms(), 500.0);
    }

    #[test]
    fn test_at_most_one_spawn_per_update() {
        let mut s = state();
        // Far past the delay: still exactly one alien, no catch-up
        s.update(1_000_000.0);
        assert_eq!(s.aliens.len(), 1);
        assert_eq!(s.last_alien_spawn, 1_000_000.0);
        // Spawned at y=0, advanced by the fall speed in the same frame
        assert_eq!(s.aliens[0].pos.y, 1.0);

        // Same timestamp again: timer just reset, nothing spawns
        s.update(1_000_000.0);
        assert_eq!(s.aliens.len(), 1);
    }

    #[test]
    fn test_bullet_culled_against_pre_move_position() {
        let mut s = state();
        s.bullets.push(bullet(10.0, 5.0, BulletKind::Default));
        s.bullets.push(bullet(20.0, 0.0, BulletKind::Default));

        s.update(0.0);
        // y=0 culled before the move; y=5 moved to -2
        assert_eq!(s.bullets.len(), 1);
        assert_eq!(s.bullets[0].pos.y, 5.0 - s.tuning.bullet_speed);

        s.update(0.0);
        assert!(s.bullets.is_empty());
    }

    #[test]
    fn test_default_hit_decrements_life() {
        let mut s = state();
        s.aliens.push(alien(100.0, 100.0, 3));
        // Lands at y=115 after the move, inside the box at y in (101, 131)
        s.bullets.push(bullet(120.0, 122.0, BulletKind::Default));

        s.update(0.0);
        assert_eq!(s.aliens.len(), 1);
        assert_eq!(s.aliens[0].life, 2);
        assert!(s.bullets.is_empty());
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_kill_reward() {
        let mut s = state();
        s.aliens.push(alien(100.0, 100.0, 1));
        s.bullets.push(bullet(120.0, 122.0, BulletKind::Default));

        s.update(0.0);
        assert!(s.aliens.is_empty());
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_super_bullet_one_shots() {
        let mut s = state();
        s.aliens.push(alien(100.0, 100.0, 10));
        s.bullets.push(bullet(120.0, 122.0, BulletKind::Super));

        s.update(0.0);
        assert!(s.aliens.is_empty());
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_consumed_bullet_hits_only_first_alien() {
        let mut s = state();
        // Both boxes contain the bullet's post-move position (y=115)
        s.aliens.push(alien(100.0, 100.0, 5));
        s.aliens.push(alien(100.0, 90.0, 5));
        s.bullets.push(bullet(120.0, 122.0, BulletKind::Default));

        s.update(0.0);
        assert_eq!(s.aliens[0].life, 4);
        assert_eq!(s.aliens[1].life, 5);
        assert!(s.bullets.is_empty());
    }

    #[test]
    fn test_kill_does_not_skip_next_alien() {
        let mut s = state();
        s.aliens.push(alien(100.0, 100.0, 1));
        s.aliens.push(alien(300.0, 100.0, 2));
        s.bullets.push(bullet(120.0, 122.0, BulletKind::Default));

        s.update(0.0);
        // First alien killed; second still advanced this frame
        assert_eq!(s.aliens.len(), 1);
        assert_eq!(s.aliens[0].pos.y, 101.0);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_escape_damages_by_remaining_life() {
        let mut s = state();
        s.aliens.push(alien(100.0, 600.0, 4));

        s.update(0.0);
        assert!(s.aliens.is_empty());
        assert_eq!(s.ship.health, 96);
        assert_eq!(s.status, GameStatus::Started);
    }

    #[test]
    fn test_escape_health_floors_at_zero() {
        let mut s = state();
        s.ship.health = 2;
        s.aliens.push(alien(100.0, 600.0, 5));

        s.update(0.0);
        assert_eq!(s.ship.health, 0);
        assert_eq!(s.status, GameStatus::GameOver);
    }

    #[test]
    fn test_simultaneous_escapes_stack_undamped() {
        let mut s = state();
        s.aliens.push(alien(100.0, 600.0, 30));
        s.aliens.push(alien(300.0, 600.0, 40));
        s.aliens.push(alien(500.0, 600.0, 50));

        s.update(0.0);
        assert!(s.aliens.is_empty());
        assert_eq!(s.ship.health, 0);
    }

    #[test]
    fn test_blocks_near_top_never_merge() {
        let mut s = state();
        s.blocks.push(block(100.0, 10.0, 5, 5));
        s.blocks.push(block(110.0, 20.0, 5, 5));

        s.update(0.0);
        assert_eq!(s.blocks.len(), 2);
    }

    #[test]
    fn test_overlapping_blocks_merge_with_conserved_values() {
        let mut s = state();
        s.blocks.push(block(120.0, 130.0, 5, 7));
        s.blocks.push(block(100.0, 100.0, 10, 20));

        s.update(0.0);
        assert_eq!(s.blocks.len(), 1);
        let merged = &s.blocks[0];
        assert_eq!(merged.health_value, 15);
        assert_eq!(merged.ammo_value, 27);
        // Ceiling of the midpoint, then one frame of fall
        assert_eq!(merged.pos.x, 110.0);
        let speed = 4.0 * f32::min(42.0 / 50.0, 2.0);
        assert_eq!(merged.pos.y, 115.0 + speed);
    }

    #[test]
    fn test_block_fall_speed_caps() {
        let mut s = state();
        // Richness 600/50 = 12 caps at 2, so speed is 8
        s.blocks.push(block(100.0, 100.0, 0, 600));

        s.update(0.0);
        assert_eq!(s.blocks[0].pos.y, 108.0);
    }

    #[test]
    fn test_pickup_caps_ammo_and_boosts_health() {
        let mut s = state();
        s.ship.x = 200.0;
        s.ship.ammo = 500;
        s.blocks.push(block(200.0, 560.0, 30, 600));

        s.update(0.0);
        assert!(s.blocks.is_empty());
        assert_eq!(s.ship.ammo, 1000); // capped, not 1100
        assert_eq!(s.ship.health, 130); // no ceiling
    }

    #[test]
    fn test_block_misses_ship_and_keeps_falling() {
        let mut s = state();
        s.ship.x = 700.0;
        s.blocks.push(block(100.0, 560.0, 0, 50));

        s.update(0.0);
        assert_eq!(s.blocks.len(), 1);
        assert_eq!(s.blocks[0].pos.y, 564.0);
    }

    #[test]
    fn test_same_seed_same_round() {
        let mut a = state();
        let mut b = state();

        for now in [2100.0, 4200.0, 6300.0, 8400.0] {
            a.update(now);
            b.update(now);
        }

        assert_eq!(a.aliens, b.aliens);
        assert_eq!(a.last_alien_spawn, b.last_alien_spawn);
        assert_eq!(a.score, b.score);
    }
}
