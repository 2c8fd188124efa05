//! Macroquad-backed keyboard service
//!
//! Arrow keys or WASD move the robot one cell per axis per frame,
//! Space fires. Firing is edge-triggered so holding the key down does
//! not autofire.

use macroquad::prelude::*;

use super::KeyboardService;
use crate::casting::{Actor, Cast, Point};
use crate::config::GameConfig;

/// Glyph worn by projectiles the robot fires
const PROJECTILE_GLYPH: &str = "|";

pub struct KeyboardInput {
    cell_size: i32,
    fall_speed: i32,
    projectile_speed: i32,
    max_projectiles: usize,
}

impl KeyboardInput {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            fall_speed: config.fall_speed,
            projectile_speed: config.projectile_speed,
            max_projectiles: config.max_projectiles,
        }
    }
}

impl KeyboardService for KeyboardInput {
    fn direction(&self) -> Point {
        let mut dx = 0;
        let mut dy = 0;
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            dx -= 1;
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            dx += 1;
        }
        if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
            dy -= 1;
        }
        if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
            dy += 1;
        }
        Point::new(dx, dy).scale(self.cell_size)
    }

    fn falling_velocity(&self) -> Point {
        Point::new(0, self.fall_speed)
    }

    fn rising_velocity(&self) -> Point {
        Point::new(0, -self.projectile_speed)
    }

    fn fire_projectile(&mut self, robot: &Actor, cast: &mut Cast) {
        if !is_key_pressed(KeyCode::Space) {
            return;
        }
        cast.arm_projectile(
            robot.position,
            crate::casting::Color::YELLOW,
            PROJECTILE_GLYPH,
            self.max_projectiles,
        );
    }
}
