//! Service boundary between the Director and the platform
//!
//! The Director consumes these two capability sets and never
//! constructs them: `main` wires in the macroquad-backed versions,
//! tests substitute in-memory fakes.

mod keyboard;
mod video;

pub use keyboard::KeyboardInput;
pub use video::ScreenVideo;

use crate::casting::{Actor, Cast, Point};

/// Keyboard input as the Director consumes it.
pub trait KeyboardService {
    /// Robot velocity from the directional keys
    fn direction(&self) -> Point;

    /// Per-frame step applied to every artifact
    fn falling_velocity(&self) -> Point;

    /// Per-frame step applied to every live projectile
    fn rising_velocity(&self) -> Point;

    /// Fire-key handling: re-arm or insert a projectile at the robot's
    /// position. Rate limiting (press edge, in-flight cap) lives here,
    /// not in the Director.
    fn fire_projectile(&mut self, robot: &Actor, cast: &mut Cast);
}

/// Render surface as the Director consumes it.
#[allow(async_fn_in_trait)] // single-threaded loop, no Send bound wanted
pub trait VideoService {
    fn open(&mut self);
    fn close(&mut self);
    fn is_open(&self) -> bool;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self);
    fn draw_actors(&mut self, actors: &[&Actor]);

    /// Present the frame; the only suspension point in the loop.
    async fn flush(&mut self);
}
