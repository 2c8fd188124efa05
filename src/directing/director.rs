//! The Director runs the frame loop and resolves the game rules.
//!
//! Per frame: get_inputs -> do_updates -> do_outputs, while the video
//! surface stays open and lives remain. Input only sets velocities and
//! may arm a projectile; updates own every game-state mutation; output
//! only reads. The phases never reorder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::casting::{Cast, Point};
use crate::config::GameConfig;
use crate::services::{KeyboardService, VideoService};

pub struct Director<K, V> {
    score: u32,
    lives: u32,
    cell_size: i32,
    pub keyboard: K,
    pub video: V,
    /// Process-lifetime generator; respawns draw from this and nothing else
    rng: StdRng,
}

impl<K: KeyboardService, V: VideoService> Director<K, V> {
    pub fn new(keyboard: K, video: V, config: &GameConfig) -> Self {
        Self::with_rng(keyboard, video, config, StdRng::from_entropy())
    }

    /// Deterministic runs: tests pin the seed, the game never does.
    pub fn with_rng(keyboard: K, video: V, config: &GameConfig, rng: StdRng) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            cell_size: config.cell_size,
            keyboard,
            video,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Run the game to completion: lives exhausted, or the surface
    /// closed from outside. Both are polled at the top of each frame.
    pub async fn start_game(&mut self, cast: &mut Cast) {
        self.video.open();
        while self.video.is_open() && self.lives > 0 {
            self.get_inputs(cast);
            self.do_updates(cast);
            self.do_outputs(cast).await;
        }
        self.video.close();
    }

    /// Apply per-frame velocities and advance the unmanned actors.
    /// The robot only receives its velocity here; it moves in
    /// do_updates. Spent pool projectiles stay parked.
    pub fn get_inputs(&mut self, cast: &mut Cast) {
        let max_x = self.video.width();
        let max_y = self.video.height();

        for artifact in &mut cast.artifacts {
            artifact.actor.velocity = self.keyboard.falling_velocity();
            artifact.actor.move_next(max_x, max_y);
        }

        for projectile in cast.projectiles.iter_mut().filter(|p| !p.is_hidden()) {
            projectile.velocity = self.keyboard.rising_velocity();
            projectile.move_next(max_x, max_y);
        }

        cast.robot.velocity = self.keyboard.direction();

        let robot = cast.robot.clone();
        self.keyboard.fire_projectile(&robot, cast);
    }

    /// Advance the robot and resolve collisions.
    ///
    /// Order is fixed: banner refresh, robot motion, robot-artifact
    /// hits, projectile-artifact hits (retiring the projectile on
    /// impact), then the spent sweep over post-collision rows.
    pub fn do_updates(&mut self, cast: &mut Cast) {
        cast.banner.text = format!("Score: {}     Lives: {}", self.score, self.lives);

        let max_x = self.video.width();
        let max_y = self.video.height();
        cast.robot.move_next(max_x, max_y);

        let columns = max_x / self.cell_size;

        // Robot-artifact: an exact position match costs a life
        for artifact in &mut cast.artifacts {
            if artifact.actor.position == cast.robot.position {
                self.lives = self.lives.saturating_sub(1);
                cast.banner.text = format!("Score: {}", self.score);
                artifact.actor.position =
                    respawn_position(&mut self.rng, columns, self.cell_size);
            }
        }

        // Projectile-artifact: the hit window is the artifact's
        // position plus one pixel either side, on the artifact's row
        for projectile in cast.projectiles.iter_mut().filter(|p| !p.is_hidden()) {
            for artifact in &mut cast.artifacts {
                let on_row = projectile.position.y == artifact.actor.position.y;
                let in_window = (projectile.position.x - artifact.actor.position.x).abs() <= 1;
                if on_row && in_window {
                    self.score += artifact.score;
                    cast.banner.text = format!("Score: {}", self.score);
                    artifact.actor.position =
                        respawn_position(&mut self.rng, columns, self.cell_size);
                    // The hit spends the projectile on the spot
                    projectile.hide();
                    projectile.position = Point::default();
                    break;
                }
            }
        }

        // Spent sweep: anything on the top row is done flying
        for projectile in &mut cast.projectiles {
            if projectile.position.y == 0 {
                projectile.hide();
                projectile.position = Point::default();
            }
        }
    }

    /// Draw the frame. Reads the cast, mutates no game state.
    pub async fn do_outputs(&mut self, cast: &Cast) {
        self.video.clear();
        self.video.draw_actors(&cast.all_actors());
        self.video.flush().await;
    }
}

/// Fresh top-row position: a random column in [1, columns) snapped to
/// the cell grid.
fn respawn_position(rng: &mut StdRng, columns: i32, cell_size: i32) -> Point {
    Point::new(rng.gen_range(1..columns), 0).scale(cell_size)
}
