//! ROBO-RAIN: a falling-artifacts arcade shooter
//!
//! A robot dodges the artifact rain and shoots back:
//! - Arrow keys / WASD to move, Space to fire, ESC to quit
//! - Every artifact shot down scores its point value
//! - Every artifact that lands on the robot costs a life
//! - Three lives, then it's over

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod casting;
mod config;
mod directing;
mod services;

// Targeted imports: the prelude glob would shadow the rand crate with
// macroquad's own rand module
use macroquad::prelude::{request_new_screen_size, Conf};
use rand::Rng;

use casting::{Actor, Artifact, Cast, Color, Point};
use config::{load_config, GameConfig};
use directing::Director;
use services::{KeyboardInput, ScreenVideo};

const CONFIG_PATH: &str = "assets/config.ron";

/// Glyphs an artifact can wear, with the score for shooting one down
const ARTIFACT_GLYPHS: &[(&str, u32)] = &[("o", 10), ("*", 20), ("%", 30), ("@", 40)];

fn window_conf() -> Conf {
    let size = GameConfig::default();
    Conf {
        window_title: format!("ROBO-RAIN v{}", VERSION),
        window_width: size.width(),
        window_height: size.height(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = match load_config(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad config at {}: {}", CONFIG_PATH, e);
            std::process::exit(1);
        }
    };

    // The window opens at the default size before the config is read
    let default_size = GameConfig::default();
    if (config.width(), config.height()) != (default_size.width(), default_size.height()) {
        request_new_screen_size(config.width() as f32, config.height() as f32);
    }

    println!("=== ROBO-RAIN v{} ===", VERSION);

    let mut rng = rand::thread_rng();
    let mut cast = build_cast(&config, &mut rng);

    let keyboard = KeyboardInput::new(&config);
    let video = ScreenVideo::new(config.width(), config.height());
    let mut director = Director::new(keyboard, video, &config);

    director.start_game(&mut cast).await;

    if director.lives() == 0 {
        println!("Game over. Final score: {}", director.score());
    } else {
        println!(
            "Quit with {} lives left. Final score: {}",
            director.lives(),
            director.score()
        );
    }
}

/// One robot, one banner, `artifact_count` artifacts scattered over
/// the upper half of the playfield. Projectiles arrive later through
/// the keyboard service's pool.
fn build_cast(config: &GameConfig, rng: &mut impl Rng) -> Cast {
    let robot = Actor::new(
        "#",
        Point::new(config.columns / 2, config.rows - 1).scale(config.cell_size),
        Color::WHITE,
    );
    let banner = Actor::new("", Point::new(1, 0).scale(config.cell_size), Color::WHITE);

    let mut cast = Cast::new(robot, banner);
    for _ in 0..config.artifact_count {
        let (glyph, score) = ARTIFACT_GLYPHS[rng.gen_range(0..ARTIFACT_GLYPHS.len())];
        let position = Point::new(
            rng.gen_range(0..config.columns),
            rng.gen_range(0..config.rows / 2),
        )
        .scale(config.cell_size);
        let color = Color::new(
            rng.gen_range(128..=255),
            rng.gen_range(128..=255),
            rng.gen_range(128..=255),
        );
        cast.add_artifact(Artifact::new(Actor::new(glyph, position, color), score));
    }
    cast
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cast_matches_config() {
        let config = GameConfig::default();
        let mut rng = rand::thread_rng();
        let cast = build_cast(&config, &mut rng);

        assert_eq!(cast.artifacts.len(), config.artifact_count);
        assert!(cast.projectiles.is_empty());
        // Robot starts on the bottom row, snapped to the grid
        assert_eq!(cast.robot.position.y, (config.rows - 1) * config.cell_size);
        assert_eq!(cast.robot.position.x % config.cell_size, 0);
        // Artifacts start in the upper half, on the grid
        for artifact in &cast.artifacts {
            assert!(artifact.actor.position.y < config.height() / 2);
            assert_eq!(artifact.actor.position.x % config.cell_size, 0);
            assert!(artifact.score > 0);
        }
    }
}
