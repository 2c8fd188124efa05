//! Game tunables
//!
//! Loaded from a RON file when present, compiled defaults otherwise.
//! A malformed or out-of-range file is an error rather than a silent
//! fallback, so a typo does not quietly ship a broken playfield.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Validation bounds, to keep a hand-edited config from wedging the game
pub mod limits {
    pub const MAX_CELL_SIZE: i32 = 128;
    pub const MAX_GRID: i32 = 1024;
    pub const MAX_ARTIFACTS: usize = 1024;
    pub const MAX_PROJECTILES: usize = 256;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// All the knobs the game reads at startup.
///
/// Defaults reproduce the classic playfield: 15px cells on a 60x40
/// grid (900x600), 40 artifacts, 3 lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixels per grid cell; positions snap to this
    pub cell_size: i32,
    /// Playfield width in cells
    pub columns: i32,
    /// Playfield height in cells
    pub rows: i32,
    /// How many artifacts fall at once
    pub artifact_count: usize,
    pub starting_lives: u32,
    /// Downward pixels per frame for artifacts
    pub fall_speed: i32,
    /// Upward pixels per frame for projectiles
    pub projectile_speed: i32,
    /// In-flight cap for the projectile pool
    pub max_projectiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 15,
            columns: 60,
            rows: 40,
            artifact_count: 40,
            starting_lives: 3,
            fall_speed: 5,
            projectile_speed: 5,
            max_projectiles: 3,
        }
    }
}

impl GameConfig {
    /// Surface width in pixels
    pub fn width(&self) -> i32 {
        self.columns * self.cell_size
    }

    /// Surface height in pixels
    pub fn height(&self) -> i32 {
        self.rows * self.cell_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size < 1 || self.cell_size > limits::MAX_CELL_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "cell_size {} out of range 1..={}",
                self.cell_size,
                limits::MAX_CELL_SIZE
            )));
        }
        // Respawn picks a column in [1, columns), so two is the floor
        if self.columns < 2 || self.columns > limits::MAX_GRID {
            return Err(ConfigError::ValidationError(format!(
                "columns {} out of range 2..={}",
                self.columns,
                limits::MAX_GRID
            )));
        }
        // Setup scatters artifacts over the upper half, so two is the floor
        if self.rows < 2 || self.rows > limits::MAX_GRID {
            return Err(ConfigError::ValidationError(format!(
                "rows {} out of range 2..={}",
                self.rows,
                limits::MAX_GRID
            )));
        }
        if self.artifact_count < 1 || self.artifact_count > limits::MAX_ARTIFACTS {
            return Err(ConfigError::ValidationError(format!(
                "artifact_count {} out of range 1..={}",
                self.artifact_count,
                limits::MAX_ARTIFACTS
            )));
        }
        if self.starting_lives < 1 {
            return Err(ConfigError::ValidationError(
                "starting_lives must be at least 1".to_string(),
            ));
        }
        if self.fall_speed < 1 {
            return Err(ConfigError::ValidationError(
                "fall_speed must be at least 1".to_string(),
            ));
        }
        if self.projectile_speed < 1 {
            return Err(ConfigError::ValidationError(
                "projectile_speed must be at least 1".to_string(),
            ));
        }
        if self.max_projectiles < 1 || self.max_projectiles > limits::MAX_PROJECTILES {
            return Err(ConfigError::ValidationError(format!(
                "max_projectiles {} out of range 1..={}",
                self.max_projectiles,
                limits::MAX_PROJECTILES
            )));
        }
        Ok(())
    }
}

/// Load a config file, falling back to defaults when it does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let text = fs::read_to_string(path)?;
    let config: GameConfig = ron::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_pass_validation() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width(), 900);
        assert_eq!(config.height(), 600);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("nope.ron")).unwrap();
        assert_eq!(config.cell_size, GameConfig::default().cell_size);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "(artifact_count: 12, starting_lives: 5)").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.artifact_count, 12);
        assert_eq!(config.starting_lives, 5);
        // Unlisted fields keep their defaults
        assert_eq!(config.cell_size, 15);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let config = GameConfig {
            columns: 30,
            rows: 20,
            ..GameConfig::default()
        };
        fs::write(&path, ron::to_string(&config).unwrap()).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.columns, 30);
        assert_eq!(loaded.rows, 20);
        assert_eq!(loaded.width(), 450);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(cell_size: 0)").unwrap();

        match load_config(&path) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("cell_size")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "not ron at all {{{").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
