use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{warn, LevelFilter};
use ratatui::style::Color;
use serde::Deserialize;

use crate::error::AppError;

/// Side length of one grid cell in field units.
pub const CELL_SIZE: i32 = 20;

/// Field width in field units (40 columns).
pub const FIELD_WIDTH: i32 = 800;

/// Field height in field units (30 rows).
pub const FIELD_HEIGHT: i32 = 600;

/// Segment count of a freshly started snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score added per eaten fruit.
pub const FRUIT_REWARD: u32 = 10;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// How long the game-over frame stays up before the program exits.
pub const GAME_OVER_HOLD_MS: u64 = 2_000;

/// Terminal columns used to draw one grid cell.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
pub const FRUIT_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SCORE_COLOR: Color = Color::Rgb(250, 250, 60);
pub const BACKGROUND_COLOR: Color = Color::Black;

pub const GLYPH_SNAKE: &str = "[]";
pub const GLYPH_FRUIT: &str = "██";

const APP_DIR_NAME: &str = "yet-another-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "snake.log";

/// Runtime settings read from an optional JSON file.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tick_interval_ms: u64,
    pub game_over_hold_ms: u64,
    /// Fixed fruit seed; a random one is drawn and logged when absent.
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
            seed: None,
            log_level: "info".to_owned(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Loads settings from `explicit` when given (the file must exist), or
    /// from the platform config directory when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let Some(path) = default_settings_path() else {
                    return Ok(Self::default());
                };
                match Self::load_from_path(&path) {
                    Err(AppError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    /// Parses and validates one settings file.
    pub fn load_from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw).map_err(|error| AppError::Config {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Parsed log level; falls back to `Info` on unknown names.
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            warn!("unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// Log file location, defaulting to the platform data directory.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    fn validate(&self, path: &Path) -> Result<(), AppError> {
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config {
                path: path.to_path_buf(),
                message: "tick_interval_ms must be greater than zero".to_owned(),
            });
        }

        if LevelFilter::from_str(&self.log_level).is_err() {
            return Err(AppError::Config {
                path: path.to_path_buf(),
                message: format!("unknown log_level {:?}", self.log_level),
            });
        }

        Ok(())
    }
}

/// Returns `dirs::config_dir()/yet-another-snake/settings.json`.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}
