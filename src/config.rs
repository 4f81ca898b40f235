use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the square play grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridSize(pub u16);

impl GridSize {
    /// Returns the number of cells along one edge.
    #[must_use]
    pub fn side(self) -> u16 {
        self.0
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }
}

/// Default side length of the grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default tick interval at session start, in milliseconds.
pub const DEFAULT_INITIAL_SPEED_MS: u64 = 150;

/// Default lower bound for the tick interval, in milliseconds.
pub const DEFAULT_MIN_SPEED_MS: u64 = 50;

/// Default tick interval reduction per food eaten, in milliseconds.
pub const DEFAULT_SPEED_STEP_MS: u64 = 5;

/// Default number of obstacles placed at every reset.
pub const DEFAULT_OBSTACLE_COUNT: usize = 5;

/// Engine tuning fixed at process start.
///
/// Every field falls back to its default when missing from a config file, so
/// a file may override only the keys it cares about.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub grid_size: GridSize,
    pub initial_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    pub obstacle_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize(DEFAULT_GRID_SIZE),
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error(
        "grid of {cells} cells cannot hold {obstacles} obstacles plus the snake and food \
         (need obstacles + 1 < cells)"
    )]
    GridTooSmall { cells: usize, obstacles: usize },
    #[error("minimum speed must be greater than 0 ms")]
    ZeroMinimumSpeed,
    #[error("initial speed {initial_ms} ms is below the minimum {min_ms} ms")]
    SpeedBelowMinimum { initial_ms: u64, min_ms: u64 },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineConfig {
    /// Checks the invariants placement relies on.
    ///
    /// Placement resamples until it finds a free cell, so the grid must always
    /// have room for every obstacle, the start cell and one food.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size.side() == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let cells = self.grid_size.total_cells();
        if self.obstacle_count.saturating_add(1) >= cells {
            return Err(ConfigError::GridTooSmall {
                cells,
                obstacles: self.obstacle_count,
            });
        }

        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinimumSpeed);
        }

        if self.initial_speed_ms < self.min_speed_ms {
            return Err(ConfigError::SpeedBelowMinimum {
                initial_ms: self.initial_speed_ms,
                min_ms: self.min_speed_ms,
            });
        }

        Ok(())
    }

    /// Reads a JSON config file without validating it.
    ///
    /// Use this when more settings are merged in afterwards; call
    /// [`EngineConfig::validate`] on the final value.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the grid size and obstacle count where a value is given.
    #[must_use]
    pub fn with_overrides(mut self, grid_size: Option<u16>, obstacle_count: Option<usize>) -> Self {
        if let Some(side) = grid_size {
            self.grid_size = GridSize(side);
        }
        if let Some(count) = obstacle_count {
            self.obstacle_count = count;
        }
        self
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Colors applied to the play field and popups.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub obstacle: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_value: Color,
    pub hud_label: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on a dark field.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    obstacle: Color::Gray,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_value: Color::White,
    hud_label: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_OBSTACLE: &str = "▒";

/// Frame pacing for the terminal loop, independent of the engine tick.
pub const FRAME_INTERVAL_MS: u64 = 16;
