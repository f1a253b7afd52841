//! Assorted constants & hard-coded configuration
//!
//! Values marked as defaults can be overridden by the configuration file; see
//! [`crate::config`].
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default width of the playing field, in grid cells
pub(crate) const GRID_WIDTH: u16 = 30;

/// Default height of the playing field, in grid cells
pub(crate) const GRID_HEIGHT: u16 = 20;

/// Smallest permitted grid width or height
pub(crate) const MIN_GRID_EXTENT: u16 = 3;

/// Largest permitted grid width or height
pub(crate) const MAX_GRID_EXTENT: u16 = 1000;

/// Number of terminal columns & rows used to draw a single grid cell.
/// Terminal cells are roughly twice as tall as they are wide, so two columns
/// make a grid cell look square.
pub(crate) const CELL_SCALE: Size = Size {
    width: 2,
    height: 1,
};

/// Default time between simulation ticks
pub(crate) const SIMULATION_PERIOD: Duration = Duration::from_millis(100);

/// Default time between redraws of the playing field
pub(crate) const RENDER_PERIOD: Duration = Duration::from_millis(16);

/// Default fill color for the snake's head and body
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Default fill color for the seed
pub(crate) const SEED_COLOR: Color = Color::LightRed;

/// Default style for the PAUSE and GAME OVER banners
pub(crate) const BANNER_STYLE: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::REVERSED);

/// Symbol written into each terminal cell of a filled rectangle; the fill
/// color is applied as the cell's background.
pub(crate) const FILL_SYMBOL: &str = " ";

/// Banner drawn when the game is paused
pub(crate) const PAUSE_TEXT: &str = " PAUSE ";

/// Banner drawn when the snake runs into itself
pub(crate) const GAME_OVER_TEXT: &str = " GAME OVER ";

/// Style for key codes shown in the help line
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// If rejection sampling for a free seed cell fails this many times per grid
/// cell, fall back to enumerating the free cells.
pub(crate) const SEED_SAMPLES_PER_CELL: usize = 4;

/// Name of the directory under the user's config/data directories
pub(crate) const APP_DIR_NAME: &str = "wrapsnake";

/// Environment variable for raising the log level
pub(crate) const LOG_LEVEL_VAR: &str = "WRAPSNAKE_LOG";
