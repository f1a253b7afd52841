use crate::consts;
use crate::game::{Grid, Palette};
use ratatui::style::{Color, Style};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration: the built-in defaults, optionally overridden by a
/// configuration file
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Size of the playing field
    pub(crate) grid: Grid,

    /// Time between simulation ticks
    pub(crate) simulation_period: Duration,

    /// Time between redraws
    pub(crate) render_period: Duration,

    /// Fill colors for the snake & seed
    pub(crate) palette: Palette,

    /// Style for the PAUSE and GAME OVER banners
    pub(crate) banner_style: Style,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid: Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT),
            simulation_period: consts::SIMULATION_PERIOD,
            render_period: consts::RENDER_PERIOD,
            palette: Palette::default(),
            banner_style: consts::BANNER_STYLE,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if any values are out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    grid: RawGrid,
    timing: RawTiming,
    colors: RawColors,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawGrid {
    width: u16,
    height: u16,
}

impl Default for RawGrid {
    fn default() -> RawGrid {
        RawGrid {
            width: consts::GRID_WIDTH,
            height: consts::GRID_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawTiming {
    simulation_ms: u64,
    render_ms: u64,
}

impl Default for RawTiming {
    fn default() -> RawTiming {
        RawTiming {
            simulation_ms: duration_millis(consts::SIMULATION_PERIOD),
            render_ms: duration_millis(consts::RENDER_PERIOD),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawColors {
    snake: Option<String>,
    seed: Option<String>,
    banner: Option<String>,
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        let RawGrid { width, height } = value.grid;
        for (name, extent, scale) in [
            ("width", width, consts::CELL_SCALE.width),
            ("height", height, consts::CELL_SCALE.height),
        ] {
            if extent < consts::MIN_GRID_EXTENT {
                return Err(InvalidConfig::GridTooSmall { name, extent });
            }
            if extent > consts::MAX_GRID_EXTENT || extent.checked_mul(scale).is_none() {
                return Err(InvalidConfig::GridTooLarge { name, extent });
            }
        }
        if value.timing.simulation_ms == 0 {
            return Err(InvalidConfig::ZeroPeriod("simulation-ms"));
        }
        if value.timing.render_ms == 0 {
            return Err(InvalidConfig::ZeroPeriod("render-ms"));
        }
        let defaults = Palette::default();
        let palette = Palette {
            snake: parse_color("snake", value.colors.snake.as_deref())?.unwrap_or(defaults.snake),
            seed: parse_color("seed", value.colors.seed.as_deref())?.unwrap_or(defaults.seed),
        };
        let banner_style = match parse_color("banner", value.colors.banner.as_deref())? {
            Some(color) => consts::BANNER_STYLE.fg(color),
            None => consts::BANNER_STYLE,
        };
        Ok(Config {
            grid: Grid::new(width, height),
            simulation_period: Duration::from_millis(value.timing.simulation_ms),
            render_period: Duration::from_millis(value.timing.render_ms),
            palette,
            banner_style,
        })
    }
}

fn parse_color(name: &'static str, value: Option<&str>) -> Result<Option<Color>, InvalidConfig> {
    value
        .map(|s| {
            s.parse::<Color>().map_err(|_| InvalidConfig::Color {
                name,
                value: s.to_owned(),
            })
        })
        .transpose()
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("grid {name} must be at least {min}, got {extent}", min = consts::MIN_GRID_EXTENT)]
    GridTooSmall { name: &'static str, extent: u16 },
    #[error("grid {name} must be at most {max}, got {extent}", max = consts::MAX_GRID_EXTENT)]
    GridTooLarge { name: &'static str, extent: u16 },
    #[error("timing.{0} must be nonzero")]
    ZeroPeriod(&'static str),
    #[error("invalid color for {name}: {value:?}")]
    Color { name: &'static str, value: String },
}
