use crate::game::Tuning;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub(crate) struct Config {
    /// Timing of the game
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakegrid").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
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

/// Validated game timing settings
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig(Tuning);

impl GameConfig {
    pub(crate) fn tuning(self) -> Tuning {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct RawGameConfig {
    #[serde(rename = "initial-speed-ms")]
    initial_speed: u64,
    #[serde(rename = "speed-step-ms")]
    speed_step: u64,
    #[serde(rename = "min-speed-ms")]
    min_speed: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let tuning = Tuning::default();
        RawGameConfig {
            initial_speed: duration_ms(tuning.initial_speed),
            speed_step: duration_ms(tuning.speed_step),
            min_speed: duration_ms(tuning.min_speed),
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = SettingsError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, SettingsError> {
        if value.initial_speed == 0 {
            return Err(SettingsError::ZeroInitialSpeed);
        }
        if value.min_speed == 0 {
            return Err(SettingsError::ZeroMinSpeed);
        }
        if value.min_speed > value.initial_speed {
            return Err(SettingsError::FloorAboveInitial {
                min: value.min_speed,
                initial: value.initial_speed,
            });
        }
        Ok(GameConfig(Tuning {
            initial_speed: Duration::from_millis(value.initial_speed),
            speed_step: Duration::from_millis(value.speed_step),
            min_speed: Duration::from_millis(value.min_speed),
        }))
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Logging settings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to write log messages to, with a leading `~` expanded; defaults
    /// to [`LogConfig::default_file()`]
    pub(crate) file: Option<PathBuf>,

    /// Minimum level of messages to log; `off` disables logging
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the default log file path
    pub(crate) fn default_file() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snakegrid").join("snakegrid.log"))
    }

    /// Return the file to log to, or `None` if no path was configured and
    /// the default path could not be computed
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(LogConfig::default_file)
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLogConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLogConfig {
    fn default() -> RawLogConfig {
        RawLogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, std::io::Error> {
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("initial-speed-ms must be greater than zero")]
    ZeroInitialSpeed,
    #[error("min-speed-ms must be greater than zero")]
    ZeroMinSpeed,
    #[error("min-speed-ms ({min}) must not exceed initial-speed-ms ({initial})")]
    FloorAboveInitial { min: u64, initial: u64 },
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
