use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::ai::{MinimaxAgent, Strategy};
use crate::error::ConfigError;

/// Depth used by minimax seats in agent-vs-agent trials.
pub const ARENA_DEPTH: usize = 5;

/// Deepest search the config accepts.
pub const MAX_DEPTH: usize = 8;

/// Who plays one colour: a person at the keyboard or a computer strategy.
///
/// Written as `human`, `random`, `greedy`, `minimax` or `minimax:<depth>`
/// both in TOML and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Seat {
    Human,
    Computer(Strategy),
}

impl Seat {
    /// The strategy behind a computer seat.
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            Seat::Human => None,
            Seat::Computer(strategy) => Some(strategy),
        }
    }

    fn validate(self, field: &str) -> Result<(), ConfigError> {
        if let Seat::Computer(Strategy::Minimax { depth }) = self {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{field} minimax depth must be in 1..={MAX_DEPTH}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Computer(strategy) => write!(f, "{strategy}"),
        }
    }
}

impl FromStr for Seat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let seat = match text.split_once(':') {
            None => match text.as_str() {
                "human" => Seat::Human,
                "random" => Seat::Computer(Strategy::Random),
                "greedy" => Seat::Computer(Strategy::Greedy),
                "minimax" => Seat::Computer(Strategy::Minimax {
                    depth: MinimaxAgent::DEFAULT_DEPTH,
                }),
                _ => return Err(ConfigError::UnknownSeat(s.to_string())),
            },
            Some((kind, depth)) if kind.trim() == "minimax" => {
                let depth = depth
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::UnknownSeat(s.to_string()))?;
                Seat::Computer(Strategy::Minimax { depth })
            }
            Some(_) => return Err(ConfigError::UnknownSeat(s.to_string())),
        };
        Ok(seat)
    }
}

impl TryFrom<String> for Seat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Seat> for String {
    fn from(seat: Seat) -> Self {
        seat.to_string()
    }
}

/// Seats for the interactive game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red: Seat,
    pub yellow: Seat,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: Seat::Human,
            yellow: Seat::Computer(Strategy::Minimax {
                depth: MinimaxAgent::DEFAULT_DEPTH,
            }),
        }
    }
}

/// Repeated agent-vs-agent trials.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Base seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
    pub red: Seat,
    pub yellow: Seat,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            seed: None,
            red: Seat::Computer(Strategy::Random),
            yellow: Seat::Computer(Strategy::Minimax { depth: ARENA_DEPTH }),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.red.validate("game.red")?;
        self.game.yellow.validate("game.yellow")?;
        self.arena.red.validate("arena.red")?;
        self.arena.yellow.validate("arena.yellow")?;

        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.red == Seat::Human || self.arena.yellow == Seat::Human {
            return Err(ConfigError::Validation(
                "arena seats must be computer players".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
