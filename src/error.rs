use std::path::PathBuf;

/// Errors from applying a move to a board or a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..=6)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised when an agent is asked for a move it cannot make.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal columns to search")]
    EmptySearchSpace,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown player kind '{0}' (expected human, random, greedy, minimax or minimax:<depth>)")]
    UnknownSeat(String),
}

/// Errors that can occur while running agent-vs-agent trials.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} could not move: {source}")]
    Search { agent: String, source: SearchError },

    #[error("{agent} selected illegal column {column}: {source}")]
    IllegalMove {
        agent: String,
        column: usize,
        source: MoveError,
    },

    #[error("arena seats must be agents, not human players")]
    HumanSeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range (expected 0..=6)"
        );
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::EmptySearchSpace.to_string(),
            "no legal columns to search"
        );
    }

    #[test]
    fn test_arena_error_display() {
        let err = ArenaError::IllegalMove {
            agent: "Greedy".to_string(),
            column: 4,
            source: MoveError::ColumnFull(4),
        };
        assert_eq!(
            err.to_string(),
            "Greedy selected illegal column 4: column 4 is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("arena.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: arena.games must be > 0"
        );
    }
}
