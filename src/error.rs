use std::path::PathBuf;

/// Errors returned by the grid itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("column {column} is outside the grid (expected 0..{})", crate::game::COLUMN_COUNT)]
    InvalidColumn { column: usize },
}

/// Errors that can occur when playing a move in a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("invalid column: {0}")]
    InvalidColumn(#[from] GridError),

    #[error("the round is already over")]
    RoundOver,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::InvalidColumn { column: 9 };
        assert_eq!(
            err.to_string(),
            "column 9 is outside the grid (expected 0..7)"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::from(GridError::InvalidColumn { column: 7 }).to_string(),
            "invalid column: column 7 is outside the grid (expected 0..7)"
        );
        assert_eq!(MoveError::RoundOver.to_string(), "the round is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.ai.marker must differ".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.ai.marker must differ"
        );
    }
}
