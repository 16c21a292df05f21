use std::path::PathBuf;

/// Errors returned when a drop is rejected by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

impl DropError {
    /// Whether the current player may simply pick another column.
    ///
    /// `GameOver` is a caller bug: the session is terminal and no retry can
    /// succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DropError::GameOver)
    }
}

/// Errors raised while playing a scripted sequence of columns.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid column '{token}' (expected a 1-based column number)")]
    Parse { token: String },

    #[error("move {index} (column {column}) rejected: {source}")]
    Move {
        index: usize,
        column: usize,
        source: DropError,
    },
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
    fn test_drop_error_display() {
        let err = DropError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 is outside the board (0..7)");
        assert_eq!(
            DropError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(DropError::ColumnFull { column: 0 }.is_recoverable());
        assert!(DropError::InvalidColumn { column: 8, width: 7 }.is_recoverable());
        assert!(!DropError::GameOver.is_recoverable());
    }

    #[test]
    fn test_script_error_display() {
        let err = ScriptError::Move {
            index: 3,
            column: 1,
            source: DropError::ColumnFull { column: 0 },
        };
        assert_eq!(err.to_string(), "move 3 (column 1) rejected: column 0 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be in 1..=16".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be in 1..=16"
        );
    }
}
