use std::path::PathBuf;

/// Errors that can occur during memory store and learning operations.
///
/// An unseen position is not an error: lookups return `Option` and callers
/// must handle absence themselves.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error(
        "sequence length mismatch: {positions} positions, {moves} moves, {evaluations} evaluations"
    )]
    ArityMismatch {
        positions: usize,
        moves: usize,
        evaluations: usize,
    },

    #[error("evaluation {value} outside allowed range [{min}, {max}]")]
    InvalidEvaluation { value: f64, min: f64, max: f64 },
}

/// Errors that can occur when tokenizing memory packages.
#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("move '{0}' is not in UCI format")]
    UnparsableMove(String),
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
    fn test_arity_mismatch_display() {
        let err = MemoryError::ArityMismatch {
            positions: 5,
            moves: 4,
            evaluations: 5,
        };
        assert_eq!(
            err.to_string(),
            "sequence length mismatch: 5 positions, 4 moves, 5 evaluations"
        );
    }

    #[test]
    fn test_invalid_evaluation_display() {
        let err = MemoryError::InvalidEvaluation {
            value: 2.5,
            min: -1.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "evaluation 2.5 outside allowed range [-1, 1]");
    }

    #[test]
    fn test_tokenize_error_display() {
        let err = TokenizeError::UnparsableMove("resign".to_string());
        assert_eq!(err.to_string(), "move 'resign' is not in UCI format");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("memory.min_evaluation must be < memory.max_evaluation".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: memory.min_evaluation must be < memory.max_evaluation"
        );
    }
}
