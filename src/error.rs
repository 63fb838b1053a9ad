//! Error types for the smartmatch crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Error)]
pub enum MatchError {
    /// A user-supplied callable failed. The callable's own error is carried as-is.
    #[error("Predicate failed: {0}")]
    Predicate(#[source] anyhow::Error),
    #[error("Recursion depth limit exceeded: {0}")]
    DepthLimitExceeded(usize),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid pattern flag: {0}")]
    InvalidFlag(char),
    #[error("Pattern execution failed: {0}")]
    PatternExecution(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MatchError {
    /// Returns the predicate's original error, if this error came from one.
    pub fn predicate_error(&self) -> Option<&anyhow::Error> {
        match self {
            MatchError::Predicate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::Config(err.to_string())
    }
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        MatchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_predicate_error_display() {
        let error = MatchError::Predicate(anyhow::anyhow!("boom"));
        assert_eq!(error.to_string(), "Predicate failed: boom");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_predicate_error_is_unmodified() {
        #[derive(Debug, PartialEq)]
        struct Custom(u32);
        impl std::fmt::Display for Custom {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "custom {}", self.0)
            }
        }
        impl std::error::Error for Custom {}

        let error = MatchError::Predicate(anyhow::Error::new(Custom(7)));
        let inner = error.predicate_error().unwrap();
        assert_eq!(inner.downcast_ref::<Custom>(), Some(&Custom(7)));
    }

    #[test]
    fn test_depth_limit_display() {
        let error = MatchError::DepthLimitExceeded(64);
        assert_eq!(error.to_string(), "Recursion depth limit exceeded: 64");
        assert!(error.predicate_error().is_none());
    }

    #[test]
    fn test_pattern_errors_display() {
        let error = MatchError::InvalidPattern("(".to_string());
        assert!(error.to_string().contains("Invalid pattern"));

        let error = MatchError::InvalidFlag('x');
        assert_eq!(error.to_string(), "Invalid pattern flag: x");

        let error = MatchError::PatternExecution("/(a*)*b/: backtrack limit exceeded".to_string());
        assert!(error.to_string().starts_with("Pattern execution failed"));
        assert!(error.predicate_error().is_none());
    }

    #[test]
    fn test_from_serde_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(MatchError::from(json_err), MatchError::Config(_)));

        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        assert!(matches!(MatchError::from(yaml_err), MatchError::Config(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        match MatchError::from(io_error) {
            MatchError::Config(msg) => assert!(msg.contains("file not found")),
            other => panic!("Expected Config, got {other:?}"),
        }
    }
}
