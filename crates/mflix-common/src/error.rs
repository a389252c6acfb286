//! Error types for mflix

use thiserror::Error;

/// Result type alias for mflix operations
pub type Result<T> = std::result::Result<T, MflixError>;

/// Unified error type for all mflix operations
#[derive(Error, Debug, Clone)]
pub enum MflixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<mongodb::error::Error> for MflixError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        // Classify by failure site: anything that never produced a server
        // response counts as a connection failure, malformed input as
        // configuration, the rest as query execution.
        match err.kind.as_ref() {
            ErrorKind::InvalidArgument { .. } => MflixError::Config(err.to_string()),
            ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::Authentication { .. } => MflixError::Connection(err.to_string()),
            _ => MflixError::Query(err.to_string()),
        }
    }
}

impl From<bson::ser::Error> for MflixError {
    fn from(err: bson::ser::Error) -> Self {
        MflixError::Serialization(format!("BSON serialization error: {}", err))
    }
}

impl From<bson::de::Error> for MflixError {
    fn from(err: bson::de::Error) -> Self {
        MflixError::Serialization(format!("BSON deserialization error: {}", err))
    }
}

impl From<serde_json::Error> for MflixError {
    fn from(err: serde_json::Error) -> Self {
        MflixError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = MflixError::Config("missing connection string".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing connection string");
    }

    #[test]
    fn test_error_display_connection() {
        let err = MflixError::Connection("timeout".to_string());
        assert_eq!(err.to_string(), "Connection error: timeout");
    }

    #[test]
    fn test_error_display_query() {
        let err = MflixError::Query("invalid operator".to_string());
        assert_eq!(err.to_string(), "Query error: invalid operator");
    }

    #[test]
    fn test_error_display_validation() {
        let err = MflixError::Validation("name required".to_string());
        assert_eq!(err.to_string(), "Validation error: name required");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: MflixError = json_err.into();
        assert!(matches!(err, MflixError::Serialization(_)));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(MflixError::Query("failed".to_string()));
        assert!(result.is_err());
    }
}
