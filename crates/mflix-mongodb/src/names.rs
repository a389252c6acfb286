//! Validated database and collection names
//!
//! Both names travel from the command line into the driver; validating
//! them up front keeps malformed input from ever reaching the wire.

use mflix_common::{MflixError, Result};

/// Conservative cap, well under the server's namespace limit
const MAX_NAME_LENGTH: usize = 120;

/// A database name accepted by the server
///
/// Rejects empty names, names over [`MAX_NAME_LENGTH`], and the
/// characters MongoDB forbids in database names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(MflixError::Validation(
                "database name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(MflixError::Validation(format!(
                "database name exceeds maximum length of {} characters: '{}'",
                MAX_NAME_LENGTH, name
            )));
        }
        if name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '.' | ' ' | '"' | '$' | '\0'))
        {
            return Err(MflixError::Validation(format!(
                "database name contains a forbidden character: '{}'",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A collection name accepted by the server
///
/// Rejects empty names, names over [`MAX_NAME_LENGTH`], null bytes,
/// `$` characters, and the reserved `system.` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(MflixError::Validation(
                "collection name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(MflixError::Validation(format!(
                "collection name exceeds maximum length of {} characters: '{}'",
                MAX_NAME_LENGTH, name
            )));
        }
        if name.contains('\0') {
            return Err(MflixError::Validation(
                "collection name cannot contain null bytes".to_string(),
            ));
        }
        if name.starts_with("system.") {
            return Err(MflixError::Validation(format!(
                "collection name cannot start with 'system.' (reserved): '{}'",
                name
            )));
        }
        if name.contains('$') {
            return Err(MflixError::Validation(format!(
                "collection name cannot contain '$': '{}'",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
