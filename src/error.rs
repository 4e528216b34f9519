use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmpdeskError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Persistence(String),

    #[error("Database call timed out after {0} ms")]
    Timeout(u64),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmpdeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Machine-readable code reported in the GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidId(_) => "INVALID_ID",
            Self::Persistence(_) => "PERSISTENCE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Hashing(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Yaml(_)
            | Self::Json(_) => "INTERNAL",
        }
    }
}

impl From<mongodb::error::Error> for EmpdeskError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for EmpdeskError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl ErrorExtensions for EmpdeskError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, EmpdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = EmpdeskError::validation("Invalid email format.");
        assert_eq!(err.to_string(), "Invalid email format.");
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn test_persistence_keeps_driver_message() {
        let err = EmpdeskError::Persistence("E11000 duplicate key error".to_string());
        assert!(err.to_string().contains("E11000 duplicate key error"));
        assert_eq!(err.code(), "PERSISTENCE");
    }

    #[test]
    fn test_extend_sets_code() {
        let err = EmpdeskError::InvalidId("nope".to_string()).extend();
        assert_eq!(err.message, "Invalid ID format: nope");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code")).cloned();
        assert_eq!(code, Some(async_graphql::Value::from("INVALID_ID")));
    }
}
