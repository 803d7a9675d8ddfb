//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Count mode was requested with an empty count string
    #[error("SocialBadge requires a count prop when displayMode is \"count\"")]
    MissingCount,

    #[error("Invalid display mode: {0}. Expected one of: count, link, none")]
    InvalidDisplayMode(String),

    #[error("Invalid dimension: {0}. Expected a number of pixels")]
    InvalidDimension(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_count_message() {
        assert_eq!(
            Error::MissingCount.to_string(),
            "SocialBadge requires a count prop when displayMode is \"count\""
        );
    }

    #[test]
    fn test_unknown_platform_message() {
        let err = Error::UnknownPlatform("myspace".to_string());
        assert_eq!(err.to_string(), "Unknown platform: myspace");
    }
}
