//! Error types for the storefront behavior layer

use thiserror::Error;

/// Main error type for storefront operations.
///
/// None of these ever reach the shopper: callers log them and disable or
/// skip the affected feature.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Browser storage rejected a read or write (quota, privacy mode)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Embedded page configuration could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// A DOM call failed or returned an unexpected element type
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", err), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StorefrontError = serde_err.into();
        assert!(matches!(err, StorefrontError::Serialization(_)));
    }
}
