use thiserror::Error;

/// Top-level error type for the TratonAI workspace.
///
/// The chat engine itself is total and never fails; these variants cover
/// reading and writing configuration files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TratonError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for TratonError {
    fn from(err: toml::de::Error) -> Self {
        TratonError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TratonError {
    fn from(err: toml::ser::Error) -> Self {
        TratonError::Config(err.to_string())
    }
}

/// A specialized `Result` type for TratonAI operations.
pub type Result<T> = std::result::Result<T, TratonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TratonError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TratonError = io_err.into();
        assert!(matches!(err, TratonError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let err: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let traton_err: TratonError = err.unwrap_err().into();
        assert!(matches!(traton_err, TratonError::Config(_)));
    }

    #[test]
    fn test_error_from_toml_ser() {
        // TOML cannot encode a bare array at the document root.
        let err = toml::to_string(&vec![1, 2, 3]).unwrap_err();
        let traton_err: TratonError = err.into();
        assert!(matches!(traton_err, TratonError::Config(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
