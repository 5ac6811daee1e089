//! Error types for Taskr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Taskr
#[derive(Debug, Error)]
pub enum TaskrError {
    /// Growing the store's backing buffer failed; the store is left valid
    /// at its previous capacity and the mutation was not applied
    #[error("Capacity error: {0}")]
    Capacity(String),

    /// A list file line did not split into name,priority,completed
    #[error("Malformed list file: line {0} does not have three comma-separated fields")]
    MalformedLine(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Taskr operations
pub type Result<T> = std::result::Result<T, TaskrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error() {
        let err = TaskrError::Capacity("memory allocation failed".to_string());
        assert_eq!(err.to_string(), "Capacity error: memory allocation failed");
    }

    #[test]
    fn test_malformed_line_error() {
        let err = TaskrError::MalformedLine(2);
        assert_eq!(
            err.to_string(),
            "Malformed list file: line 2 does not have three comma-separated fields"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TaskrError = io_err.into();
        assert!(matches!(err, TaskrError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TaskrError::MalformedLine(1))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
