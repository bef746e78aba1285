//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Window service error: {0}")]
    Windows(#[from] vesper_windows::WindowsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_errors_convert() {
        let err: CoreError = vesper_windows::WindowsError::Native("backend gone".into()).into();
        assert!(matches!(err, CoreError::Windows(_)));
        assert_eq!(
            err.to_string(),
            "Window service error: Native window operation failed: backend gone"
        );
    }
}
