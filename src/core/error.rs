//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced by the logger.
///
/// Emission operations never fail; `flush` and level parsing are the only
/// error-returning surfaces.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from a sink flush
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized log level name
    #[error("invalid log level: '{0}'")]
    ParseLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::ParseLevel("loud".to_string());
        assert_eq!(err.to_string(), "invalid log level: 'loud'");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::from(io);
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
