//! Error types for deferred-callable invocation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CallableError>;

#[derive(Error, Debug)]
pub enum CallableError {
    /// A procedure that yields was called without a block.
    #[error("no block given (yield)")]
    MissingDeferredAction,

    /// A strict callable was invoked with the wrong number of arguments.
    #[error("wrong number of arguments (given {given}, expected {expected})")]
    ArityMismatch { expected: usize, given: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CallableError::MissingDeferredAction.to_string(),
            "no block given (yield)"
        );
        assert_eq!(
            CallableError::ArityMismatch {
                expected: 0,
                given: 2
            }
            .to_string(),
            "wrong number of arguments (given 2, expected 0)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CallableError = io.into();
        assert!(matches!(err, CallableError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
