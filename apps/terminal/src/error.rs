//! # Session Errors
//!
//! What can end a terminal session early: a rejected selection from the
//! core, or a console I/O failure. Both are fatal; the session never
//! re-prompts.

use thiserror::Error;

use bistro_core::OrderError;

/// Errors that terminate a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A selection or validation error from the core. The session has
    /// already printed a user-facing message for it.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The console itself failed (closed stdin, broken pipe).
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_passes_through() {
        let err: SessionError = OrderError::InvalidMenuSelection {
            input: "5".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unrecognized menu selection: 5");
    }
}
