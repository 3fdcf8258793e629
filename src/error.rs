//! Error types for the parabola library.
//!
//! All fallible operations return `Result<T, ParabolaError>` rather than
//! panicking. Callers (the presenter, the CLI) turn these into user-facing
//! messages; the library itself never recovers from them.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, ParabolaError>;

/// Errors that can occur while analyzing or fitting a quadratic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParabolaError {
    /// The leading coefficient is zero, so the equation is linear or constant.
    #[error("degenerate input: {message}")]
    DegenerateInput { message: String },

    /// The three-point system has no unique solution (e.g., repeated x-values).
    #[error("singular system: {message}")]
    SingularSystem { message: String },

    /// Input data is invalid (e.g., NaN coefficient, empty sampling domain).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl ParabolaError {
    pub(crate) fn degenerate(a: f64) -> Self {
        ParabolaError::DegenerateInput {
            message: format!("leading coefficient a must be non-zero, got {a}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_message_names_coefficient() {
        let err = ParabolaError::degenerate(0.0);
        match &err {
            ParabolaError::DegenerateInput { message } => {
                assert!(message.contains("a must be non-zero"));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn error_display_includes_message() {
        let err = ParabolaError::SingularSystem {
            message: "x-values coincide".into(),
        };
        let display = format!("{err}");
        assert!(display.starts_with("singular system"));
        assert!(display.contains("x-values coincide"));

        let err2 = ParabolaError::InvalidInput {
            message: "bad input".into(),
        };
        assert!(format!("{err2}").contains("bad input"));

        let err3 = ParabolaError::degenerate(0.0);
        assert!(format!("{err3}").starts_with("degenerate input"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParabolaError>();
    }
}
