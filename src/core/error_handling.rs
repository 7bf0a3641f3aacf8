//! Generic error handling utilities
//!
//! Distinguishes user-actionable failures (bad configuration the user can
//! fix) from system failures (missing binaries, IO trouble) so fatal logging
//! stays useful without drowning the build output in internals.

/// Trait for errors that can distinguish between user-actionable and system
/// errors.
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message; when it returns
/// `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific, user-actionable message
    /// that should be displayed directly, such as an invalid generated-type
    /// name or an unknown encoding.
    fn is_user_actionable(&self) -> bool;

    /// The specific user message, if this is a user-actionable error.
    fn user_message(&self) -> Option<&str>;
}

/// Log an error with appropriate detail level based on its specificity:
/// user-actionable errors show their own message, system errors show the
/// operation context, and full details go to debug either way.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct TestConfigError {
        message: String,
    }

    impl fmt::Display for TestConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl std::error::Error for TestConfigError {}

    impl ContextualError for TestConfigError {
        fn is_user_actionable(&self) -> bool {
            true
        }

        fn user_message(&self) -> Option<&str> {
            Some(&self.message)
        }
    }

    #[derive(Debug)]
    struct TestSystemError {
        internal_details: String,
    }

    impl fmt::Display for TestSystemError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "System error: {}", self.internal_details)
        }
    }

    impl std::error::Error for TestSystemError {}

    impl ContextualError for TestSystemError {
        fn is_user_actionable(&self) -> bool {
            false
        }

        fn user_message(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_config_error_shows_specific_message() {
        let error = TestConfigError {
            message: "Could not find encoding 'KOI8-R'".to_string(),
        };
        assert!(error.is_user_actionable());
        assert_eq!(error.user_message(), Some("Could not find encoding 'KOI8-R'"));
    }

    #[test]
    fn test_system_error_uses_generic_context() {
        let error = TestSystemError {
            internal_details: "Broken pipe".to_string(),
        };
        assert!(!error.is_user_actionable());
        assert_eq!(error.user_message(), None);
    }
}
