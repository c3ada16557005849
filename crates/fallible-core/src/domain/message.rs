//! Message-Carrying Errors
//!
//! `Outcome::expect` replaces the stored error's message before panicking
//! with it. Any error that can be used there implements [`MessageError`].

use std::convert::Infallible;

/// Errors exposing a human-readable message that can be overwritten in place
pub trait MessageError {
    /// Current message text
    fn message(&self) -> &str;

    /// Replace the message text, keeping every other field of the error
    fn set_message(&mut self, message: String);
}

/// Untyped error carrying nothing but a message
///
/// The general-purpose failure payload for call sites that have no need for
/// a discriminant.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PlainError {
    message: String,
}

impl PlainError {
    /// Create a new error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl MessageError for PlainError {
    fn message(&self) -> &str {
        &self.message
    }

    fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl From<String> for PlainError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for PlainError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl<M: MessageError + ?Sized> MessageError for Box<M> {
    fn message(&self) -> &str {
        (**self).message()
    }

    fn set_message(&mut self, message: String) {
        (**self).set_message(message);
    }
}

impl MessageError for Infallible {
    fn message(&self) -> &str {
        match *self {}
    }

    fn set_message(&mut self, _message: String) {
        match *self {}
    }
}

impl MessageError for String {
    fn message(&self) -> &str {
        self
    }

    fn set_message(&mut self, message: String) {
        *self = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_display_is_message() {
        let err = PlainError::new("Not a number");
        assert_eq!(err.to_string(), "Not a number");
        assert_eq!(err.message(), "Not a number");
    }

    #[test]
    fn plain_error_defaults_to_empty_message() {
        assert_eq!(PlainError::default().message(), "");
    }

    #[test]
    fn set_message_overwrites() {
        let mut err = PlainError::from("before");
        err.set_message("after".to_string());
        assert_eq!(err.to_string(), "after");

        let mut text = String::from("before");
        text.set_message("after".to_string());
        assert_eq!(text, "after");
    }
}
