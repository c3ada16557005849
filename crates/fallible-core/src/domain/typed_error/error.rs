//! TypedError value and its builder

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

use super::kind::ErrorKind;
use crate::domain::message::MessageError;

/// Error carrying a discriminant kind, a message and a construction trace
///
/// The kind is both the discriminant (`tag()`) and the payload (the fields of
/// its active variant). The message defaults to empty. The construction site
/// is recorded through `#[track_caller]`; a [`Backtrace`] is captured as well,
/// subject to `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
#[derive(Debug)]
pub struct TypedError<K> {
    kind: K,
    message: String,
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl<K: ErrorKind> TypedError<K> {
    /// Create an error with an empty message
    #[track_caller]
    pub fn new(kind: K) -> Self {
        Self::with_message(kind, String::new())
    }

    /// Create an error with the given message
    #[track_caller]
    pub fn with_message(kind: K, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Start building an error around `kind`
    pub fn builder(kind: K) -> TypedErrorBuilder<K> {
        TypedErrorBuilder {
            kind,
            message: None,
        }
    }

    /// Discriminant and payload; match on it to narrow
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Consume the error, keeping only its kind
    pub fn into_kind(self) -> K {
        self.kind
    }

    /// String tag of the discriminant
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Human-readable message, empty unless one was supplied
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location where the error was constructed
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Stack captured at construction
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl<K: ErrorKind> fmt::Display for TypedError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind.tag())
        } else {
            write!(f, "{}: {}", self.kind.tag(), self.message)
        }
    }
}

impl<K: ErrorKind> std::error::Error for TypedError<K> {}

impl<K: ErrorKind> MessageError for TypedError<K> {
    fn message(&self) -> &str {
        &self.message
    }

    fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl<K: ErrorKind> From<K> for TypedError<K> {
    #[track_caller]
    fn from(kind: K) -> Self {
        Self::new(kind)
    }
}

/// Options-style construction for [`TypedError`]
#[derive(Debug)]
#[must_use = "call `build()` to obtain the error"]
pub struct TypedErrorBuilder<K> {
    kind: K,
    message: Option<String>,
}

impl<K: ErrorKind> TypedErrorBuilder<K> {
    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the error; the construction site is this call
    #[track_caller]
    pub fn build(self) -> TypedError<K> {
        TypedError::with_message(self.kind, self.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::error_kinds! {
        #[derive(Clone, PartialEq)]
        enum GetUserError {
            NotLoggedIn(String) = "notLoggedIn",
            NoUserId(bool) = "noUserId",
            NoUser(i64) = "noUser",
            Test = "test",
        }
    }

    #[test]
    fn message_defaults_to_empty() {
        let err = TypedError::new(GetUserError::Test);
        assert_eq!(err.message(), "");
        assert_eq!(err.tag(), "test");
        assert_eq!(err.to_string(), "test");
    }

    #[test]
    fn message_is_kept() {
        let err = TypedError::with_message(GetUserError::Test, "test message");
        assert_eq!(err.message(), "test message");
        assert_eq!(err.to_string(), "test: test message");
    }

    #[test]
    fn builder_sets_message() {
        let err = TypedError::builder(GetUserError::NoUser(123))
            .message("user lookup failed")
            .build();
        assert_eq!(err.message(), "user lookup failed");
        assert_eq!(err.kind(), &GetUserError::NoUser(123));
    }

    #[test]
    fn location_points_at_construction_site() {
        let line = line!() + 1;
        let err = TypedError::new(GetUserError::Test);
        assert!(err.location().file().ends_with("error.rs"));
        assert_eq!(err.location().line(), line);

        let from_kind: TypedError<_> = GetUserError::Test.into();
        assert!(from_kind.location().file().ends_with("error.rs"));
    }

    #[test]
    fn backtrace_is_recorded() {
        use std::backtrace::BacktraceStatus;

        let err = TypedError::new(GetUserError::Test);
        let trace = err.backtrace();
        assert!(!trace.to_string().is_empty());
        if trace.status() == BacktraceStatus::Captured {
            assert!(!format!("{trace:?}").is_empty());
        }
    }

    #[test]
    fn kind_narrows_payload() {
        let errors = [
            TypedError::new(GetUserError::NotLoggedIn("s".into())),
            TypedError::new(GetUserError::NoUserId(false)),
            TypedError::new(GetUserError::NoUser(123)),
        ];

        let mut seen = Vec::new();
        for err in &errors {
            match err.kind() {
                GetUserError::NotLoggedIn(data) => seen.push(format!("string:{data}")),
                GetUserError::NoUserId(data) => seen.push(format!("bool:{data}")),
                GetUserError::NoUser(data) => seen.push(format!("number:{data}")),
                GetUserError::Test => unreachable!(),
            }
        }
        assert_eq!(seen, ["string:s", "bool:false", "number:123"]);
    }

    #[test]
    fn set_message_keeps_kind() {
        let mut err = TypedError::new(GetUserError::NoUserId(true));
        err.set_message("overwritten".to_string());
        assert_eq!(MessageError::message(&err), "overwritten");
        assert_eq!(err.into_kind(), GetUserError::NoUserId(true));
    }

    #[test]
    fn usable_as_boxed_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(TypedError::with_message(GetUserError::Test, "boxed"));
        assert_eq!(boxed.to_string(), "test: boxed");
    }
}
