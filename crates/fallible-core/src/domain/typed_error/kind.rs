//! Discriminant sets for typed errors

use std::fmt;

/// A closed set of error discriminants, each variant owning its payload
///
/// Implementations map every variant to a fixed string tag. The
/// [`error_kinds!`](crate::error_kinds) macro derives this from literal tags.
pub trait ErrorKind: fmt::Debug {
    /// String tag of the active variant
    fn tag(&self) -> &'static str;
}

/// Declare an error kind enum with a literal string tag per variant
///
/// Each entry is `Variant(Payload) = "tag"` or `Variant = "tag"`. The macro
/// emits the enum (deriving `Debug`) and its [`ErrorKind`] implementation.
///
/// ```rust
/// use fallible_core::{error_kinds, ErrorKind};
///
/// error_kinds! {
///     #[derive(Clone, PartialEq)]
///     pub enum SessionError {
///         NotLoggedIn(String) = "notLoggedIn",
///         NoUserId(bool) = "noUserId",
///         Expired = "expired",
///     }
/// }
///
/// assert_eq!(SessionError::NoUserId(false).tag(), "noUserId");
/// assert_eq!(SessionError::Expired.tag(), "expired");
/// ```
///
/// Tags must be string literals. A computed string is rejected:
///
/// ```compile_fail
/// use fallible_core::error_kinds;
///
/// const TAG: &str = "notLoggedIn";
///
/// error_kinds! {
///     pub enum SessionError {
///         NotLoggedIn(String) = TAG,
///     }
/// }
/// ```
///
/// So is a literal that is not a string:
///
/// ```compile_fail
/// use fallible_core::error_kinds;
///
/// error_kinds! {
///     pub enum SessionError {
///         NotLoggedIn(String) = 42,
///     }
/// }
/// ```
#[macro_export]
macro_rules! error_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $payload:ty ) )? = $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ($payload) )?
            ),*
        }

        impl $crate::ErrorKind for $name {
            fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $tag ),*
                }
            }
        }
    };
}
