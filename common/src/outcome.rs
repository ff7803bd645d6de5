// Result classification shared by every store operation

use crate::validation::FieldError;

/// Terminal classification of one store operation.
///
/// Every operation ends in exactly one of these states, or aborts with a
/// [`crate::errors::StoreError`] on the error channel. There are no
/// retries and no partial application: each call is a single atomic
/// remote invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call produced the expected rows, or affected at least one row.
    Ok(T),

    /// Zero rows matched or were affected. Carries the caller-facing
    /// message; callers must be able to tell "nothing matched" apart
    /// from an empty success.
    NotFound(String),

    /// Path and payload identifiers disagree. Classified before any
    /// store access.
    IdMismatch { path: i32, payload: i32 },

    /// The payload failed its declared field constraints. Classified
    /// before any store access.
    Invalid(Vec<FieldError>),
}

impl<T> Outcome<T> {
    /// Apply `f` to the success value, leaving the other states intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::NotFound(message) => Outcome::NotFound(message),
            Outcome::IdMismatch { path, payload } => Outcome::IdMismatch { path, payload },
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound(_))
    }
}
