//! Field-level credential validation errors.

use thiserror::Error;

use sentinel_core::error::AppError;

/// What went wrong with a single credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialErrorKind {
    /// The field was empty.
    EmptyInput,
    /// The value is below the minimum length.
    TooShort,
    /// The value exceeds the maximum length.
    TooLong,
    /// The value does not parse as an email address.
    MalformedEmail,
    /// The confirmation does not equal the password.
    Mismatch,
    /// The password covers too few character classes.
    WeakPassword,
}

/// A recoverable, field-level validation failure.
///
/// The message is the user-facing text shown next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CredentialError {
    /// The failure category.
    pub kind: CredentialErrorKind,
    /// User-facing message for the field.
    pub message: &'static str,
}

impl CredentialError {
    pub(crate) const fn new(kind: CredentialErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        AppError::validation(err.message)
    }
}
