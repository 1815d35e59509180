//! Pure credential validation.
//!
//! Every function here is side-effect free: no I/O, no persisted state,
//! safe to call any number of times. Callers run these checks before
//! invoking the session manager.

pub mod error;
pub mod rules;

pub use error::{CredentialError, CredentialErrorKind};
pub use rules::{
    PasswordCheck, PasswordStrength, check_password, validate_email, validate_full_name,
    validate_password_match,
};
