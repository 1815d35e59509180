//! # sentinel-auth
//!
//! Identity core for the Sentinel console.
//!
//! ## Modules
//!
//! - `credential` — pure validation of emails, passwords, and full names
//! - `digest` — pluggable password digest backends
//! - `session` — the session lifecycle manager and state broadcast

pub mod credential;
pub mod digest;
pub mod session;

pub use credential::{CredentialError, CredentialErrorKind, PasswordCheck, PasswordStrength};
pub use digest::{Argon2Digest, ChecksumDigest, PasswordDigest};
pub use session::SessionManager;
