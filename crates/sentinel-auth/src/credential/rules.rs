//! Validation rules for signup and login form fields.

use super::error::{CredentialError, CredentialErrorKind};

/// The special characters counted towards password strength.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Password strength label, mapped from the character-class score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Map a character-class score (0–4) to a label.
    fn from_score(score: usize) -> Self {
        match score {
            4 => Self::Strong,
            3 => Self::Good,
            2 => Self::Fair,
            _ => Self::Weak,
        }
    }

    /// User-facing label for a strength indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

/// Outcome of checking a candidate password.
///
/// The strength label is computed independently of the validity
/// threshold: a two-class password reports `Fair` yet carries an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    /// Strength indicator for the candidate.
    pub strength: PasswordStrength,
    /// The validation failure, if any.
    pub error: Option<CredentialError>,
}

impl PasswordCheck {
    /// Whether the candidate is acceptable for signup.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate an email address.
///
/// Accepts exactly one `@` with a non-empty local part and a domain
/// containing a `.` with at least one character on each side; rejects
/// whitespace anywhere and inputs longer than 255 characters.
pub fn validate_email(email: &str) -> Result<(), CredentialError> {
    if email.is_empty() {
        return Err(CredentialError::new(
            CredentialErrorKind::EmptyInput,
            "Email is required",
        ));
    }
    if email.chars().count() > 255 {
        return Err(CredentialError::new(
            CredentialErrorKind::TooLong,
            "Email is too long",
        ));
    }
    if !is_well_formed_email(email) {
        return Err(CredentialError::new(
            CredentialErrorKind::MalformedEmail,
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A '.' strictly inside the domain ('.' is a single byte, so byte
    // positions are safe here).
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

/// Check a candidate password.
///
/// Fails on empty or shorter-than-8 inputs. Otherwise the strength score
/// counts the satisfied classes among uppercase, lowercase, digit, and
/// special character; the password is valid only with a score of at
/// least 3.
pub fn check_password(password: &str) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck {
            strength: PasswordStrength::Weak,
            error: Some(CredentialError::new(
                CredentialErrorKind::EmptyInput,
                "Password is required",
            )),
        };
    }
    if password.chars().count() < 8 {
        return PasswordCheck {
            strength: PasswordStrength::Weak,
            error: Some(CredentialError::new(
                CredentialErrorKind::TooShort,
                "Password must be at least 8 characters long",
            )),
        };
    }

    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
    ];
    let score = classes.iter().filter(|satisfied| **satisfied).count();

    let error = (score < 3).then_some(CredentialError::new(
        CredentialErrorKind::WeakPassword,
        "Password must contain uppercase, lowercase, number, and special character",
    ));

    PasswordCheck {
        strength: PasswordStrength::from_score(score),
        error,
    }
}

/// Validate a full name: non-empty, 2 to 50 characters.
pub fn validate_full_name(name: &str) -> Result<(), CredentialError> {
    if name.is_empty() {
        return Err(CredentialError::new(
            CredentialErrorKind::EmptyInput,
            "Full name is required",
        ));
    }
    let length = name.chars().count();
    if length < 2 {
        return Err(CredentialError::new(
            CredentialErrorKind::TooShort,
            "Name must be at least 2 characters",
        ));
    }
    if length > 50 {
        return Err(CredentialError::new(
            CredentialErrorKind::TooLong,
            "Name must be less than 50 characters",
        ));
    }
    Ok(())
}

/// Validate that the confirmation equals the password, exactly.
pub fn validate_password_match(password: &str, confirm: &str) -> Result<(), CredentialError> {
    if confirm.is_empty() {
        return Err(CredentialError::new(
            CredentialErrorKind::EmptyInput,
            "Please confirm your password",
        ));
    }
    if password != confirm {
        return Err(CredentialError::new(
            CredentialErrorKind::Mismatch,
            "Passwords do not match",
        ));
    }
    Ok(())
}
