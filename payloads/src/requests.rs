use crate::WorkoutId;
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    TooLong,
    InvalidFormat,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email address is required"),
            Self::TooLong => Some("Email address is too long"),
            Self::InvalidFormat => Some("Invalid email format"),
        }
    }
}

/// Validate an email address.
///
/// Rules:
/// - not blank, at most 255 characters after trimming
/// - no whitespace, exactly one `@`
/// - the domain contains a `.` with text on both sides
pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        return EmailValidation::Empty;
    }
    if email.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }
    if email.chars().any(char::is_whitespace) {
        return EmailValidation::InvalidFormat;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::InvalidFormat;
    };
    if local.is_empty() || domain.contains('@') {
        return EmailValidation::InvalidFormat;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => {
            EmailValidation::Valid
        }
        _ => EmailValidation::InvalidFormat,
    }
}

/// Validation result for new passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    MissingCharacterClass,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Password must be at least 8 characters"),
            Self::MissingCharacterClass => Some(
                "Password must contain an uppercase letter, a lowercase letter and a digit",
            ),
        }
    }
}

/// Validate a new password: at least 8 characters with at least one
/// lowercase letter, one uppercase letter and one digit.
pub fn validate_password(password: &str) -> PasswordValidation {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return PasswordValidation::TooShort;
    }

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        PasswordValidation::Valid
    } else {
        PasswordValidation::MissingCharacterClass
    }
}

/// Validation result for first and last names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Empty,
    TooShort,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Name is required"),
            Self::TooShort => Some("Name must be at least 2 characters"),
        }
    }
}

pub fn validate_name(name: &str) -> NameValidation {
    let name = name.trim();
    if name.is_empty() {
        NameValidation::Empty
    } else if name.chars().count() < NAME_MIN_LEN {
        NameValidation::TooShort
    } else {
        NameValidation::Valid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Register {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForgotPassword {
    pub email: String,
}

/// The reset code and email both arrive in the link sent by
/// forgot-password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetPassword {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub reset_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub user_email: String,
    pub workout_identifier: WorkoutId,
}
