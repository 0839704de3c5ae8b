use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static EXPIRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap());

/// A single failed field check. `Display` is the message shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    // Sign in and account screens
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Please enter your full name")]
    MissingFullName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a password")]
    MissingNewPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("An account with this email already exists")]
    EmailTaken,

    // Permission forms
    #[error("Please enter the parent/guardian name")]
    MissingParentName,
    #[error("Please enter an emergency contact")]
    MissingEmergencyContact,
    #[error("Please provide your signature")]
    MissingSignature,
    #[error("Please confirm your consent")]
    MissingConsent,

    // Card entry
    #[error("Please enter the cardholder name")]
    MissingCardholderName,
    #[error("Card number must be at least {0} digits")]
    CardNumberTooShort(usize),
    #[error("Expiry date must be in MM/YY format")]
    InvalidExpiry,
    #[error("CVV must be at least {0} digits")]
    CvvTooShort(usize),

    // Events
    #[error("Please enter an event title")]
    MissingEventTitle,
    #[error("Please enter a location")]
    MissingLocation,
    #[error("Please select a date for the event")]
    MissingEventDate,
    #[error("Please enter a start time")]
    MissingStartTime,
    #[error("Please enter an end time")]
    MissingEndTime,
    #[error("Please select at least one child")]
    NoChildrenSelected,

    // Fees
    #[error("Please enter a valid amount greater than $0")]
    InvalidAmount,
    #[error("Please select an event")]
    MissingEvent,
    #[error("Please enter a description")]
    MissingDescription,

    // Activity logs
    #[error("Please enter an activity name")]
    MissingActivityName,
    #[error("Please enter general notes")]
    MissingGeneralNotes,
}

/// Outcome of validating one draft, errors in the order they were checked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// User-facing messages for the error list
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Must contain `@` with a `.` somewhere after it
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// `MM/YY` with a real month
pub fn is_valid_expiry(expiry: &str) -> bool {
    EXPIRY_PATTERN.is_match(expiry.trim())
}

/// Digit count of card-style input, ignoring spaces and dashes
pub fn count_digits(value: &str) -> usize {
    value
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .filter(|c| c.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("sarah.james@example.com"));
        assert!(is_valid_email("  a@b.co "));
        assert!(!is_valid_email("sarah.example.com"));
        assert!(!is_valid_email("sarah@example"));
        assert!(!is_valid_email("sa rah@example.com"));
    }

    #[test]
    fn test_expiry_pattern() {
        assert!(is_valid_expiry("01/27"));
        assert!(is_valid_expiry("12/30"));
        assert!(!is_valid_expiry("13/27"));
        assert!(!is_valid_expiry("00/27"));
        assert!(!is_valid_expiry("1/27"));
        assert!(!is_valid_expiry("01/2027"));
    }

    #[test]
    fn test_count_digits_ignores_separators() {
        assert_eq!(count_digits("4111 1111 1111 1111"), 16);
        assert_eq!(count_digits("4111-1111-1111-1111"), 16);
        assert_eq!(count_digits("12 3"), 3);
        assert_eq!(count_digits(""), 0);
    }

    #[test]
    fn test_messages_use_display_text() {
        let result = ValidationResult::from_errors(vec![
            ValidationError::MissingSignature,
            ValidationError::CardNumberTooShort(16),
        ]);
        assert!(!result.is_valid);
        assert_eq!(
            result.messages(),
            vec![
                "Please provide your signature".to_string(),
                "Card number must be at least 16 digits".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_error_list_is_valid() {
        let result = ValidationResult::from_errors(Vec::new());
        assert!(result.is_valid);
        assert!(result.into_result().is_ok());
    }
}
