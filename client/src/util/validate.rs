//! Form validation for signup and moderation dialogs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Bounds on a rejection reason, counted after trimming.
pub const REASON_MIN_CHARS: usize = 10;
pub const REASON_MAX_CHARS: usize = 500;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email.trim()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Weak => "strength--weak",
            Self::Fair => "strength--fair",
            Self::Good => "strength--good",
            Self::Strong => "strength--strong",
        }
    }

    /// Filled segments in the four-segment strength meter.
    pub fn segments(self) -> usize {
        match self {
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }
}

/// One point each for: length >= 8, length >= 12, mixed case, a digit, a symbol.
pub fn password_score(password: &str) -> u8 {
    let len = password.chars().count();
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    [len >= MIN_PASSWORD_LEN, len >= 12, has_lower && has_upper, has_digit, has_symbol]
        .into_iter()
        .map(u8::from)
        .sum()
}

pub fn password_strength(password: &str) -> PasswordStrength {
    match password_score(password) {
        0 | 1 => PasswordStrength::Weak,
        2 => PasswordStrength::Fair,
        3 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}

/// Check the signup form; returns the first problem found.
///
/// # Errors
///
/// Returns a user-facing message describing the invalid field.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_owned());
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_owned());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    if password_strength(password) < PasswordStrength::Fair {
        return Err("Password is too weak".to_owned());
    }
    Ok(())
}

/// Check a rejection/suspension reason and return it trimmed.
///
/// # Errors
///
/// Returns a user-facing message when the reason is too short or too long.
pub fn validate_reason(reason: &str) -> Result<String, String> {
    let trimmed = reason.trim();
    let len = trimmed.chars().count();
    if len < REASON_MIN_CHARS {
        return Err(format!("Reason must be at least {REASON_MIN_CHARS} characters"));
    }
    if len > REASON_MAX_CHARS {
        return Err(format!("Reason must be at most {REASON_MAX_CHARS} characters"));
    }
    Ok(trimmed.to_owned())
}
