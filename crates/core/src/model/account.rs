use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::ids::AccountId;

/// Shortest secret accepted at sign-up.
pub const MIN_SECRET_LEN: usize = 6;

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccountError {
    #[error("Username must be 3-32 characters")]
    UsernameLength,

    #[error("Username may only contain letters, digits, '.', '_' and '-'")]
    UsernameCharset,

    #[error("Password should be at least {min} characters")]
    SecretTooShort { min: usize },
}

/// Login name, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Normalise and validate a username.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` if the trimmed name is out of range or has
    /// characters outside `[a-z0-9._-]`.
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let normalized = raw.trim().to_lowercase();
        if !USERNAME_LEN.contains(&normalized.chars().count()) {
            return Err(AccountError::UsernameLength);
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
        {
            return Err(AccountError::UsernameCharset);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a secret chosen at sign-up.
///
/// # Errors
///
/// Returns `AccountError::SecretTooShort` below `MIN_SECRET_LEN` characters.
pub fn validate_secret(secret: &str) -> Result<(), AccountError> {
    if secret.chars().count() < MIN_SECRET_LEN {
        return Err(AccountError::SecretTooShort {
            min: MIN_SECRET_LEN,
        });
    }
    Ok(())
}

/// A registered learner. The password hash stays in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    username: Username,
    display_name: String,
    created_at: DateTime<Utc>,
}

impl Account {
    /// A blank display name falls back to the username.
    #[must_use]
    pub fn new(
        id: AccountId,
        username: Username,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let display_name = display_name.into();
        let display_name = match display_name.trim() {
            "" => username.as_str().to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            id,
            username,
            display_name,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn username_is_lowercased_and_trimmed() {
        let name = Username::parse("  Betty ").unwrap();
        assert_eq!(name.as_str(), "betty");
    }

    #[test]
    fn username_rules() {
        assert_eq!(Username::parse("ab").unwrap_err(), AccountError::UsernameLength);
        assert_eq!(
            Username::parse("bet ty").unwrap_err(),
            AccountError::UsernameCharset
        );
        assert!(Username::parse("ethan.k-2_b").is_ok());
    }

    #[test]
    fn secret_needs_six_characters() {
        assert!(validate_secret("12345").is_err());
        assert!(validate_secret("123456").is_ok());
    }

    #[test]
    fn blank_display_name_falls_back_to_username() {
        let account = Account::new(
            AccountId::new(1),
            Username::parse("ethan").unwrap(),
            "  ",
            fixed_now(),
        );
        assert_eq!(account.display_name(), "ethan");
    }
}
