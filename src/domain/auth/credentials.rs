//! Credential input validation.
//!
//! Raw credentials arrive untrusted once per sign-in attempt. Validation is
//! the only way to obtain a [`ValidatedCredentials`], so downstream code can
//! rely on the email being well-formed and the password meeting the minimum
//! length without re-checking.

use serde::Deserialize;
use thiserror::Error;

/// Minimum accepted password length, in characters.
const MIN_PASSWORD_LEN: usize = 6;

/// Untrusted credentials exactly as submitted.
#[derive(Clone, Deserialize)]
pub struct RawCredentials {
    pub email: String,
    pub password: String,
}

// Hand-written so a debug log can never echo the submitted password.
impl std::fmt::Debug for RawCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials that passed shape validation.
#[derive(Clone)]
pub struct ValidatedCredentials {
    email: String,
    password: String,
}

impl std::fmt::Debug for ValidatedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ValidatedCredentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Why a credential input was rejected.
///
/// Deliberately carries no echo of the submitted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Email is not well-formed")]
    MalformedEmail,

    #[error("Password is shorter than {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

impl TryFrom<RawCredentials> for ValidatedCredentials {
    type Error = CredentialsError;

    fn try_from(raw: RawCredentials) -> Result<Self, Self::Error> {
        if !is_well_formed_email(&raw.email) {
            return Err(CredentialsError::MalformedEmail);
        }
        if raw.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(Self {
            email: raw.email,
            password: raw.password,
        })
    }
}

/// Minimal well-formedness check: one `@`, a non-empty local part, a domain
/// containing an interior dot, and no whitespace anywhere.
fn is_well_formed_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(email: &str, password: &str) -> RawCredentials {
        RawCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_valid_credentials() {
        let validated = ValidatedCredentials::try_from(raw("user@nextmail.com", "123456"));
        let validated = validated.unwrap();
        assert_eq!(validated.email(), "user@nextmail.com");
        assert_eq!(validated.password(), "123456");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let result = ValidatedCredentials::try_from(raw("usernextmail.com", "123456"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }

    #[test]
    fn rejects_email_with_empty_local_part() {
        let result = ValidatedCredentials::try_from(raw("@nextmail.com", "123456"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        let result = ValidatedCredentials::try_from(raw("user@localhost", "123456"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }

    #[test]
    fn rejects_email_with_whitespace() {
        let result = ValidatedCredentials::try_from(raw("user @nextmail.com", "123456"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }

    #[test]
    fn rejects_email_with_two_at_signs() {
        let result = ValidatedCredentials::try_from(raw("user@next@mail.com", "123456"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }

    #[test]
    fn rejects_short_password() {
        let result = ValidatedCredentials::try_from(raw("user@nextmail.com", "12345"));
        assert_eq!(result.unwrap_err(), CredentialsError::PasswordTooShort);
    }

    #[test]
    fn password_length_is_counted_in_characters() {
        // Six multibyte characters must pass even though the byte length differs.
        let result = ValidatedCredentials::try_from(raw("user@nextmail.com", "ääääää"));
        assert!(result.is_ok());
    }

    #[test]
    fn email_validation_runs_before_password_validation() {
        let result = ValidatedCredentials::try_from(raw("not-an-email", "12"));
        assert_eq!(result.unwrap_err(), CredentialsError::MalformedEmail);
    }
}
