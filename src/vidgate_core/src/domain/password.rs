use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::user::UserError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password as submitted by a client.
///
/// Wrapped in `Secret` so it is redacted from debug output and never
/// serialized. Only the hasher ever exposes the inner value.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Secret<String>")]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().len() >= MIN_PASSWORD_LENGTH {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidPassword)
        }
    }
}

/// A salted one-way password hash in PHC string format.
///
/// Never serialized outward; `PublicUser` carries no trace of it.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<Secret<String>> for PasswordHash {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_password_at_minimum_length() {
        let password = Password::try_from(Secret::from("12345678".to_owned()));
        assert!(password.is_ok());
    }

    #[test]
    fn rejects_short_password() {
        let password = Password::try_from(Secret::from("1234567".to_owned()));
        assert!(matches!(password, Err(UserError::InvalidPassword)));
    }

    #[test]
    fn debug_output_is_redacted() {
        let password = Password::try_from(Secret::from("secret123".to_owned())).unwrap();
        assert!(!format!("{password:?}").contains("secret123"));
    }
}
