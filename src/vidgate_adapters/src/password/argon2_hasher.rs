use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use vidgate_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id password hasher.
///
/// Hashing and verification run on the blocking pool; the argon2
/// parameters are deliberately expensive.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hasher_params() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<PasswordHash, PasswordHasherError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher_params()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::from(Secret::from(h.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?;

        result.map_err(PasswordHasherError::HashingFailed)
    }

    /// Fails closed: a malformed stored hash, a panicked worker, or any
    /// argon2 error all count as a mismatch.
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(&self, password: &Password, stored_hash: &PasswordHash) -> bool {
        let password = password.clone();
        let stored_hash = stored_hash.clone();
        let current_span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = argon2::PasswordHash::new(stored_hash.as_ref().expose_secret())
                    .map_err(|e| e.to_string())?;

                hasher_params()?
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                    .map_err(|e| e.to_string())
            })
        })
        .await;

        matches!(result, Ok(Ok(())))
    }
}
