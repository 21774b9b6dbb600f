use vidgate_core::{
    Email, IdentityStore, IdentityStoreError, Password, PasswordHasher, PublicUser, UserIdentity,
    Username,
};

/// Error types for the register use case.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User with the same email or username already exists")]
    IdentityAlreadyExists,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<IdentityStoreError> for RegisterError {
    fn from(e: IdentityStoreError) -> Self {
        match e {
            IdentityStoreError::IdentityAlreadyExists => Self::IdentityAlreadyExists,
            other => Self::UnexpectedError(other.to_string()),
        }
    }
}

/// Register use case - creates an identity with a hashed password.
pub struct RegisterUseCase<S, H>
where
    S: IdentityStore,
    H: PasswordHasher,
{
    identity_store: S,
    password_hasher: H,
}

impl<S, H> RegisterUseCase<S, H>
where
    S: IdentityStore,
    H: PasswordHasher,
{
    pub fn new(identity_store: S, password_hasher: H) -> Self {
        Self {
            identity_store,
            password_hasher,
        }
    }

    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        email: Email,
        password: Password,
    ) -> Result<PublicUser, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| RegisterError::UnexpectedError(e.to_string()))?;

        let identity = UserIdentity::new(username, email, password_hash);
        let public = identity.to_public();

        self.identity_store.add_identity(identity).await?;

        Ok(public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};
    use std::{collections::HashMap, sync::Arc};
    use tokio::sync::RwLock;
    use vidgate_core::{LoginId, PasswordHash, PasswordHasherError, RefreshToken, UserId};

    #[derive(Clone, Default)]
    struct MockIdentityStore {
        identities: Arc<RwLock<HashMap<UserId, UserIdentity>>>,
    }

    #[async_trait::async_trait]
    impl IdentityStore for MockIdentityStore {
        async fn add_identity(&self, identity: UserIdentity) -> Result<(), IdentityStoreError> {
            let mut identities = self.identities.write().await;
            let duplicate = identities.values().any(|i| {
                i.username() == identity.username() || i.email() == identity.email()
            });
            if duplicate {
                return Err(IdentityStoreError::IdentityAlreadyExists);
            }
            identities.insert(identity.id(), identity);
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: UserId,
        ) -> Result<Option<UserIdentity>, IdentityStoreError> {
            Ok(self.identities.read().await.get(&id).cloned())
        }

        async fn find_by_login(
            &self,
            _login: &LoginId,
        ) -> Result<Option<UserIdentity>, IdentityStoreError> {
            unimplemented!()
        }

        async fn set_refresh_token(
            &self,
            _id: UserId,
            _token: Option<RefreshToken>,
        ) -> Result<(), IdentityStoreError> {
            unimplemented!()
        }

        async fn set_password_hash(
            &self,
            _id: UserId,
            _hash: PasswordHash,
        ) -> Result<(), IdentityStoreError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct MockPasswordHasher;

    #[async_trait::async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(
            &self,
            password: &Password,
        ) -> Result<PasswordHash, PasswordHasherError> {
            Ok(PasswordHash::from(Secret::from(format!(
                "hash:{}",
                password.as_ref().expose_secret()
            ))))
        }

        async fn verify_password(&self, _password: &Password, _stored_hash: &PasswordHash) -> bool {
            unimplemented!()
        }
    }

    fn new_user() -> (Username, Email, Password) {
        (
            Username::try_from("creator_one".to_owned()).unwrap(),
            Email::try_from("creator@example.com".to_owned()).unwrap(),
            Password::try_from(Secret::from("secret123".to_owned())).unwrap(),
        )
    }

    #[tokio::test]
    async fn register_stores_a_hashed_password() {
        let store = MockIdentityStore::default();
        let use_case = RegisterUseCase::new(store.clone(), MockPasswordHasher);

        let (username, email, password) = new_user();
        let public = use_case.execute(username, email, password).await.unwrap();
        assert_eq!(public.username, "creator_one");

        let persisted = store.find_by_id(public.id).await.unwrap().unwrap();
        assert_eq!(
            persisted.password_hash().as_ref().expose_secret(),
            "hash:secret123"
        );
        assert!(persisted.current_refresh_token().is_none());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let store = MockIdentityStore::default();
        let use_case = RegisterUseCase::new(store, MockPasswordHasher);

        let (username, email, password) = new_user();
        use_case
            .execute(username.clone(), email.clone(), password.clone())
            .await
            .unwrap();

        let result = use_case.execute(username, email, password).await;
        assert!(matches!(result, Err(RegisterError::IdentityAlreadyExists)));
    }
}
