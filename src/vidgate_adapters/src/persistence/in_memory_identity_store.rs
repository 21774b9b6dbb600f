use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use vidgate_core::{
    IdentityStore, IdentityStoreError, LoginId, PasswordHash, RefreshToken, UserId, UserIdentity,
};

/// In-memory stand-in for the external document store.
///
/// The lock is held only within each call; awaits never happen while it
/// is taken. Uniqueness is enforced on both username and email, matching
/// the compound lookup login performs.
#[derive(Default, Clone)]
pub struct InMemoryIdentityStore {
    identities: Arc<RwLock<HashMap<UserId, UserIdentity>>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn add_identity(&self, identity: UserIdentity) -> Result<(), IdentityStoreError> {
        let mut identities = self.identities.write().await;
        let duplicate = identities
            .values()
            .any(|i| i.username() == identity.username() || i.email() == identity.email());
        if duplicate {
            return Err(IdentityStoreError::IdentityAlreadyExists);
        }
        identities.insert(identity.id(), identity);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserIdentity>, IdentityStoreError> {
        Ok(self.identities.read().await.get(&id).cloned())
    }

    async fn find_by_login(
        &self,
        login: &LoginId,
    ) -> Result<Option<UserIdentity>, IdentityStoreError> {
        Ok(self
            .identities
            .read()
            .await
            .values()
            .find(|i| {
                i.username().as_str() == login.as_str() || i.email().as_str() == login.as_str()
            })
            .cloned())
    }

    async fn set_refresh_token(
        &self,
        id: UserId,
        token: Option<RefreshToken>,
    ) -> Result<(), IdentityStoreError> {
        let mut identities = self.identities.write().await;
        let identity = identities
            .get_mut(&id)
            .ok_or(IdentityStoreError::IdentityNotFound)?;
        identity.set_refresh_token(token);
        Ok(())
    }

    async fn set_password_hash(
        &self,
        id: UserId,
        hash: PasswordHash,
    ) -> Result<(), IdentityStoreError> {
        let mut identities = self.identities.write().await;
        let identity = identities
            .get_mut(&id)
            .ok_or(IdentityStoreError::IdentityNotFound)?;
        identity.set_password_hash(hash);
        Ok(())
    }
}
