use vidgate_adapters::{
    Argon2PasswordHasher, AuthConfig, CookieNames, JwtRequestGate, JwtTokenAuthority,
};
use vidgate_core::IdentityStore;

/// Shared state for the authentication routes.
///
/// Generic over the identity store so the same routes serve the real
/// document-store adapter and the in-memory stub in tests. Cloning is
/// cheap; the store shares its backing handle internally.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub hasher: Argon2PasswordHasher,
    pub authority: JwtTokenAuthority,
    pub gate: JwtRequestGate<S>,
    pub cookies: CookieNames,
}

impl<S> AppState<S>
where
    S: IdentityStore + Clone,
{
    pub fn new(store: S, config: AuthConfig) -> Self {
        let authority = JwtTokenAuthority::new(config.access, config.refresh);
        let gate = JwtRequestGate::new(
            store.clone(),
            authority.clone(),
            config.cookies.access.clone(),
        );

        Self {
            store,
            hasher: Argon2PasswordHasher::new(),
            authority,
            gate,
            cookies: config.cookies,
        }
    }
}
