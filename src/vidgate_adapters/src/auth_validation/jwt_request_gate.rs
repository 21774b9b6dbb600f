use async_trait::async_trait;
use axum_extra::extract::CookieJar;
use http::header::AUTHORIZATION;
use vidgate_core::{
    GateError, IdentityStore, RequestGate, TokenAuthority, UserIdentity,
};

use crate::tokens::JwtTokenAuthority;

/// JWT request gate backed by the identity store.
///
/// Extraction order is cookie first, then `Authorization: Bearer`; the
/// cookie wins when both are present. After the signature and expiry
/// check the identity is re-fetched from the store, so a deleted account
/// is rejected even while its access token is still within its window.
#[derive(Clone)]
pub struct JwtRequestGate<S> {
    identity_store: S,
    token_authority: JwtTokenAuthority,
    access_cookie_name: String,
}

impl<S> JwtRequestGate<S> {
    pub fn new(
        identity_store: S,
        token_authority: JwtTokenAuthority,
        access_cookie_name: String,
    ) -> Self {
        Self {
            identity_store,
            token_authority,
            access_cookie_name,
        }
    }
}

#[async_trait]
impl<S> RequestGate for JwtRequestGate<S>
where
    S: IdentityStore + Clone + 'static,
{
    type RequestParts = http::request::Parts;

    async fn authorize(&self, parts: &Self::RequestParts) -> Result<UserIdentity, GateError> {
        let cookie_jar = CookieJar::from_headers(&parts.headers);

        let token = extract_bearer_token(parts, &cookie_jar, &self.access_cookie_name)?;

        let claims = self.token_authority.verify_access_token(token)?;

        let identity = self
            .identity_store
            .find_by_id(claims.user_id)
            .await
            .map_err(|e| GateError::UnexpectedError(e.to_string()))?
            .ok_or(GateError::UnknownIdentity)?;

        Ok(identity)
    }
}

fn extract_bearer_token<'a>(
    parts: &'a http::request::Parts,
    jar: &'a CookieJar,
    cookie_name: &str,
) -> Result<&'a str, GateError> {
    if let Some(cookie) = jar.get(cookie_name) {
        return Ok(cookie.value());
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(GateError::MissingCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use secrecy::Secret;
    use vidgate_core::{Email, PasswordHash, UserId, Username};

    use crate::{
        persistence::InMemoryIdentityStore,
        tokens::TokenClassConfig,
    };

    const COOKIE_NAME: &str = "accessToken";

    fn authority() -> JwtTokenAuthority {
        JwtTokenAuthority::new(
            TokenClassConfig {
                secret: Secret::from("access-secret".to_owned()),
                ttl_seconds: 900,
            },
            TokenClassConfig {
                secret: Secret::from("refresh-secret".to_owned()),
                ttl_seconds: 864_000,
            },
        )
    }

    async fn seeded_gate() -> (JwtRequestGate<InMemoryIdentityStore>, UserId) {
        let store = InMemoryIdentityStore::new();
        let identity = UserIdentity::new(
            Username::try_from("viewer_one".to_owned()).unwrap(),
            Email::try_from("viewer@example.com".to_owned()).unwrap(),
            PasswordHash::from(Secret::from("$argon2id$fake".to_owned())),
        );
        let id = identity.id();
        store.add_identity(identity).await.unwrap();

        let gate = JwtRequestGate::new(store, authority(), COOKIE_NAME.to_owned());
        (gate, id)
    }

    fn parts_with_cookie(token: &str) -> http::request::Parts {
        let (parts, _) = Request::builder()
            .header("cookie", format!("{COOKIE_NAME}={token}"))
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    fn parts_with_bearer(token: &str) -> http::request::Parts {
        let (parts, _) = Request::builder()
            .header("authorization", format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn cookie_credential_is_accepted() {
        let (gate, id) = seeded_gate().await;
        let token = authority().issue_access_token(id).unwrap();

        let identity = gate.authorize(&parts_with_cookie(token.as_str())).await.unwrap();
        assert_eq!(identity.id(), id);
    }

    #[tokio::test]
    async fn bearer_header_is_a_fallback() {
        let (gate, id) = seeded_gate().await;
        let token = authority().issue_access_token(id).unwrap();

        let identity = gate.authorize(&parts_with_bearer(token.as_str())).await.unwrap();
        assert_eq!(identity.id(), id);
    }

    #[tokio::test]
    async fn cookie_takes_precedence_over_header() {
        let (gate, id) = seeded_gate().await;
        let token = authority().issue_access_token(id).unwrap();

        // Valid cookie beats a garbage header.
        let (parts, _) = Request::builder()
            .header("cookie", format!("{COOKIE_NAME}={}", token.as_str()))
            .header("authorization", "Bearer garbage")
            .body(())
            .unwrap()
            .into_parts();
        assert!(gate.authorize(&parts).await.is_ok());

        // A garbage cookie is not rescued by a valid header.
        let (parts, _) = Request::builder()
            .header("cookie", format!("{COOKIE_NAME}=garbage"))
            .header("authorization", format!("Bearer {}", token.as_str()))
            .body(())
            .unwrap()
            .into_parts();
        assert!(matches!(
            gate.authorize(&parts).await,
            Err(GateError::InvalidToken(_))
        ));
    }

    #[tokio::test]
    async fn missing_credential_is_rejected() {
        let (gate, _) = seeded_gate().await;
        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert!(matches!(
            gate.authorize(&parts).await,
            Err(GateError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn deleted_identity_is_rejected_despite_valid_token() {
        let store = InMemoryIdentityStore::new();
        let gate = JwtRequestGate::new(store, authority(), COOKIE_NAME.to_owned());

        // Token for an identity the store has never seen.
        let token = authority().issue_access_token(UserId::new()).unwrap();
        assert!(matches!(
            gate.authorize(&parts_with_cookie(token.as_str())).await,
            Err(GateError::UnknownIdentity)
        ));
    }

    #[tokio::test]
    async fn refresh_token_is_not_an_access_credential() {
        let (gate, id) = seeded_gate().await;
        let refresh = authority().issue_refresh_token(id).unwrap();

        assert!(matches!(
            gate.authorize(&parts_with_cookie(refresh.as_str())).await,
            Err(GateError::InvalidToken(_))
        ));
    }
}
