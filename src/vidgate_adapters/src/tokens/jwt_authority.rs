use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vidgate_core::{
    AccessToken, RefreshToken, TokenAuthority, TokenClaims, TokenError, UserId,
};

/// Signing secret and validity window for one token class.
#[derive(Clone)]
pub struct TokenClassConfig {
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
}

impl TokenClassConfig {
    fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// JWT-backed token authority (HS256).
///
/// Access and refresh tokens are signed with distinct secrets and carry
/// distinct validity windows, so a token of one class never verifies as
/// the other.
#[derive(Clone)]
pub struct JwtTokenAuthority {
    access: TokenClassConfig,
    refresh: TokenClassConfig,
}

impl JwtTokenAuthority {
    pub fn new(access: TokenClassConfig, refresh: TokenClassConfig) -> Self {
        Self { access, refresh }
    }
}

impl TokenAuthority for JwtTokenAuthority {
    fn issue_access_token(&self, user_id: UserId) -> Result<AccessToken, TokenError> {
        sign_token(user_id, &self.access).map(AccessToken::new)
    }

    fn issue_refresh_token(&self, user_id: UserId) -> Result<RefreshToken, TokenError> {
        sign_token(user_id, &self.refresh).map(RefreshToken::new)
    }

    fn verify_access_token(&self, raw: &str) -> Result<TokenClaims, TokenError> {
        decode_token(raw, &self.access)
    }

    fn verify_refresh_token(&self, raw: &str) -> Result<TokenClaims, TokenError> {
        decode_token(raw, &self.refresh)
    }
}

/// The wire-format claim set. Fixed fields only; anything else in the
/// payload is ignored rather than read.
///
/// `jti` makes every minted token distinct. Without it, two issuances
/// for the same user within one second would be byte-identical (`exp`
/// has 1-second resolution and HS256 is deterministic), and refresh
/// rotation would overwrite the slot with the very token it is meant
/// to retire.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    jti: Uuid,
}

fn sign_token(user_id: UserId, config: &TokenClassConfig) -> Result<String, TokenError> {
    let delta = chrono::Duration::try_seconds(config.ttl_seconds).ok_or(
        TokenError::UnexpectedError("Token ttl out of range".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError(
            "Token expiry out of range".to_string(),
        ))?
        .timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        jti: Uuid::new_v4(),
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret_bytes()),
    )
    .map_err(|e| TokenError::UnexpectedError(e.to_string()))
}

fn decode_token(raw: &str, config: &TokenClassConfig) -> Result<TokenClaims, TokenError> {
    let data = decode::<Claims>(
        raw,
        &DecodingKey::from_secret(config.secret_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    let user_id = UserId::parse(&data.claims.sub).map_err(|_| TokenError::Malformed)?;

    Ok(TokenClaims {
        user_id,
        expires_at: data.claims.exp,
    })
}
