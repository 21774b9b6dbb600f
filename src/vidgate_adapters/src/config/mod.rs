use secrecy::Secret;
use serde::Deserialize;

use crate::tokens::TokenClassConfig;

/// Names of the two credential-bearing cookies.
#[derive(Debug, Clone)]
pub struct CookieNames {
    pub access: String,
    pub refresh: String,
}

/// Process-wide authentication configuration, injected at startup.
///
/// Two distinct signing secrets and two distinct validity windows are
/// required; business logic never reads the environment directly.
#[derive(Clone)]
pub struct AuthConfig {
    pub access: TokenClassConfig,
    pub refresh: TokenClassConfig,
    pub cookies: CookieNames,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    access_token_secret: String,
    refresh_token_secret: String,
    access_token_ttl_seconds: i64,
    refresh_token_ttl_seconds: i64,
    access_cookie_name: String,
    refresh_cookie_name: String,
}

impl AuthConfig {
    /// Load from the environment (prefix `VIDGATE_`), with `.env` support.
    ///
    /// `VIDGATE_ACCESS_TOKEN_SECRET` and `VIDGATE_REFRESH_TOKEN_SECRET`
    /// are required; TTLs default to 15 minutes / 10 days and the cookie
    /// names to `accessToken` / `refreshToken`.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let raw: RawSettings = config::Config::builder()
            .set_default("access_token_ttl_seconds", 900)?
            .set_default("refresh_token_ttl_seconds", 864_000)?
            .set_default("access_cookie_name", "accessToken")?
            .set_default("refresh_cookie_name", "refreshToken")?
            .add_source(config::Environment::with_prefix("VIDGATE"))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            access: TokenClassConfig {
                secret: Secret::from(raw.access_token_secret),
                ttl_seconds: raw.access_token_ttl_seconds,
            },
            refresh: TokenClassConfig {
                secret: Secret::from(raw.refresh_token_secret),
                ttl_seconds: raw.refresh_token_ttl_seconds,
            },
            cookies: CookieNames {
                access: raw.access_cookie_name,
                refresh: raw.refresh_cookie_name,
            },
        })
    }
}
