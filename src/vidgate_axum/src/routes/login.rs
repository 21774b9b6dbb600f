//! Login route: opens a session and delivers the token pair both in the
//! response body and as credential-bearing cookies.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vidgate_application::{LoginError, LoginUseCase};
use vidgate_core::{
    AccessToken, IdentityStore, LoginId, Password, PublicUser, RefreshToken, UserError,
};
use vidgate_adapters::create_auth_cookie;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PublicUser,
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

#[tracing::instrument(name = "Login", skip(state, request))]
pub async fn login<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, LoginHttpError>
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    let login = request
        .username
        .or(request.email)
        .ok_or(LoginHttpError::MissingLogin)
        .and_then(|v| LoginId::try_from(v).map_err(LoginHttpError::Validation))?;
    let password = Password::try_from(request.password).map_err(LoginHttpError::Validation)?;

    let use_case = LoginUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.authority.clone(),
    );
    let session = use_case.execute(login, password).await?;

    let jar = jar
        .add(create_auth_cookie(
            &state.cookies.access,
            session.tokens.access.as_str().to_owned(),
        ))
        .add(create_auth_cookie(
            &state.cookies.refresh,
            session.tokens.refresh.as_str().to_owned(),
        ));

    Ok((
        jar,
        Json(LoginResponse {
            user: session.user,
            access_token: session.tokens.access,
            refresh_token: session.tokens.refresh,
        }),
    ))
}

#[derive(Debug, Error)]
pub enum LoginHttpError {
    #[error("Username or email is required")]
    MissingLogin,
    #[error("{0}")]
    Validation(UserError),
    #[error("{0}")]
    Login(#[from] LoginError),
}

impl IntoResponse for LoginHttpError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            LoginHttpError::MissingLogin | LoginHttpError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // Unknown user and wrong password are logged apart but
            // answered alike, so login cannot be used to probe for
            // accounts.
            LoginHttpError::Login(e @ (LoginError::IdentityNotFound
            | LoginError::InvalidCredentials)) => {
                tracing::debug!(error = %e, "login rejected");
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            LoginHttpError::Login(e) => {
                tracing::error!(error = %e, "login failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
