//! Token refresh route: validates the presented refresh token against the
//! persisted slot and rotates the pair.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vidgate_application::{RefreshError, RefreshSessionUseCase};
use vidgate_core::{AccessToken, IdentityStore, RefreshToken};
use vidgate_adapters::create_auth_cookie;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: RefreshToken,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh_token<S>(
    State(state): State<AppState<S>>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> Result<impl IntoResponse, RefreshHttpError>
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    // Cookie first, body as the fallback, matching the gate's precedence.
    let presented = jar
        .get(&state.cookies.refresh)
        .map(|cookie| RefreshToken::new(cookie.value().to_owned()))
        .or_else(|| body.map(|Json(request)| request.refresh_token))
        .ok_or(RefreshHttpError::MissingToken)?;

    let use_case = RefreshSessionUseCase::new(state.store.clone(), state.authority.clone());
    let pair = use_case.execute(presented).await?;

    let jar = jar
        .add(create_auth_cookie(
            &state.cookies.access,
            pair.access.as_str().to_owned(),
        ))
        .add(create_auth_cookie(
            &state.cookies.refresh,
            pair.refresh.as_str().to_owned(),
        ));

    Ok((
        jar,
        Json(RefreshResponse {
            access_token: pair.access,
            refresh_token: pair.refresh,
        }),
    ))
}

#[derive(Debug, Error)]
pub enum RefreshHttpError {
    #[error("Missing refresh token")]
    MissingToken,
    #[error("{0}")]
    Refresh(#[from] RefreshError),
}

impl IntoResponse for RefreshHttpError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RefreshHttpError::MissingToken => {
                (StatusCode::UNAUTHORIZED, "Invalid refresh token".to_string())
            }
            // Expired, tampered, reused, and orphaned tokens all read the
            // same from outside; the distinction stays in the trace log.
            RefreshHttpError::Refresh(e @ (RefreshError::InvalidToken(_)
            | RefreshError::TokenReuseDetected
            | RefreshError::IdentityNotFound)) => {
                tracing::debug!(error = %e, "refresh rejected");
                (StatusCode::UNAUTHORIZED, "Invalid refresh token".to_string())
            }
            RefreshHttpError::Refresh(e) => {
                tracing::error!(error = %e, "refresh failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
