//! Logout route: revokes the persisted refresh token and clears both
//! credential cookies.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use thiserror::Error;
use vidgate_application::{LogoutError, LogoutUseCase};
use vidgate_adapters::create_removal_cookie;
use vidgate_core::IdentityStore;

use crate::{extract::CurrentIdentity, state::AppState};

#[tracing::instrument(name = "Logout", skip(state, identity, jar))]
pub async fn logout<S>(
    State(state): State<AppState<S>>,
    CurrentIdentity(identity): CurrentIdentity,
    jar: CookieJar,
) -> Result<impl IntoResponse, LogoutHttpError>
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.store.clone());
    use_case.execute(identity.id()).await?;

    let jar = jar
        .add(create_removal_cookie(&state.cookies.access))
        .add(create_removal_cookie(&state.cookies.refresh));

    Ok((jar, Json(serde_json::json!({ "message": "Logged out" }))))
}

#[derive(Debug, Error)]
pub enum LogoutHttpError {
    #[error("{0}")]
    Logout(#[from] LogoutError),
}

impl IntoResponse for LogoutHttpError {
    fn into_response(self) -> axum::response::Response {
        let LogoutHttpError::Logout(e) = self;
        tracing::error!(error = %e, "logout failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Internal server error" })),
        )
            .into_response()
    }
}
