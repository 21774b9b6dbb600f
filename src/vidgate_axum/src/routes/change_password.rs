//! Password change route. Gated; re-verifies the current password.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;
use vidgate_application::{ChangePasswordError, ChangePasswordUseCase};
use vidgate_core::{IdentityStore, Password, UserError};

use crate::{extract::CurrentIdentity, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Change password", skip(state, identity, request))]
pub async fn change_password<S>(
    State(state): State<AppState<S>>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ChangePasswordHttpError>
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    let old_password = Password::try_from(request.old_password)?;
    let new_password = Password::try_from(request.new_password)?;

    let use_case = ChangePasswordUseCase::new(state.store.clone(), state.hasher.clone());
    use_case
        .execute(&identity, old_password, new_password)
        .await?;

    Ok(Json(serde_json::json!({
        "message": "Password changed successfully"
    })))
}

#[derive(Debug, Error)]
pub enum ChangePasswordHttpError {
    #[error("{0}")]
    Validation(#[from] UserError),
    #[error("{0}")]
    ChangePassword(#[from] ChangePasswordError),
}

impl IntoResponse for ChangePasswordHttpError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ChangePasswordHttpError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ChangePasswordHttpError::ChangePassword(ChangePasswordError::InvalidCredentials) => {
                (StatusCode::BAD_REQUEST, "Invalid old password".to_string())
            }
            ChangePasswordHttpError::ChangePassword(e) => {
                tracing::error!(error = %e, "change password failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
