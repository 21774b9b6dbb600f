//! Account registration route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;
use vidgate_application::{RegisterError, RegisterUseCase};
use vidgate_core::{Email, IdentityStore, Password, UserError, Username};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip(state, request))]
pub async fn register<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, RegisterHttpError>
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    let username = Username::try_from(request.username)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(state.store.clone(), state.hasher.clone());
    let user = use_case.execute(username, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "user": user })),
    ))
}

#[derive(Debug, Error)]
pub enum RegisterHttpError {
    #[error("{0}")]
    Validation(#[from] UserError),
    #[error("{0}")]
    Register(#[from] RegisterError),
}

impl IntoResponse for RegisterHttpError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RegisterHttpError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            RegisterHttpError::Register(RegisterError::IdentityAlreadyExists) => (
                StatusCode::CONFLICT,
                "User with the same email or username already exists".to_string(),
            ),
            RegisterHttpError::Register(e) => {
                tracing::error!(error = %e, "registration failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
