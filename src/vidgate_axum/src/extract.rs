use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::IntoResponse,
};
use vidgate_core::{IdentityStore, RequestGate, UserIdentity};

use crate::state::AppState;

/// The identity attached to an authorized request.
///
/// Using this extractor is what makes a route protected: it runs the
/// request gate, which re-fetches the account from the store, so
/// handlers never trust claims alone.
pub struct CurrentIdentity(pub UserIdentity);

impl<S> FromRequestParts<AppState<S>> for CurrentIdentity
where
    S: IdentityStore + Clone + Send + Sync + 'static,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        match state.gate.authorize(parts).await {
            Ok(identity) => Ok(CurrentIdentity(identity)),
            Err(e) => {
                // The kind (missing, invalid, expired, unknown identity)
                // is logged but never distinguished in the response.
                tracing::debug!(error = %e, "request gate rejected credential");
                Err(AuthRejection)
            }
        }
    }
}

/// Uniform rejection for every gate failure kind.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Unauthorized" })),
        )
            .into_response()
    }
}
