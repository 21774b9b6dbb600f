//! Returns the identity the request gate attached.

use axum::Json;
use axum::response::IntoResponse;

use crate::extract::CurrentIdentity;

#[tracing::instrument(name = "Current user", skip(identity))]
pub async fn current_user(CurrentIdentity(identity): CurrentIdentity) -> impl IntoResponse {
    Json(serde_json::json!({ "user": identity.to_public() }))
}
