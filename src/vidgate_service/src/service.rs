use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use vidgate_adapters::AuthConfig;
use vidgate_axum::{
    AppState,
    routes::{change_password, current_user, login, logout, refresh_token, register},
};
use vidgate_core::IdentityStore;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The session-authentication service: all auth routes wired to one
/// identity store.
pub struct VidgateService {
    router: Router,
}

impl VidgateService {
    /// Create the service over the provided identity store.
    ///
    /// The store must be `Clone`; implementations share their backing
    /// handle internally, so clones are cheap.
    pub fn new<S>(store: S, config: AuthConfig) -> Self
    where
        S: IdentityStore + Clone + Send + Sync + 'static,
    {
        let state = AppState::new(store, config);

        let router = Router::new()
            .route("/register", post(register::<S>))
            .route("/login", post(login::<S>))
            .route("/logout", post(logout::<S>))
            .route("/refresh-token", post(refresh_token::<S>))
            .route("/change-password", post(change_password::<S>))
            .route("/current-user", get(current_user))
            .with_state(state);

        Self { router }
    }

    pub fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be nested into a larger application
    /// (the CRUD surface mounts its protected handlers around this).
    pub fn into_router(self) -> Router {
        self.router
    }

    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        axum::serve(listener, self.router).await
    }
}
