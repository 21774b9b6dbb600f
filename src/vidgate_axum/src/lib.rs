//! Axum integration for the vidgate session-authentication library.
//!
//! Thin handlers over the framework-agnostic use cases in
//! `vidgate_application`: each route extracts its inputs, runs one use
//! case, and maps the typed outcome onto a response. Failure kinds are
//! collapsed into generic client-facing messages here; the distinct
//! internal kinds only reach the trace log.

pub mod extract;
pub mod routes;
pub mod state;

pub use extract::CurrentIdentity;
pub use state::AppState;
