pub mod service;
pub mod tracing;

pub use service::VidgateService;
pub use tracing::init_tracing;
