pub mod use_cases;

pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    login::{AuthenticatedSession, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    refresh_session::{RefreshError, RefreshSessionUseCase},
    register::{RegisterError, RegisterUseCase},
};
