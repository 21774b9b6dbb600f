//! # Vidgate - Session Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the session
//! authentication components. Use this crate to get access to the whole
//! authentication surface in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! vidgate = { path = "../vidgate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `UserIdentity`, etc.
//! - **Ports**: `IdentityStore`, `PasswordHasher`, `TokenAuthority`, `RequestGate`
//! - **Use cases**: `LoginUseCase`, `RefreshSessionUseCase`, `LogoutUseCase`, etc.
//! - **Adapters**: `Argon2PasswordHasher`, `JwtTokenAuthority`, `InMemoryIdentityStore`, etc.
//! - **Service**: `VidgateService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use vidgate_core::*;
}

// Re-export most commonly used core types at the root level
pub use vidgate_core::{
    AccessToken, Email, LoginId, Password, PasswordHash, PublicUser, RefreshToken, TokenClaims,
    TokenPair, UserError, UserId, UserIdentity, Username,
};

// ============================================================================
// Ports (Repository and Service Traits)
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use vidgate_core::{
        GateError, IdentityStore, IdentityStoreError, PasswordHasher, PasswordHasherError,
        RequestGate, TokenAuthority, TokenError,
    };
}

// Re-export port traits at root level
pub use vidgate_core::{
    GateError, IdentityStore, IdentityStoreError, PasswordHasher, PasswordHasherError, RequestGate,
    TokenAuthority, TokenError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use vidgate_application::*;
}

// Re-export use cases at root level
pub use vidgate_application::{
    ChangePasswordUseCase, LoginUseCase, LogoutUseCase, RefreshSessionUseCase, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Password hashing implementations
    pub mod password {
        pub use vidgate_adapters::password::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use vidgate_adapters::persistence::*;
    }

    /// Token signing and verification
    pub mod tokens {
        pub use vidgate_adapters::tokens::*;
    }

    /// Request-gate and cookie utilities
    pub mod auth {
        pub use vidgate_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use vidgate_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use vidgate_adapters::{
    Argon2PasswordHasher, AuthConfig, CookieNames, InMemoryIdentityStore, JwtRequestGate,
    JwtTokenAuthority, TokenClassConfig,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use vidgate_service::{VidgateService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
