//! # Socialite - social login identity pipeline
//!
//! This is a facade crate that re-exports all public APIs from the pipeline components.
//! Use this crate to get access to all identity resolution functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! socialite = { path = "../socialite" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `ProfileData`, `Account`, `Username`, `PipelineState`, etc.
//! - **Ports**: `AccountStore`, `TokenGenerator`, `HandleNormalizer`, `ProfileObserver`
//! - **Use cases**: `ResolveUsernameUseCase`, `CreateUserUseCase`, `UpdateUserDetailsUseCase`
//! - **Pipeline**: `SocialAuthPipeline` - runs the use cases over one login
//! - **Adapters**: `HashMapAccountStore`, `UuidTokenGenerator`, `UsernameNormalizer`, settings loading

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use socialite_core::*;
}

// Re-export most commonly used core types at the root level
pub use socialite_core::{
    Account, ConfigurationError, PipelineSettings, PipelineState, ProfileData, ProfileValue,
    Username, UsernameError,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use socialite_core::{
        AccountStore, AccountStoreError, HandleNormalizer, ObserverError, ObserverKind,
        ProfileObserver, ProfileObservers, ProfileUpdate, TokenGenerator,
    };
}

// Re-export ports at root level
pub use ports::{
    AccountStore, AccountStoreError, HandleNormalizer, ObserverError, ObserverKind,
    ProfileObserver, ProfileObservers, ProfileUpdate, TokenGenerator,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use socialite_application::use_cases::*;
}

// Re-export use cases and the pipeline at root level
pub use socialite_application::{
    CreateUserUseCase, CreatedUser, PipelineError, PipelineOutcome, ResolveUsernameError,
    ResolveUsernameUseCase, SocialAuthPipeline, UpdateUserDetailsError, UpdateUserDetailsUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use socialite_adapters::persistence::*;
    }

    /// Username normalization
    pub mod normalize {
        pub use socialite_adapters::normalize::*;
    }

    /// Random token sources
    pub mod tokens {
        pub use socialite_adapters::tokens::*;
    }

    /// Ready-made observers
    pub mod observers {
        pub use socialite_adapters::observers::*;
    }

    /// Configuration
    pub mod config {
        pub use socialite_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use socialite_adapters::{
    HashMapAccountStore, TracingObserver, UsernameNormalizer, UuidTokenGenerator,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export serde_json for building provider responses
pub use serde_json;
