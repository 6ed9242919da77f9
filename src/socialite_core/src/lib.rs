pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::Account,
    configuration_error::ConfigurationError,
    pipeline_state::PipelineState,
    profile::{ID_FIELD, PK_FIELD, ProfileData, ProfileValue, RESERVED_FIELDS, USERNAME_FIELD},
    settings::PipelineSettings,
    username::{Username, UsernameError},
};

pub use ports::{
    observers::{ObserverError, ObserverKind, ProfileObserver, ProfileObservers, ProfileUpdate},
    repositories::{AccountStore, AccountStoreError},
    services::{HandleNormalizer, TokenGenerator},
};
