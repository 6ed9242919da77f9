pub mod config;
pub mod normalize;
pub mod observers;
pub mod persistence;
pub mod tokens;

pub use normalize::UsernameNormalizer;
pub use observers::TracingObserver;
pub use persistence::HashMapAccountStore;
pub use tokens::UuidTokenGenerator;
