pub mod uuid_token_generator;

pub use uuid_token_generator::UuidTokenGenerator;
