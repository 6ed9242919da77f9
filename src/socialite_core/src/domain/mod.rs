pub mod account;
pub mod configuration_error;
pub mod pipeline_state;
pub mod profile;
pub mod settings;
pub mod username;
