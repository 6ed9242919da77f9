pub mod observers;
pub mod repositories;
pub mod services;
