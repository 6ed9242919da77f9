pub mod hashmap_account_store;

pub use hashmap_account_store::{DEFAULT_USERNAME_MAX_LENGTH, HashMapAccountStore};
