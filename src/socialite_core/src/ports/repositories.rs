use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, username::Username};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Maximum username length, in characters, the store accepts.
    fn username_max_length(&self) -> usize;

    /// Storage-side cleanup applied to a raw username before normalization.
    fn clean_username(&self, raw: &str) -> String {
        raw.to_owned()
    }

    async fn user_exists(&self, username: &Username) -> Result<bool, AccountStoreError>;
    async fn create_user(
        &self,
        username: Username,
        email: Option<String>,
    ) -> Result<Account, AccountStoreError>;
    async fn save_user(&self, account: &Account) -> Result<(), AccountStoreError>;
    async fn get_user(&self, username: &Username) -> Result<Account, AccountStoreError>;
}
