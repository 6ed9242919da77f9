use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use socialite_core::{Account, AccountStore, AccountStoreError, Username};

pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 30;

#[derive(Clone)]
pub struct HashMapAccountStore {
    users: Arc<RwLock<HashMap<Username, Account>>>,
    max_length: usize,
}

impl Default for HashMapAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_USERNAME_MAX_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            max_length,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    fn username_max_length(&self) -> usize {
        self.max_length
    }

    async fn user_exists(&self, username: &Username) -> Result<bool, AccountStoreError> {
        let users = self.users.read().await;
        Ok(users.contains_key(username))
    }

    async fn create_user(
        &self,
        username: Username,
        email: Option<String>,
    ) -> Result<Account, AccountStoreError> {
        if username.char_len() > self.max_length {
            return Err(AccountStoreError::UnexpectedError(format!(
                "username longer than {} characters",
                self.max_length
            )));
        }

        let mut users = self.users.write().await;
        if users.contains_key(&username) {
            return Err(AccountStoreError::UserAlreadyExists);
        }

        let mut account = Account::new(username.clone(), Utc::now());
        if let Some(email) = email {
            account.set_field("email", email);
        }
        users.insert(username, account.clone());
        Ok(account)
    }

    async fn save_user(&self, account: &Account) -> Result<(), AccountStoreError> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(account.username())
            .ok_or(AccountStoreError::UserNotFound)?;

        *stored = account.clone();
        Ok(())
    }

    async fn get_user(&self, username: &Username) -> Result<Account, AccountStoreError> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or(AccountStoreError::UserNotFound)
    }
}
