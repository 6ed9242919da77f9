use socialite_core::{Account, AccountStore, AccountStoreError, ProfileData, Username};

/// The account an authentication attempt continues with.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedUser {
    pub user: Account,
    pub is_new: bool,
}

/// Create user use case - reuses the bound account or registers a new one
pub struct CreateUserUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> CreateUserUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the create user use case
    ///
    /// # Arguments
    /// * `existing` - Account already bound to this identity, if any
    /// * `username` - Username resolved for a new account
    /// * `details` - Provider profile data, the source of the account email
    ///
    /// # Returns
    /// `None` when there is neither an account nor a username, which means the
    /// rest of the pipeline must be skipped.
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self, existing, details))]
    pub async fn execute(
        &self,
        existing: Option<Account>,
        username: Option<Username>,
        details: &ProfileData,
    ) -> Result<Option<CreatedUser>, AccountStoreError> {
        if let Some(user) = existing {
            return Ok(Some(CreatedUser {
                user,
                is_new: false,
            }));
        }

        let Some(username) = username else {
            return Ok(None);
        };

        let user = self
            .account_store
            .create_user(username, details.email())
            .await?;
        tracing::info!(username = %user.username(), "Registered new account");

        Ok(Some(CreatedUser { user, is_new: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use socialite_core::ProfileValue;
    use std::sync::Mutex;

    // Mock account store for testing
    #[derive(Default)]
    struct MockAccountStore {
        created: Mutex<Vec<(String, Option<String>)>>,
    }

    #[async_trait::async_trait]
    impl AccountStore for MockAccountStore {
        fn username_max_length(&self) -> usize {
            30
        }

        async fn user_exists(&self, _username: &Username) -> Result<bool, AccountStoreError> {
            unimplemented!()
        }

        async fn create_user(
            &self,
            username: Username,
            email: Option<String>,
        ) -> Result<Account, AccountStoreError> {
            self.created
                .lock()
                .unwrap()
                .push((username.to_string(), email.clone()));
            let account = Account::new(username, Utc::now());
            Ok(match email {
                Some(email) => account.with_field("email", email),
                None => account,
            })
        }

        async fn save_user(&self, _account: &Account) -> Result<(), AccountStoreError> {
            unimplemented!()
        }

        async fn get_user(&self, _username: &Username) -> Result<Account, AccountStoreError> {
            unimplemented!()
        }
    }

    struct FailingAccountStore;

    #[async_trait::async_trait]
    impl AccountStore for FailingAccountStore {
        fn username_max_length(&self) -> usize {
            30
        }

        async fn user_exists(&self, _username: &Username) -> Result<bool, AccountStoreError> {
            unimplemented!()
        }

        async fn create_user(
            &self,
            _username: Username,
            _email: Option<String>,
        ) -> Result<Account, AccountStoreError> {
            Err(AccountStoreError::UserAlreadyExists)
        }

        async fn save_user(&self, _account: &Account) -> Result<(), AccountStoreError> {
            unimplemented!()
        }

        async fn get_user(&self, _username: &Username) -> Result<Account, AccountStoreError> {
            unimplemented!()
        }
    }

    fn username(value: &str) -> Username {
        Username::parse(value).unwrap()
    }

    #[tokio::test]
    async fn test_existing_account_is_reused() {
        let store = MockAccountStore::default();
        let use_case = CreateUserUseCase::new(&store);
        let existing = Account::new(username("bob"), Utc::now());

        let result = use_case
            .execute(Some(existing.clone()), Some(username("alice")), &ProfileData::new())
            .await
            .unwrap();

        assert_eq!(
            result,
            Some(CreatedUser {
                user: existing,
                is_new: false,
            })
        );
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_username_halts() {
        let store = MockAccountStore::default();
        let use_case = CreateUserUseCase::new(&store);

        let result = use_case
            .execute(None, None, &ProfileData::new())
            .await
            .unwrap();

        assert_eq!(result, None);
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_account_is_created_with_email() {
        let store = MockAccountStore::default();
        let use_case = CreateUserUseCase::new(&store);
        let details = ProfileData::new()
            .with("username", "alice")
            .with("email", "a@x.com");

        let created = use_case
            .execute(None, Some(username("alice")), &details)
            .await
            .unwrap()
            .unwrap();

        assert!(created.is_new);
        assert_eq!(created.user.username().as_str(), "alice");
        assert_eq!(
            created.user.field("email"),
            Some(&ProfileValue::from("a@x.com"))
        );
        assert_eq!(
            *store.created.lock().unwrap(),
            vec![("alice".to_string(), Some("a@x.com".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_blank_email_is_not_passed() {
        let store = MockAccountStore::default();
        let use_case = CreateUserUseCase::new(&store);
        let details = ProfileData::new().with("email", "");

        use_case
            .execute(None, Some(username("alice")), &details)
            .await
            .unwrap();

        assert_eq!(
            *store.created.lock().unwrap(),
            vec![("alice".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let use_case = CreateUserUseCase::new(&FailingAccountStore);

        let result = use_case
            .execute(None, Some(username("alice")), &ProfileData::new())
            .await;

        assert_eq!(result, Err(AccountStoreError::UserAlreadyExists));
    }
}
