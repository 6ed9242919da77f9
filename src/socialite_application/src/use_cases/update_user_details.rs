use serde_json::Value;
use socialite_core::{
    Account, AccountStore, AccountStoreError, ObserverError, ObserverKind, PipelineSettings,
    ProfileData, ProfileObservers, ProfileUpdate, RESERVED_FIELDS,
};

/// Error types for the update user details use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateUserDetailsError {
    #[error("Observer error: {0}")]
    ObserverError(#[from] ObserverError),
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Update user details use case - merges provider data into the local account
pub struct UpdateUserDetailsUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
    observers: &'a ProfileObservers,
    settings: &'a PipelineSettings,
}

impl<'a, S> UpdateUserDetailsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(
        account_store: &'a S,
        observers: &'a ProfileObservers,
        settings: &'a PipelineSettings,
    ) -> Self {
        Self {
            account_store,
            observers,
            settings,
        }
    }

    /// Execute the update user details use case
    ///
    /// # Arguments
    /// * `account` - Account to update; nothing happens without one
    /// * `provider` - Name of the authenticating provider
    /// * `details` - Provider profile data
    /// * `response` - Raw provider payload handed to observers
    /// * `is_new` - Whether the account was created by this attempt
    ///
    /// # Returns
    /// Whether the account changed. A changed account is saved exactly once.
    /// If an observer fails, the error is returned at once and the account
    /// keeps its in-memory changes without being saved.
    #[tracing::instrument(
        name = "UpdateUserDetailsUseCase::execute",
        skip(self, account, details, response)
    )]
    pub async fn execute(
        &self,
        account: Option<&mut Account>,
        provider: &str,
        details: &ProfileData,
        response: &Value,
        is_new: bool,
    ) -> Result<bool, UpdateUserDetailsError> {
        let Some(account) = account else {
            return Ok(false);
        };

        let mut changed = merge_fields(account, details, is_new, self.settings);

        let update = ProfileUpdate {
            provider,
            response,
            details,
        };

        let responses = self
            .observers
            .dispatch(ObserverKind::PreUpdate, account, &update)
            .await?;
        changed |= responses.into_iter().any(|response| response);

        if is_new {
            let responses = self
                .observers
                .dispatch(ObserverKind::OnRegister, account, &update)
                .await?;
            changed |= responses.into_iter().any(|response| response);
        }

        if changed {
            self.account_store.save_user(account).await?;
            tracing::debug!(username = %account.username(), "Saved updated account");
        }

        Ok(changed)
    }
}

/// Copy provider fields onto `account`, returning whether any value changed.
///
/// Reserved keys and blank values are skipped, as are protected fields once
/// the account already existed.
pub fn merge_fields(
    account: &mut Account,
    details: &ProfileData,
    is_new: bool,
    settings: &PipelineSettings,
) -> bool {
    let mut changed = false;
    for (name, value) in details.iter() {
        if RESERVED_FIELDS.contains(&name) || (!is_new && settings.is_protected(name)) {
            continue;
        }
        if value.is_blank() || account.field(name) == Some(value) {
            continue;
        }
        account.set_field(name, value.clone());
        changed = true;
    }
    changed
}
