use socialite_core::{
    Account, AccountStore, AccountStoreError, ConfigurationError, HandleNormalizer,
    PipelineSettings, ProfileData, TokenGenerator, Username,
};

/// Upper bound on suffix regenerations before giving up on a seed.
pub const MAX_COLLISION_RETRIES: usize = 100;

/// Error types for the username resolution use case
#[derive(Debug, thiserror::Error)]
pub enum ResolveUsernameError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("No unused username found after {retries} retries")]
    RetriesExhausted { retries: usize },
}

/// Resolve username use case - picks the username for an authenticating identity
pub struct ResolveUsernameUseCase<'a, S, G, N>
where
    S: AccountStore,
    G: TokenGenerator,
    N: HandleNormalizer,
{
    account_store: &'a S,
    token_generator: &'a G,
    normalizer: &'a N,
    settings: &'a PipelineSettings,
}

impl<'a, S, G, N> ResolveUsernameUseCase<'a, S, G, N>
where
    S: AccountStore,
    G: TokenGenerator,
    N: HandleNormalizer,
{
    pub fn new(
        account_store: &'a S,
        token_generator: &'a G,
        normalizer: &'a N,
        settings: &'a PipelineSettings,
    ) -> Self {
        Self {
            account_store,
            token_generator,
            normalizer,
            settings,
        }
    }

    /// Execute the username resolution use case
    ///
    /// # Arguments
    /// * `details` - Profile data reported by the provider
    /// * `existing` - Account already bound to this identity, if any
    ///
    /// # Returns
    /// The existing account's username, or a fresh one that the account store
    /// reports as unused. Fresh usernames are derived from the provider's
    /// preferred username (or a random token), cut to the store's length
    /// limit, and disambiguated with a random suffix while they collide.
    #[tracing::instrument(name = "ResolveUsernameUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        details: &ProfileData,
        existing: Option<&Account>,
    ) -> Result<Username, ResolveUsernameError> {
        if let Some(account) = existing {
            return Ok(account.username().clone());
        }

        let max_length = self.account_store.username_max_length();
        let uuid_length = self.settings.uuid_length;
        self.settings.check_entropy(max_length)?;

        let seed = details
            .preferred_username()
            .unwrap_or_else(|| self.token_generator.hex_token());
        let short_seed = truncate_chars(&seed, max_length - uuid_length);

        let mut candidate = self.candidate(&seed, max_length);
        let mut retries = 0;
        loop {
            if let Some(username) = candidate {
                if !self.account_store.user_exists(&username).await? {
                    tracing::debug!(%username, retries, "Resolved username");
                    return Ok(username);
                }
                tracing::debug!(%username, "Username taken");
            }

            if retries == MAX_COLLISION_RETRIES {
                return Err(ResolveUsernameError::RetriesExhausted { retries });
            }
            retries += 1;

            let token = self.token_generator.hex_token();
            let seed = format!("{short_seed}{}", truncate_chars(&token, uuid_length));
            candidate = self.candidate(&seed, max_length);
        }
    }

    /// Cleaned and normalized form of `seed`, or `None` when nothing usable is left.
    fn candidate(&self, seed: &str, max_length: usize) -> Option<Username> {
        let cleaned = self
            .account_store
            .clean_username(truncate_chars(seed, max_length));
        let normalized = self.normalizer.normalize(&cleaned);
        Username::parse(truncate_chars(&normalized, max_length)).ok()
    }
}

/// The first `max_chars` characters of `value`.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}
