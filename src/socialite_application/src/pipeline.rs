use socialite_core::{
    AccountStore, AccountStoreError, HandleNormalizer, PipelineSettings, PipelineState,
    ProfileObservers, TokenGenerator,
};

use crate::use_cases::{
    CreateUserUseCase, CreatedUser, ResolveUsernameError, ResolveUsernameUseCase,
    UpdateUserDetailsError, UpdateUserDetailsUseCase,
};

/// How an authentication attempt left the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// An account is bound to the state; `changed` tells whether it was saved.
    Completed { changed: bool },
    /// No account could be bound, so the merge stage never ran.
    Halted,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    ResolveUsername(#[from] ResolveUsernameError),
    #[error(transparent)]
    AccountStore(#[from] AccountStoreError),
    #[error(transparent)]
    UpdateUserDetails(#[from] UpdateUserDetailsError),
}

/// Runs username resolution, account creation and profile merge over one
/// [`PipelineState`].
pub struct SocialAuthPipeline<S, G, N>
where
    S: AccountStore,
    G: TokenGenerator,
    N: HandleNormalizer,
{
    account_store: S,
    token_generator: G,
    normalizer: N,
    settings: PipelineSettings,
    observers: ProfileObservers,
}

impl<S, G, N> SocialAuthPipeline<S, G, N>
where
    S: AccountStore,
    G: TokenGenerator,
    N: HandleNormalizer,
{
    pub fn new(
        account_store: S,
        token_generator: G,
        normalizer: N,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            account_store,
            token_generator,
            normalizer,
            settings,
            observers: ProfileObservers::default(),
        }
    }

    pub fn with_observers(mut self, observers: ProfileObservers) -> Self {
        self.observers = observers;
        self
    }

    pub fn account_store(&self) -> &S {
        &self.account_store
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run every stage against `state`, recording `username`, `user` and
    /// `is_new` on it as they are decided.
    #[tracing::instrument(
        name = "SocialAuthPipeline::run",
        skip_all,
        fields(provider = %state.provider, uid = %state.uid)
    )]
    pub async fn run(&self, state: &mut PipelineState) -> Result<PipelineOutcome, PipelineError> {
        if state.user.is_some() || self.settings.create_users {
            let username = ResolveUsernameUseCase::new(
                &self.account_store,
                &self.token_generator,
                &self.normalizer,
                &self.settings,
            )
            .execute(&state.details, state.user.as_ref())
            .await?;
            state.username = Some(username);
        }

        let created = CreateUserUseCase::new(&self.account_store)
            .execute(state.user.take(), state.username.clone(), &state.details)
            .await?;
        let Some(CreatedUser { user, is_new }) = created else {
            tracing::debug!("No account bound, skipping profile update");
            return Ok(PipelineOutcome::Halted);
        };
        state.user = Some(user);
        state.is_new = is_new;

        let changed = UpdateUserDetailsUseCase::new(
            &self.account_store,
            &self.observers,
            &self.settings,
        )
        .execute(
            state.user.as_mut(),
            &state.provider,
            &state.details,
            &state.response,
            state.is_new,
        )
        .await?;

        Ok(PipelineOutcome::Completed { changed })
    }
}
