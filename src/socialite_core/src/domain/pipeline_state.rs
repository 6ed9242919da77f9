use serde_json::Value;

use super::{account::Account, profile::ProfileData, username::Username};

/// Per-attempt state threaded through every pipeline stage.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Name of the provider backend that authenticated the identity.
    pub provider: String,
    pub details: ProfileData,
    /// Raw provider payload, passed to observers untouched.
    pub response: Value,
    pub uid: String,
    pub username: Option<Username>,
    pub user: Option<Account>,
    pub is_new: bool,
}

impl PipelineState {
    pub fn new(
        provider: impl Into<String>,
        uid: impl Into<String>,
        details: ProfileData,
        response: Value,
    ) -> Self {
        Self {
            provider: provider.into(),
            details,
            response,
            uid: uid.into(),
            username: None,
            user: None,
            is_new: false,
        }
    }

    /// Binds an account that is already authenticated locally.
    pub fn with_user(mut self, user: Account) -> Self {
        self.user = Some(user);
        self
    }
}
