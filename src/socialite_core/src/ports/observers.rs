use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{account::Account, profile::ProfileData};

/// The point in the profile merge at which an observer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    /// After provider fields are merged, on every login.
    PreUpdate,
    /// After the pre-update observers, only when the account was just created.
    OnRegister,
}

impl ObserverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreUpdate => "pre_update",
            Self::OnRegister => "on_register",
        }
    }
}

/// What an observer is told about the login being processed.
#[derive(Debug, Clone, Copy)]
pub struct ProfileUpdate<'a> {
    pub provider: &'a str,
    pub response: &'a Value,
    pub details: &'a ProfileData,
}

#[derive(Debug, Error)]
#[error("Observer {observer} failed: {message}")]
pub struct ObserverError {
    pub observer: String,
    pub message: String,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            message: message.into(),
        }
    }
}

/// Side effect run while provider data is merged into an account.
///
/// Observers may mutate the account and must report whether they did, so the
/// merge knows if the account needs saving.
#[async_trait]
pub trait ProfileObserver: Send + Sync {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn notify(
        &self,
        account: &mut Account,
        update: &ProfileUpdate<'_>,
    ) -> Result<bool, ObserverError>;
}

/// Caller-owned observer lists, one per [`ObserverKind`].
#[derive(Clone, Default)]
pub struct ProfileObservers {
    pre_update: Vec<Arc<dyn ProfileObserver>>,
    on_register: Vec<Arc<dyn ProfileObserver>>,
}

impl fmt::Debug for ProfileObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileObservers")
            .field("pre_update", &self.pre_update.len())
            .field("on_register", &self.on_register.len())
            .finish()
    }
}

impl ProfileObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ObserverKind, observer: Arc<dyn ProfileObserver>) {
        self.list_mut(kind).push(observer);
    }

    pub fn with(mut self, kind: ObserverKind, observer: Arc<dyn ProfileObserver>) -> Self {
        self.register(kind, observer);
        self
    }

    pub fn observers(&self, kind: ObserverKind) -> &[Arc<dyn ProfileObserver>] {
        match kind {
            ObserverKind::PreUpdate => &self.pre_update,
            ObserverKind::OnRegister => &self.on_register,
        }
    }

    /// Notify every observer of `kind` in registration order.
    ///
    /// Each observer runs to completion before the next starts, and all of
    /// them run regardless of what earlier ones reported. The first failure
    /// aborts the dispatch.
    pub async fn dispatch(
        &self,
        kind: ObserverKind,
        account: &mut Account,
        update: &ProfileUpdate<'_>,
    ) -> Result<Vec<bool>, ObserverError> {
        let observers = self.observers(kind);
        let mut responses = Vec::with_capacity(observers.len());
        for observer in observers {
            let changed = observer.notify(account, update).await.inspect_err(|error| {
                tracing::warn!(
                    kind = kind.as_str(),
                    observer = observer.name(),
                    error = %error,
                    "Observer failed"
                );
            })?;
            tracing::debug!(
                kind = kind.as_str(),
                observer = observer.name(),
                changed,
                "Observer notified"
            );
            responses.push(changed);
        }
        Ok(responses)
    }

    fn list_mut(&mut self, kind: ObserverKind) -> &mut Vec<Arc<dyn ProfileObserver>> {
        match kind {
            ObserverKind::PreUpdate => &mut self.pre_update,
            ObserverKind::OnRegister => &mut self.on_register,
        }
    }
}
