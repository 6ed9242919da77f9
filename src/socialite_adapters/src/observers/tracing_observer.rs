use socialite_core::{Account, ObserverError, ProfileObserver, ProfileUpdate};

/// Records each profile update as a tracing event without touching the account.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[async_trait::async_trait]
impl ProfileObserver for TracingObserver {
    fn name(&self) -> &str {
        "tracing"
    }

    async fn notify(
        &self,
        account: &mut Account,
        update: &ProfileUpdate<'_>,
    ) -> Result<bool, ObserverError> {
        tracing::info!(
            username = %account.username(),
            provider = update.provider,
            fields = update.details.len(),
            "Profile update"
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;
    use socialite_core::{ProfileData, Username};

    #[tokio::test]
    async fn test_reports_no_change() {
        let mut account = Account::new(Username::parse("alice").unwrap(), Utc::now());
        let before = account.clone();
        let details = ProfileData::new().with("first_name", "Alice");
        let response = Value::Null;
        let update = ProfileUpdate {
            provider: "github",
            response: &response,
            details: &details,
        };

        let changed = TracingObserver.notify(&mut account, &update).await.unwrap();

        assert!(!changed);
        assert_eq!(account, before);
    }
}
