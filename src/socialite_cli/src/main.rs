use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use socialite_adapters::{
    HashMapAccountStore, TracingObserver, UsernameNormalizer, UuidTokenGenerator,
    config::load_settings,
};
use socialite_application::{PipelineOutcome, SocialAuthPipeline};
use socialite_core::{
    AccountStore, ObserverKind, PipelineState, ProfileData, ProfileObservers, Username,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// A provider login replayed through the pipeline.
#[derive(Debug, Deserialize)]
struct Login {
    provider: String,
    uid: String,
    #[serde(default)]
    details: ProfileData,
    #[serde(default)]
    response: Value,
}

#[derive(Debug, Serialize)]
struct LoginReport {
    provider: String,
    uid: String,
    username: Option<String>,
    date_joined: Option<DateTime<Utc>>,
    is_new: bool,
    /// Absent when the pipeline halted before binding an account.
    changed: Option<bool>,
}

/// Replays a JSON array of provider logins against an in-memory account store
/// and prints one JSON report per login.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: socialite <logins.json>"))?;
    let raw = std::fs::read_to_string(&path).wrap_err_with(|| format!("Failed to read {path}"))?;
    let logins: Vec<Login> = serde_json::from_str(&raw).wrap_err("Invalid logins file")?;

    let settings = load_settings()?;
    let normalizer = UsernameNormalizer::from_settings(&settings);
    let observers =
        ProfileObservers::new().with(ObserverKind::PreUpdate, Arc::new(TracingObserver));
    let pipeline = SocialAuthPipeline::new(
        HashMapAccountStore::new(),
        UuidTokenGenerator::new(),
        normalizer,
        settings,
    )
    .with_observers(observers);

    // Provider identities already linked to a local account.
    let mut associations: HashMap<(String, String), Username> = HashMap::new();

    for login in logins {
        let key = (login.provider.clone(), login.uid.clone());
        let mut state =
            PipelineState::new(login.provider, login.uid, login.details, login.response);
        if let Some(username) = associations.get(&key) {
            let user = pipeline.account_store().get_user(username).await?;
            state = state.with_user(user);
        }

        let outcome = pipeline.run(&mut state).await?;
        if let Some(user) = &state.user {
            associations.insert(key, user.username().clone());
        }

        let report = LoginReport {
            provider: state.provider,
            uid: state.uid,
            username: state.username.map(String::from),
            date_joined: state.user.as_ref().map(|user| user.date_joined()),
            is_new: state.is_new,
            changed: match outcome {
                PipelineOutcome::Completed { changed } => Some(changed),
                PipelineOutcome::Halted => None,
            },
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
