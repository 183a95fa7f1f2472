//! The `get_alerts` operation: build URL, fetch, format, summarize.

use std::sync::Arc;

use tracing::{error, warn};

use crate::{
    config::Config,
    error::FetchError,
    format::format_alert,
    model::{AlertPayload, AlertQuery},
    provider::{AlertProvider, NwsProvider},
};

/// Returned when the fetch fails or the payload has no `features` field.
pub const UNABLE_TO_FETCH: &str = "unable to fetch alerts";

/// Returned when the payload's `features` list is empty.
pub const NO_ACTIVE_ALERTS: &str = "NO active alerts for this state";

/// Placed between formatted alerts.
pub const ALERT_SEPARATOR: &str = "\n---\n";

/// Looks up active alerts for a region and renders them as text.
///
/// Holds no per-request state; clones share the provider.
#[derive(Debug, Clone)]
pub struct AlertService {
    config: Config,
    provider: Arc<dyn AlertProvider>,
}

impl AlertService {
    pub fn new(config: Config, provider: Arc<dyn AlertProvider>) -> Self {
        Self { config, provider }
    }

    /// Service backed by the NWS API with the given configuration.
    pub fn from_config(config: Config) -> Self {
        let provider = Arc::new(NwsProvider::new(config.clone()));
        Self::new(config, provider)
    }

    /// Active alerts for `state` as human-readable text.
    ///
    /// Never fails: every outcome is one of [`UNABLE_TO_FETCH`],
    /// [`NO_ACTIVE_ALERTS`], or the formatted alerts.
    pub async fn get_alerts(&self, state: &str) -> String {
        let query = AlertQuery::new(state);
        let url = self.config.alerts_url(&query.state);
        let result = self.provider.fetch(&url).await;

        if let Err(err) = &result {
            log_failure(&query, err);
        }

        summarize(result)
    }
}

/// Collapse a fetch result into the tool's text output.
pub fn summarize(result: Result<AlertPayload, FetchError>) -> String {
    let features = match result {
        Ok(AlertPayload { features: Some(features) }) => features,
        Ok(AlertPayload { features: None }) | Err(_) => return UNABLE_TO_FETCH.to_string(),
    };

    if features.is_empty() {
        return NO_ACTIVE_ALERTS.to_string();
    }

    features.iter().map(format_alert).collect::<Vec<_>>().join(ALERT_SEPARATOR)
}

fn log_failure(query: &AlertQuery, err: &FetchError) {
    if err.is_transient() {
        warn!(state = %query.state, error = %err, "alert fetch failed");
    } else {
        error!(state = %query.state, error = %err, "alert fetch misconfigured");
    }
}
