use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{ACCEPT, HeaderValue},
};
use tracing::debug;

use crate::{config::Config, error::FetchError, model::AlertPayload};

use super::AlertProvider;

/// Fetches alerts from the National Weather Service API.
///
/// A new HTTP client is built for every call and dropped when it returns,
/// so nothing is shared between requests.
#[derive(Debug, Clone)]
pub struct NwsProvider {
    config: Config,
}

impl NwsProvider {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout())
            .build()
            .map_err(FetchError::Client)
    }
}

#[async_trait]
impl AlertProvider for NwsProvider {
    async fn fetch(&self, url: &str) -> Result<AlertPayload, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let accept = HeaderValue::from_str(&self.config.accept).map_err(|e| {
            FetchError::InvalidHeader {
                name: "Accept",
                value: self.config.accept.clone(),
                reason: e.to_string(),
            }
        })?;

        debug!(%parsed, "fetching active alerts");

        let http = self.client()?;

        let res = http
            .get(parsed)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| FetchError::from_send(url, e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::from_body(url, e))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { url: url.to_string(), source })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
