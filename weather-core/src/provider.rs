use crate::{error::FetchError, model::AlertPayload};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nws;

pub use nws::NwsProvider;

/// Source of alert payloads for a fully-formed URL.
#[async_trait]
pub trait AlertProvider: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<AlertPayload, FetchError>;
}
