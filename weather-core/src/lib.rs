//! Core library for the `weather-alerts` tool.
//!
//! This crate defines:
//! - Configuration handling (endpoint, headers, timeout)
//! - The alert provider abstraction and its NWS implementation
//! - Shared domain models (alert query, payload, features)
//! - Formatting of alerts into human-readable text
//! - The `get_alerts` operation that ties them together
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod alerts;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;

pub use alerts::{AlertService, NO_ACTIVE_ALERTS, UNABLE_TO_FETCH};
pub use config::Config;
pub use error::FetchError;
pub use model::{AlertFeature, AlertPayload, AlertProperties, AlertQuery};
pub use provider::{AlertProvider, NwsProvider};
