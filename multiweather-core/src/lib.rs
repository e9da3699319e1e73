//! Core library for the `multiweather` service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over weather providers
//! - Temperature scale conversions with validity bounds
//! - The aggregation algorithm that merges provider readings
//!
//! It is used by `multiweather-server`, but can also be reused by other
//! binaries or services.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod units;

pub use aggregate::aggregate;
pub use config::{Config, ProviderConfig};
pub use error::{AggregateError, ProviderError};
pub use model::{AggregateResult, Query, Reading};
pub use provider::{ProviderId, WeatherProvider};
