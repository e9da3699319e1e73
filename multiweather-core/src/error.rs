use thiserror::Error;

use crate::{provider::ProviderId, units::OutOfRange};

/// Failure modes of a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or a non-success HTTP status from the provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a body we could not decode.
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider reported its temperature in an unknown unit system.
    #[error("unexpected unit flag '{0}'")]
    Unit(String),

    /// The reported temperature is below absolute zero.
    #[error("temperature conversion failed: {0}")]
    Conversion(#[from] OutOfRange),
}

/// The aggregation failed because one of its providers failed.
///
/// Wraps the first failure in provider order; once any provider errors,
/// no partial average is produced.
#[derive(Debug, Error)]
#[error("provider '{provider}' failed: {source}")]
pub struct AggregateError {
    pub provider: ProviderId,
    #[source]
    pub source: ProviderError,
}
