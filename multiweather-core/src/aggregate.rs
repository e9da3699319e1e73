//! Fan-out over the configured providers and merging of their readings.

use crate::{
    error::AggregateError,
    model::{AggregateResult, Query},
    provider::WeatherProvider,
};

/// Query every provider in order and merge their readings into one
/// result.
///
/// Failure handling is all-or-nothing: the first provider error in list
/// order aborts the whole call. That is distinct from the data-quality
/// filter, which silently skips readings whose Kelvin value is not
/// strictly positive (the "no measurement" sentinel). When no reading
/// qualifies, the average is `NaN` by floating-point division and is
/// surfaced as such rather than masked.
///
/// Coordinate resolution is first-write-wins: caller-supplied non-zero
/// coordinates are never replaced, and otherwise the first reading in
/// provider order carrying both coordinates decides. Providers always
/// receive the original query coordinates, never each other's output.
pub async fn aggregate(
    providers: &[Box<dyn WeatherProvider>],
    query: &Query,
) -> Result<AggregateResult, AggregateError> {
    let mut sum = 0.0;
    let mut count = 0u32;

    let mut resolved_lat = query.latitude;
    let mut resolved_long = query.longitude;

    for provider in providers {
        let reading = provider
            .fetch_reading(&query.city, query.latitude, query.longitude)
            .await
            .map_err(|source| AggregateError {
                provider: provider.id(),
                source,
            })?;

        tracing::debug!(
            provider = %provider.id(),
            celsius = reading.celsius,
            kelvin = reading.kelvin,
            measured = reading.is_measured(),
            "provider reading"
        );

        if reading.is_measured() {
            sum += reading.celsius;
            count += 1;
        }

        if reading.has_coordinates() && resolved_lat == 0.0 && resolved_long == 0.0 {
            resolved_lat = reading.latitude;
            resolved_long = reading.longitude;
        }
    }

    let celsius = sum / f64::from(count);

    Ok(AggregateResult {
        latitude: resolved_lat,
        longitude: resolved_long,
        celsius,
    })
}
