//! The HTTP surface: a single aggregation endpoint.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use multiweather_core::{AggregateResult, Query, WeatherProvider, aggregate};
use serde::Serialize;

#[derive(Clone)]
struct AppState {
    providers: Arc<Vec<Box<dyn WeatherProvider>>>,
}

/// JSON body returned by the weather endpoint.
#[derive(Debug, Serialize)]
struct WeatherBody {
    city: String,
    lat: String,
    long: String,
    temp: String,
    took: String,
}

impl WeatherBody {
    fn new(city: String, result: AggregateResult, took: Duration) -> Self {
        Self {
            city,
            lat: format!("{:.4}", result.latitude),
            long: format!("{:.4}", result.longitude),
            temp: format!("{:.2}°C", result.celsius),
            took: format!("{took:?}"),
        }
    }
}

pub fn router(providers: Vec<Box<dyn WeatherProvider>>) -> Router {
    let state = AppState {
        providers: Arc::new(providers),
    };

    Router::new()
        .route("/weather/{city}", get(weather))
        .with_state(state)
}

pub async fn serve(providers: Vec<Box<dyn WeatherProvider>>, port: u16) -> anyhow::Result<()> {
    let app = router(providers);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("multiweather listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn weather(
    Path(city): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<WeatherBody>, (StatusCode, String)> {
    let begin = Instant::now();

    // The HTTP caller never knows the location up front.
    let query = Query::for_city(city);

    let result = aggregate(&state.providers, &query)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let body = WeatherBody::new(query.city, result, begin.elapsed());

    tracing::info!(
        city = %body.city,
        lat = %body.lat,
        long = %body.long,
        temp = %body.temp,
        "aggregated weather"
    );

    Ok(Json(body))
}
