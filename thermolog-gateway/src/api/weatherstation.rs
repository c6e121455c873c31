use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};
use thermolog_core::WeatherUpdate;
use tracing::{debug, error, warn};

use crate::cache::WeatherCache;

/// Builds the update from raw query pairs. A key sent more than once keeps
/// its first value.
fn first_values(pairs: Vec<(String, String)>) -> Result<WeatherUpdate, serde_json::Error> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields))
}

/// GET /updateweatherstation
///
/// Stands in for the vendor's cloud endpoint. Hubs do not care about the
/// answer, so every request is acknowledged with an empty `200`, whatever
/// happened to the payload.
pub async fn update_weather_station<C: WeatherCache>(
    State(cache): State<C>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> StatusCode {
    let update = match query {
        Ok(Query(pairs)) => first_values(pairs).map_err(|e| e.to_string()),
        Err(e) => Err(e.body_text()),
    };
    let update = match update {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "dropping unreadable weather station update");
            return StatusCode::OK;
        }
    };

    if !update.is_addressed() {
        warn!(hub_id = %update.id, sensor_id = %update.sensor, "dropping update without hub or sensor ID");
        return StatusCode::OK;
    }

    debug!(?update, "weather station update");
    if let Err(e) = cache.ingest_update(&update).await {
        error!(error = ?e, hub_id = %update.id, sensor_id = %update.sensor, "failed to record update");
    }

    StatusCode::OK
}
