use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use thermolog_core::Sensor;
use tracing::info;

use crate::cache::WeatherCache;

use super::error::ApiError;
use super::models::RenameRequest;

fn sensor_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Could not find sensor with ID {id}"))
}

/// GET /sensors
pub async fn list_sensors<C: WeatherCache>(
    State(cache): State<C>,
) -> Result<Json<Vec<Sensor>>, ApiError> {
    let sensors = cache.list_sensors().await.map_err(ApiError::internal)?;
    Ok(Json(sensors))
}

/// GET /sensors/{sensorID}
pub async fn get_sensor<C: WeatherCache>(
    State(cache): State<C>,
    Path(id): Path<String>,
) -> Result<Json<Sensor>, ApiError> {
    cache
        .get_sensor(&id)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| sensor_not_found(&id))
}

/// PUT /sensors/{sensorID}
///
/// Only the name can be changed.
pub async fn update_sensor<C: WeatherCache>(
    State(cache): State<C>,
    Path(id): Path<String>,
    request: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<Sensor>, ApiError> {
    let sensor = cache
        .get_sensor(&id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| sensor_not_found(&id))?;

    let Json(request) = request.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !request.id_matches(&id) {
        return Err(ApiError::BadRequest(format!(
            "ID mismatch. Provided sensor has an ID of {} however the endpoint for a sensor with ID {id} was used.",
            request.id.unwrap_or_default()
        )));
    }

    let Some(name) = request.name else {
        return Ok(Json(sensor));
    };

    info!(sensor_id = %id, name = %name, "renaming sensor");
    cache
        .rename_sensor(&id, name)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| sensor_not_found(&id))
}
