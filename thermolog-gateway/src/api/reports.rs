use axum::{
    Json,
    extract::{Path, State},
};
use thermolog_core::Report;

use crate::cache::WeatherCache;

use super::error::ApiError;

/// GET /reports/{sensorID}
pub async fn list_reports<C: WeatherCache>(
    State(cache): State<C>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Report>>, ApiError> {
    cache
        .reports_for_sensor(&id)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("Could not find any reports for a sensor with ID {id}"))
        })
}
