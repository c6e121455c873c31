use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use thermolog_core::Hub;
use tracing::info;

use crate::cache::WeatherCache;

use super::error::ApiError;
use super::models::RenameRequest;

fn hub_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Could not find hub with ID {id}"))
}

/// GET /hubs
pub async fn list_hubs<C: WeatherCache>(
    State(cache): State<C>,
) -> Result<Json<Vec<Hub>>, ApiError> {
    let hubs = cache.list_hubs().await.map_err(ApiError::internal)?;
    Ok(Json(hubs))
}

/// GET /hubs/{hubID}
pub async fn get_hub<C: WeatherCache>(
    State(cache): State<C>,
    Path(id): Path<String>,
) -> Result<Json<Hub>, ApiError> {
    cache
        .get_hub(&id)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| hub_not_found(&id))
}

/// PUT /hubs/{hubID}
pub async fn update_hub<C: WeatherCache>(
    State(cache): State<C>,
    Path(id): Path<String>,
    request: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<Hub>, ApiError> {
    let hub = cache
        .get_hub(&id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| hub_not_found(&id))?;

    let Json(request) = request.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !request.id_matches(&id) {
        return Err(ApiError::BadRequest(format!(
            "Provided object has ID {} which does not match the hub ID {id} for the hub being updated.",
            request.id.unwrap_or_default()
        )));
    }

    let Some(name) = request.name else {
        return Ok(Json(hub));
    };

    info!(hub_id = %id, name = %name, "renaming hub");
    cache
        .rename_hub(&id, name)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .ok_or_else(|| hub_not_found(&id))
}
