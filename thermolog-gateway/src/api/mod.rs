pub mod error;
pub mod hubs;
pub mod models;
pub mod reports;
pub mod sensors;
pub mod weatherstation;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::cache::WeatherCache;

pub fn router<C: WeatherCache>(cache: C) -> Router {
    Router::new()
        // Hub uplink, both at the root and under the vendor's prefix
        .route(
            "/updateweatherstation",
            get(weatherstation::update_weather_station::<C>),
        )
        .route(
            "/weatherstation/updateweatherstation",
            get(weatherstation::update_weather_station::<C>),
        )
        // Hub routes
        .route("/hubs", get(hubs::list_hubs::<C>))
        .route(
            "/hubs/{id}",
            get(hubs::get_hub::<C>).put(hubs::update_hub::<C>),
        )
        // Sensor routes
        .route("/sensors", get(sensors::list_sensors::<C>))
        .route(
            "/sensors/{id}",
            get(sensors::get_sensor::<C>).put(sensors::update_sensor::<C>),
        )
        .route("/sensors/{id}/reports", get(reports::list_reports::<C>))
        .route("/reports/{id}", get(reports::list_reports::<C>))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(cache)
}

async fn health_handler() -> &'static str {
    "OK"
}
