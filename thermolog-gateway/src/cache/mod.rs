pub mod memory;

use async_trait::async_trait;
use thermolog_core::{Hub, Report, Sensor, WeatherUpdate};

/// Storage for everything the gateway has learned from hub traffic.
///
/// Every read hands out owned copies, so callers can never alter cached
/// state through a returned value.
#[async_trait]
pub trait WeatherCache: Clone + Send + Sync + 'static {
    /// Error type specific to this cache implementation
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_hub(&self, id: &str) -> Result<Option<Hub>, Self::Error>;

    /// All known hubs, in no particular order.
    async fn list_hubs(&self) -> Result<Vec<Hub>, Self::Error>;

    /// Stores the hub, replacing any hub with the same ID.
    async fn upsert_hub(&self, hub: Hub) -> Result<(), Self::Error>;

    /// Renames a hub. Returns `None` when the hub is unknown.
    async fn rename_hub(&self, id: &str, name: String) -> Result<Option<Hub>, Self::Error>;

    async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, Self::Error>;

    /// All known sensors, in no particular order.
    async fn list_sensors(&self) -> Result<Vec<Sensor>, Self::Error>;

    /// Stores the sensor, replacing any sensor with the same ID.
    async fn upsert_sensor(&self, sensor: Sensor) -> Result<(), Self::Error>;

    /// Renames a sensor. Returns `None` when the sensor is unknown.
    async fn rename_sensor(&self, id: &str, name: String)
    -> Result<Option<Sensor>, Self::Error>;

    /// Appends a report to its sensor's history.
    async fn append_report(&self, report: Report) -> Result<(), Self::Error>;

    /// Reports for a sensor in arrival order, or `None` if the sensor never
    /// reported.
    async fn reports_for_sensor(&self, sensor_id: &str)
    -> Result<Option<Vec<Report>>, Self::Error>;

    /// Records one hub transmission: registers the sensor on its hub,
    /// creates or refreshes the sensor and appends the report it produced.
    async fn ingest_update(&self, update: &WeatherUpdate) -> Result<Report, Self::Error>;
}
