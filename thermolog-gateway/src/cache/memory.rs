use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use thermolog_core::{Hub, Report, Sensor, WeatherUpdate};
use tracing::info;

use crate::cache::WeatherCache;

/// In-memory cache. Cloning is cheap and every clone shares the same stores.
///
/// Operations touching several stores lock them in the order
/// hubs, sensors, reports.
#[derive(Clone, Default)]
pub struct MemoryCache {
    hubs: Arc<Mutex<HashMap<String, Hub>>>,
    sensors: Arc<Mutex<HashMap<String, Sensor>>>,
    reports: Arc<Mutex<HashMap<String, Vec<Report>>>>,
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryCacheError {
    #[error("mutex poisoned: {0}")]
    MutexPoisoned(String),
}

impl<T> From<PoisonError<T>> for MemoryCacheError {
    fn from(err: PoisonError<T>) -> Self {
        MemoryCacheError::MutexPoisoned(err.to_string())
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeatherCache for MemoryCache {
    type Error = MemoryCacheError;

    async fn get_hub(&self, id: &str) -> Result<Option<Hub>, Self::Error> {
        let hubs = self.hubs.lock()?;
        Ok(hubs.get(id).cloned())
    }

    async fn list_hubs(&self) -> Result<Vec<Hub>, Self::Error> {
        let hubs = self.hubs.lock()?;
        Ok(hubs.values().cloned().collect())
    }

    async fn upsert_hub(&self, hub: Hub) -> Result<(), Self::Error> {
        let mut hubs = self.hubs.lock()?;
        hubs.insert(hub.id.clone(), hub);
        Ok(())
    }

    async fn rename_hub(&self, id: &str, name: String) -> Result<Option<Hub>, Self::Error> {
        let mut hubs = self.hubs.lock()?;
        Ok(hubs.get_mut(id).map(|hub| {
            hub.name = name;
            hub.clone()
        }))
    }

    async fn get_sensor(&self, id: &str) -> Result<Option<Sensor>, Self::Error> {
        let sensors = self.sensors.lock()?;
        Ok(sensors.get(id).cloned())
    }

    async fn list_sensors(&self) -> Result<Vec<Sensor>, Self::Error> {
        let sensors = self.sensors.lock()?;
        Ok(sensors.values().cloned().collect())
    }

    async fn upsert_sensor(&self, sensor: Sensor) -> Result<(), Self::Error> {
        let mut sensors = self.sensors.lock()?;
        sensors.insert(sensor.id().to_owned(), sensor);
        Ok(())
    }

    async fn rename_sensor(
        &self,
        id: &str,
        name: String,
    ) -> Result<Option<Sensor>, Self::Error> {
        let mut sensors = self.sensors.lock()?;
        Ok(sensors.get_mut(id).map(|sensor| {
            sensor.set_name(name);
            sensor.clone()
        }))
    }

    async fn append_report(&self, report: Report) -> Result<(), Self::Error> {
        let mut reports = self.reports.lock()?;
        reports
            .entry(report.sensor_id.clone())
            .or_default()
            .push(report);
        Ok(())
    }

    async fn reports_for_sensor(
        &self,
        sensor_id: &str,
    ) -> Result<Option<Vec<Report>>, Self::Error> {
        let reports = self.reports.lock()?;
        Ok(reports.get(sensor_id).cloned())
    }

    async fn ingest_update(&self, update: &WeatherUpdate) -> Result<Report, Self::Error> {
        let mut hubs = self.hubs.lock()?;
        let mut sensors = self.sensors.lock()?;
        let mut reports = self.reports.lock()?;

        let mut hub = match hubs.get(&update.id) {
            Some(hub) => hub.clone(),
            None => {
                info!(hub_id = %update.id, "new hub");
                Hub::new(&update.id)
            }
        };
        hub.register_sensor(&update.sensor);

        // The sensor kind is decided by the first update only.
        let mut sensor = match sensors.get(&update.sensor) {
            Some(sensor) => sensor.clone(),
            None => {
                let sensor = Sensor::create(&update.sensor, &update.mt);
                info!(
                    sensor_id = %update.sensor,
                    hub_id = %update.id,
                    sensor_type = %sensor.general_type(),
                    "new sensor"
                );
                sensor
            }
        };
        sensor.init_from_update(update);
        let report = sensor.build_report(update);

        reports
            .entry(report.sensor_id.clone())
            .or_default()
            .push(report.clone());
        hubs.insert(hub.id.clone(), hub);
        sensors.insert(sensor.id().to_owned(), sensor);

        Ok(report)
    }
}
