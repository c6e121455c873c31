use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A gateway device relaying sensor transmissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub id: String,
    /// User-assigned name, empty until renamed.
    pub name: String,
    /// Every sensor this hub has relayed at least once.
    pub sensors: BTreeSet<String>,
}

impl Hub {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            sensors: BTreeSet::new(),
        }
    }

    pub fn register_sensor(&mut self, sensor_id: &str) -> &mut Self {
        if !self.sensors.contains(sensor_id) {
            self.sensors.insert(sensor_id.to_owned());
        }
        self
    }
}
