use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::Serialize;

use crate::report::{Readings, Report};
use crate::sensor_type::{GeneralType, SpecificType};
use crate::update::{WeatherUpdate, parse_float, parse_int};

/// The most recent contact between a sensor and one of the hubs relaying it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HubContact {
    /// Hub ID.
    pub id: String,
    /// Signal strength as reported by the hub (`rssi`).
    pub signal: Option<i64>,
    pub last_contact: Timestamp,
}

/// A physical weather sensor.
///
/// The general type is fixed when the sensor is created and decides which
/// readings [`Sensor::build_report`] extracts. Only the name can be changed
/// from outside; every other field follows the updates the sensor sends.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    id: String,
    #[serde(rename = "type")]
    general_type: GeneralType,
    sub_types: BTreeSet<String>,
    name: String,
    battery: String,
    hubs: Vec<HubContact>,
}

impl Sensor {
    pub fn create(id: impl Into<String>, raw_type: &str) -> Self {
        Self {
            id: id.into(),
            general_type: SpecificType::from_raw(raw_type).general(),
            sub_types: BTreeSet::new(),
            name: String::new(),
            battery: String::new(),
            hubs: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn general_type(&self) -> GeneralType {
        self.general_type
    }

    pub fn sub_types(&self) -> &BTreeSet<String> {
        &self.sub_types
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn battery(&self) -> &str {
        &self.battery
    }

    pub fn hubs(&self) -> &[HubContact] {
        &self.hubs
    }

    pub fn hub(&self, hub_id: &str) -> Option<&HubContact> {
        self.hubs.iter().find(|contact| contact.id == hub_id)
    }

    /// Refreshes the sensor's state from an update. Applying the same update
    /// twice leaves the sensor as it was after the first application, apart
    /// from the contact time.
    pub fn init_from_update(&mut self, update: &WeatherUpdate) -> &mut Self {
        self.init_from_update_at(update, Timestamp::now())
    }

    pub fn init_from_update_at(&mut self, update: &WeatherUpdate, now: Timestamp) -> &mut Self {
        self.id.clone_from(&update.sensor);

        // Only five-in-one units come in several hardware revisions.
        if self.general_type == GeneralType::FiveInOne {
            let specific = SpecificType::from_raw(&update.mt);
            if specific.general() == GeneralType::FiveInOne
                && !self.sub_types.contains(specific.as_str())
            {
                self.sub_types.insert(specific.as_str().to_owned());
            }
        }

        let signal = parse_int(update.rssi.as_deref());
        match self.hubs.iter_mut().find(|contact| contact.id == update.id) {
            Some(contact) => {
                contact.signal = signal;
                contact.last_contact = now;
            }
            None => self.hubs.push(HubContact {
                id: update.id.clone(),
                signal,
                last_contact: now,
            }),
        }

        if let Some(battery) = &update.battery {
            self.battery.clone_from(battery);
        }

        self
    }

    pub fn build_report(&self, update: &WeatherUpdate) -> Report {
        self.build_report_at(update, Timestamp::now())
    }

    pub fn build_report_at(&self, update: &WeatherUpdate, date: Timestamp) -> Report {
        let float = |field: &Option<String>| parse_float(field.as_deref());

        let readings = match self.general_type {
            GeneralType::Tower => Readings::Tower {
                temperature: float(&update.tempf),
                humidity: float(&update.humidity),
            },
            GeneralType::ProIn => Readings::ProIn {
                temperature: float(&update.indoortempf),
                humidity: float(&update.indoorhumidity),
                water_is_present: update.water.as_deref() == Some("1"),
            },
            // The two hardware revisions send disjoint field sets.
            GeneralType::FiveInOne => match SpecificType::from_raw(&update.mt) {
                SpecificType::FiveInOne31 => Readings::FiveInOneWind {
                    wind_speed: parse_int(update.windspeedmph.as_deref()),
                    wind_direction: float(&update.winddir),
                    rain: float(&update.rainin),
                    daily_rain: float(&update.dailyrainin),
                },
                _ => Readings::FiveInOneClimate {
                    temperature: float(&update.tempf),
                    humidity: float(&update.humidity),
                    wind_speed: parse_int(update.windspeedmph.as_deref()),
                },
            },
            GeneralType::Unknown => Readings::Base {},
        };

        Report {
            date,
            hub_id: update.id.clone(),
            sensor_id: update.sensor.clone(),
            barometric: float(&update.baromin),
            readings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(mt: &str) -> WeatherUpdate {
        WeatherUpdate {
            id: "HUB1".into(),
            sensor: "S1".into(),
            mt: mt.into(),
            battery: Some("normal".into()),
            rssi: Some("3".into()),
            baromin: Some("30.17".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_selects_kind_from_specific_type() {
        assert_eq!(Sensor::create("S1", "tower").general_type(), GeneralType::Tower);
        assert_eq!(Sensor::create("S1", "5N1x31").general_type(), GeneralType::FiveInOne);
        assert_eq!(Sensor::create("S1", "ProIn").general_type(), GeneralType::ProIn);
        assert_eq!(Sensor::create("S1", "lightning").general_type(), GeneralType::Unknown);
    }

    #[test]
    fn init_records_hub_contact_and_battery() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let mut sensor = Sensor::create("S1", "tower");
        sensor.init_from_update_at(&update("tower"), now);

        assert_eq!(sensor.id(), "S1");
        assert_eq!(sensor.battery(), "normal");
        assert_eq!(
            sensor.hub("HUB1"),
            Some(&HubContact {
                id: "HUB1".into(),
                signal: Some(3),
                last_contact: now,
            })
        );
        assert!(sensor.sub_types().is_empty());
    }

    #[test]
    fn init_is_idempotent_per_hub() {
        let mut sensor = Sensor::create("S1", "tower");
        let first = update("tower");
        let second = WeatherUpdate {
            rssi: Some("1".into()),
            battery: Some("low".into()),
            ..first.clone()
        };

        sensor.init_from_update(&first).init_from_update(&second);

        assert_eq!(sensor.hubs().len(), 1);
        assert_eq!(sensor.hub("HUB1").unwrap().signal, Some(1));
        assert_eq!(sensor.battery(), "low");
    }

    #[test]
    fn contacts_are_tracked_per_hub() {
        let mut sensor = Sensor::create("S1", "tower");
        sensor.init_from_update(&update("tower"));
        sensor.init_from_update(&WeatherUpdate {
            id: "HUB2".into(),
            rssi: None,
            ..update("tower")
        });

        assert_eq!(sensor.hubs().len(), 2);
        assert_eq!(sensor.hub("HUB2").unwrap().signal, None);
    }

    #[test]
    fn five_in_one_accumulates_sub_types() {
        let mut sensor = Sensor::create("S1", "5N1x31");
        sensor
            .init_from_update(&update("5N1x31"))
            .init_from_update(&update("5N1x38"))
            .init_from_update(&update("5N1x31"));

        assert_eq!(sensor.general_type(), GeneralType::FiveInOne);
        assert_eq!(
            sensor.sub_types().iter().map(String::as_str).collect::<Vec<_>>(),
            ["5N1x31", "5N1x38"]
        );
    }

    #[test]
    fn other_kinds_ignore_sub_types() {
        let mut sensor = Sensor::create("S1", "tower");
        sensor.init_from_update(&update("5N1x38"));

        assert_eq!(sensor.general_type(), GeneralType::Tower);
        assert!(sensor.sub_types().is_empty());
    }

    #[test]
    fn tower_report() {
        let sensor = Sensor::create("S1", "tower");
        let report = sensor.build_report(&WeatherUpdate {
            tempf: Some("40.2".into()),
            humidity: Some("54".into()),
            ..update("tower")
        });

        assert_eq!(report.hub_id, "HUB1");
        assert_eq!(report.sensor_id, "S1");
        assert_eq!(report.barometric, 30.17);
        assert_eq!(
            report.readings,
            Readings::Tower {
                temperature: 40.2,
                humidity: 54.0,
            }
        );
    }

    #[test]
    fn pro_in_report_reads_indoor_fields() {
        let sensor = Sensor::create("S1", "ProIn");
        let report = sensor.build_report(&WeatherUpdate {
            tempf: Some("10".into()),
            indoortempf: Some("68.5".into()),
            indoorhumidity: Some("40".into()),
            water: Some("1".into()),
            ..update("ProIn")
        });

        assert_eq!(
            report.readings,
            Readings::ProIn {
                temperature: 68.5,
                humidity: 40.0,
                water_is_present: true,
            }
        );

        let dry = sensor.build_report(&WeatherUpdate {
            water: Some("0".into()),
            ..update("ProIn")
        });
        assert!(matches!(
            dry.readings,
            Readings::ProIn {
                water_is_present: false,
                ..
            }
        ));
    }

    #[test]
    fn five_in_one_report_follows_frame_sub_type() {
        let sensor = Sensor::create("S1", "5N1x38");
        let full = WeatherUpdate {
            tempf: Some("71.1".into()),
            humidity: Some("33".into()),
            windspeedmph: Some("6.8".into()),
            winddir: Some("247.5".into()),
            rainin: Some("0.01".into()),
            dailyrainin: Some("0.2".into()),
            ..update("5N1x38")
        };

        let climate = sensor.build_report(&full);
        assert_eq!(
            climate.readings,
            Readings::FiveInOneClimate {
                temperature: 71.1,
                humidity: 33.0,
                wind_speed: Some(6),
            }
        );

        let wind = sensor.build_report(&WeatherUpdate {
            mt: "5N1x31".into(),
            ..full
        });
        assert_eq!(
            wind.readings,
            Readings::FiveInOneWind {
                wind_speed: Some(6),
                wind_direction: 247.5,
                rain: 0.01,
                daily_rain: 0.2,
            }
        );
    }

    #[test]
    fn generic_sensor_reports_barometric_only() {
        let sensor = Sensor::create("S1", "mystery");
        let report = sensor.build_report(&WeatherUpdate {
            tempf: Some("40".into()),
            ..update("mystery")
        });
        assert_eq!(report.readings, Readings::Base {});
        assert_eq!(report.barometric, 30.17);
    }

    #[test]
    fn malformed_numbers_become_absent() {
        let sensor = Sensor::create("S1", "tower");
        let report = sensor.build_report(&WeatherUpdate {
            tempf: Some("--".into()),
            baromin: None,
            ..update("tower")
        });

        assert!(report.barometric.is_nan());
        assert!(report.readings.temperature().unwrap().is_nan());
        assert!(report.readings.humidity().unwrap().is_nan());
    }

    #[test]
    fn serializes_with_api_field_names() {
        let mut sensor = Sensor::create("S1", "tower");
        sensor.init_from_update(&update("tower"));
        sensor.set_name("Back porch");

        let json = serde_json::to_value(&sensor).unwrap();
        assert_eq!(json["id"], "S1");
        assert_eq!(json["type"], "tower");
        assert_eq!(json["name"], "Back porch");
        assert_eq!(json["battery"], "normal");
        assert_eq!(json["subTypes"], serde_json::json!([]));
        assert_eq!(json["hubs"][0]["id"], "HUB1");
        assert_eq!(json["hubs"][0]["signal"], 3);
        assert!(json["hubs"][0]["lastContact"].is_string());
    }
}
