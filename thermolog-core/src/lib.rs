mod hub;
mod report;
mod sensor;
mod sensor_type;
mod update;

pub use hub::Hub;
pub use report::{Readings, Report};
pub use sensor::{HubContact, Sensor};
pub use sensor_type::{GeneralType, SpecificType, general_type_of};
pub use update::WeatherUpdate;
