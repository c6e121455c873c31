use serde::Deserialize;

/// One `updateweatherstation` transmission, as the hub sends it in the
/// query string. Every value arrives as text and is parsed lazily when a
/// report is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherUpdate {
    /// Hub ID.
    pub id: String,
    /// Sensor ID.
    pub sensor: String,
    /// Specific sensor sub-type.
    pub mt: String,
    pub battery: Option<String>,
    pub rssi: Option<String>,
    pub baromin: Option<String>,
    pub tempf: Option<String>,
    pub humidity: Option<String>,
    pub indoortempf: Option<String>,
    pub indoorhumidity: Option<String>,
    /// `"1"` when the leak probe is wet.
    pub water: Option<String>,
    pub windspeedmph: Option<String>,
    pub winddir: Option<String>,
    pub rainin: Option<String>,
    pub dailyrainin: Option<String>,
}

impl WeatherUpdate {
    /// An update can only be attributed when it names both a hub and a sensor.
    pub fn is_addressed(&self) -> bool {
        !self.id.is_empty() && !self.sensor.is_empty()
    }
}

/// Leading decimal number of `text`, e.g. `"30.17"` out of `"30.17in"`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits = |from: usize| {
        from + bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end = digits(end);
    if bytes.get(end) == Some(&b'.') {
        end = digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    &text[..end]
}

/// Reads the leading number and ignores trailing text such as units.
/// Missing or malformed numbers become NaN.
pub(crate) fn parse_float(field: Option<&str>) -> f64 {
    field
        .and_then(|value| numeric_prefix(value.trim_start()).parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Integer readings truncate toward zero; anything non-finite is absent.
pub(crate) fn parse_int(field: Option<&str>) -> Option<i64> {
    let value = parse_float(field);
    value.is_finite().then(|| value.trunc() as i64)
}
