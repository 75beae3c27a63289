//! Typed view of the `current.json` weather response.
//!
//! Every field is optional: the only presence check the processor performs is
//! for a numeric `current.temp_f`.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub location: Option<ReportLocation>,
    pub current: Option<CurrentConditions>,
}

/// The location the weather service resolved the query to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportLocation {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Fahrenheit.
    pub temp_f: Option<f64>,
    /// Temperature in degrees Celsius.
    pub temp_c: Option<f64>,
    /// Local time of the observation, e.g. "2022-04-29 02:15".
    pub last_updated: Option<String>,
}

impl WeatherReport {
    /// Parses a response body. Returns `None` for anything that isn't a weather report.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn temperature_f(&self) -> Option<f64> {
        self.current.as_ref().and_then(|current| current.temp_f)
    }
}

impl fmt::Display for ReportLocation {
    /// Joins the non-empty parts, e.g. "Long Beach, California, USA".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.name, &self.region, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current.as_ref();
        match current.and_then(|c| c.temp_f) {
            Some(temp_f) => write!(f, "{:.1}°F", temp_f)?,
            None => f.write_str("no temperature")?,
        }
        if let Some(temp_c) = current.and_then(|c| c.temp_c) {
            write!(f, " ({:.1}°C)", temp_c)?;
        }
        if let Some(location) = &self.location {
            let location = location.to_string();
            if !location.is_empty() {
                write!(f, " in {}", location)?;
            }
        }
        if let Some(last_updated) = current.and_then(|c| c.last_updated.as_deref()) {
            write!(f, ", updated {}", last_updated)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_temp_f() {
        let body = r#"{
            "location": {"name": "Long Beach", "region": "California", "country": "USA"},
            "current": {"last_updated": "2022-04-29 02:15", "temp_c": 15.0, "temp_f": 59.0}
        }"#;
        let report = WeatherReport::from_body(body).unwrap();
        assert_eq!(report.temperature_f(), Some(59.0));
        assert_eq!(
            report.location.and_then(|l| l.name).as_deref(),
            Some("Long Beach")
        );
    }

    #[test]
    fn test_display_full_report() {
        let body = r#"{
            "location": {"name": "Long Beach", "region": "California", "country": "USA"},
            "current": {"last_updated": "2022-04-29 02:15", "temp_c": 15.0, "temp_f": 59.0}
        }"#;
        let report = WeatherReport::from_body(body).unwrap();
        assert_eq!(
            report.to_string(),
            "59.0°F (15.0°C) in Long Beach, California, USA, updated 2022-04-29 02:15"
        );
    }

    #[test]
    fn test_display_skips_missing_parts() {
        let body = r#"{"location": {"name": "Long Beach", "region": ""}, "current": {"temp_f": 70.0}}"#;
        let report = WeatherReport::from_body(body).unwrap();
        assert_eq!(report.to_string(), "70.0°F in Long Beach");
    }

    #[test]
    fn test_missing_current_has_no_temperature() {
        let report = WeatherReport::from_body(r#"{"error": {"code": 1006}}"#).unwrap();
        assert_eq!(report.temperature_f(), None);
    }

    #[test]
    fn test_non_numeric_temperature_is_rejected() {
        assert!(WeatherReport::from_body(r#"{"current": {"temp_f": "hot"}}"#).is_none());
    }

    #[test]
    fn test_non_json_body() {
        assert!(WeatherReport::from_body("<html>Bad Gateway</html>").is_none());
    }
}
