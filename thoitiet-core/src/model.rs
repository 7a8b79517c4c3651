use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::apparent;

/// Raw readings fed into the feels-like estimate.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub temperature_c: f64,
    /// Relative humidity, 0-100.
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
}

impl Observation {
    /// Apparent temperature for these readings.
    #[must_use]
    pub fn feels_like(&self) -> f64 {
        apparent::feels_like(self.temperature_c, self.humidity_pct, self.wind_speed_kmh)
    }
}

/// Coordinates a report is requested for.
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Conditions at the requested point right now, in local clock time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    /// WMO weather code, see [`crate::classify`].
    pub weather_code: u16,
    pub is_day: bool,
    pub surface_pressure_hpa: f64,
}

impl CurrentConditions {
    /// The readings relevant to the feels-like estimate.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            temperature_c: self.temperature_c,
            humidity_pct: f64::from(self.humidity_pct),
            wind_speed_kmh: self.wind_speed_kmh,
        }
    }
}

/// One slot of the hourly forecast strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySlot {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub weather_code: u16,
    /// Precipitation probability, 0-100.
    pub precipitation_pct: u8,
}

/// One day of the outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub weather_code: u16,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    /// Highest precipitation probability over the day, 0-100.
    pub precipitation_pct: u8,
}

/// Everything the forecast endpoint returns for one coordinate pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub latitude: f64,
    pub longitude: f64,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlySlot>,
    pub daily: Vec<DailyOutlook>,
}

/// Current air quality on the US AQI scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityReport {
    pub time: NaiveDateTime,
    pub us_aqi: u32,
}
