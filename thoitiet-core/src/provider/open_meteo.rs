use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    AirQualityReport, CurrentConditions, DailyOutlook, ForecastRequest, HourlySlot, WeatherReport,
};

use super::WeatherProvider;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

const CURRENT_VARS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weathercode,is_day,surface_pressure";
const HOURLY_VARS: &str = "temperature_2m,weathercode,precipitation_probability";
const DAILY_VARS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Open-Meteo needs no API key; both endpoints are keyed by coordinates only.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    #[must_use]
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn forecast(&self, request: &ForecastRequest) -> Result<WeatherReport> {
        debug!(latitude = request.latitude, longitude = request.longitude, "fetching forecast");

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", request.latitude.to_string()),
                ("longitude", request.longitude.to_string()),
                ("current", CURRENT_VARS.to_string()),
                ("hourly", HOURLY_VARS.to_string()),
                ("daily", DAILY_VARS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (forecast)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        let report = convert_report(parsed)?;
        Ok(report)
    }

    async fn air_quality(&self, request: &ForecastRequest) -> Result<AirQualityReport> {
        debug!(latitude = request.latitude, longitude = request.longitude, "fetching air quality");

        let res = self
            .http
            .get(AIR_QUALITY_URL)
            .query(&[
                ("latitude", request.latitude.to_string()),
                ("longitude", request.longitude.to_string()),
                ("current", "us_aqi".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (air quality)")?;

        let status = res.status();
        let body =
            res.text().await.context("Failed to read Open-Meteo air-quality response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo air-quality request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmAirQualityResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo air-quality JSON")?;

        let report = convert_air_quality(parsed)?;
        Ok(report)
    }
}

/// Shape errors in an otherwise well-formed Open-Meteo payload.
#[derive(Debug, Error)]
enum PayloadError {
    #[error("hourly series have mismatched lengths")]
    RaggedHourly,
    #[error("daily series have mismatched lengths")]
    RaggedDaily,
    #[error("response contained no current air-quality value")]
    MissingAqi,
    #[error("unparseable timestamp: {0}")]
    BadTimestamp(String),
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: u8,
    wind_speed_10m: f64,
    weathercode: u16,
    is_day: u8,
    surface_pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weathercode: Vec<u16>,
    // Null-padded at the tail of the forecast horizon.
    precipitation_probability: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weathercode: Vec<u16>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_probability_max: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    latitude: f64,
    longitude: f64,
    current: OmCurrent,
    hourly: OmHourly,
    daily: OmDaily,
}

#[derive(Debug, Deserialize)]
struct OmAqiCurrent {
    time: String,
    us_aqi: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OmAirQualityResponse {
    current: OmAqiCurrent,
}

fn convert_report(raw: OmForecastResponse) -> Result<WeatherReport, PayloadError> {
    let current = CurrentConditions {
        time: parse_time(&raw.current.time)?,
        temperature_c: raw.current.temperature_2m,
        humidity_pct: raw.current.relative_humidity_2m,
        wind_speed_kmh: raw.current.wind_speed_10m,
        weather_code: raw.current.weathercode,
        is_day: raw.current.is_day == 1,
        surface_pressure_hpa: raw.current.surface_pressure,
    };

    Ok(WeatherReport {
        latitude: raw.latitude,
        longitude: raw.longitude,
        current,
        hourly: convert_hourly(raw.hourly)?,
        daily: convert_daily(raw.daily)?,
    })
}

fn convert_hourly(raw: OmHourly) -> Result<Vec<HourlySlot>, PayloadError> {
    let n = raw.time.len();
    if raw.temperature_2m.len() != n
        || raw.weathercode.len() != n
        || raw.precipitation_probability.len() != n
    {
        return Err(PayloadError::RaggedHourly);
    }

    let mut slots = Vec::with_capacity(n);
    for i in 0..n {
        slots.push(HourlySlot {
            time: parse_time(&raw.time[i])?,
            temperature_c: raw.temperature_2m[i],
            weather_code: raw.weathercode[i],
            precipitation_pct: raw.precipitation_probability[i].unwrap_or(0),
        });
    }
    Ok(slots)
}

fn convert_daily(raw: OmDaily) -> Result<Vec<DailyOutlook>, PayloadError> {
    let n = raw.time.len();
    if raw.weathercode.len() != n
        || raw.temperature_2m_max.len() != n
        || raw.temperature_2m_min.len() != n
        || raw.precipitation_probability_max.len() != n
    {
        return Err(PayloadError::RaggedDaily);
    }

    let mut days = Vec::with_capacity(n);
    for i in 0..n {
        days.push(DailyOutlook {
            date: parse_date(&raw.time[i])?,
            weather_code: raw.weathercode[i],
            temperature_max_c: raw.temperature_2m_max[i],
            temperature_min_c: raw.temperature_2m_min[i],
            precipitation_pct: raw.precipitation_probability_max[i].unwrap_or(0),
        });
    }
    Ok(days)
}

fn convert_air_quality(raw: OmAirQualityResponse) -> Result<AirQualityReport, PayloadError> {
    let us_aqi = raw.current.us_aqi.ok_or(PayloadError::MissingAqi)?;
    Ok(AirQualityReport { time: parse_time(&raw.current.time)?, us_aqi })
}

// Open-Meteo returns local wall-clock times under timezone=auto, minute
// precision, no offset suffix.
fn parse_time(s: &str) -> Result<NaiveDateTime, PayloadError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .map_err(|_| PayloadError::BadTimestamp(s.to_owned()))
}

fn parse_date(s: &str) -> Result<NaiveDate, PayloadError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| PayloadError::BadTimestamp(s.to_owned()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
