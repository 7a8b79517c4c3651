//! Core library for the `thoitiet` weather dashboard.
//!
//! This crate defines:
//! - Apparent-temperature formulas (heat index, wind chill, feels-like)
//! - Classification tables for WMO weather codes, US AQI and wind speed
//! - Shared domain models (requests, reports)
//! - Abstraction over the observation source (Open-Meteo)
//!
//! It is used by `thoitiet-cli`, but can also be reused by other binaries or services.

pub mod apparent;
pub mod classify;
pub mod model;
pub mod provider;

pub use apparent::feels_like;
pub use classify::{AqiTier, aqi_tier, description, icon, wind_color};
pub use model::{
    AirQualityReport, CurrentConditions, DailyOutlook, ForecastRequest, HourlySlot, Observation,
    WeatherReport,
};
pub use provider::WeatherProvider;
