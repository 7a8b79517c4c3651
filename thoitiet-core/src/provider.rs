use crate::model::{AirQualityReport, ForecastRequest, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Source of raw observations for a coordinate pair.
///
/// The core never issues these queries on its own; the caller picks a
/// provider, fetches the reports, and hands the numbers to the derivation
/// and classification functions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions plus hourly and daily forecast.
    async fn forecast(&self, request: &ForecastRequest) -> anyhow::Result<WeatherReport>;

    /// Current air quality on the US AQI scale.
    async fn air_quality(&self, request: &ForecastRequest) -> anyhow::Result<AirQualityReport>;
}

/// The provider the dashboard queries by default.
#[must_use]
pub fn default_provider() -> Box<dyn WeatherProvider> {
    Box::new(open_meteo::OpenMeteoProvider::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentConditions;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct CannedProvider;

    #[async_trait]
    impl WeatherProvider for CannedProvider {
        async fn forecast(&self, request: &ForecastRequest) -> anyhow::Result<WeatherReport> {
            let time = NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            Ok(WeatherReport {
                latitude: request.latitude,
                longitude: request.longitude,
                current: CurrentConditions {
                    time,
                    temperature_c: 30.0,
                    humidity_pct: 50,
                    wind_speed_kmh: 10.0,
                    weather_code: 0,
                    is_day: true,
                    surface_pressure_hpa: 1012.0,
                },
                hourly: Vec::new(),
                daily: Vec::new(),
            })
        }

        async fn air_quality(&self, _request: &ForecastRequest) -> anyhow::Result<AirQualityReport> {
            let time = NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            Ok(AirQualityReport { time, us_aqi: 42 })
        }
    }

    #[tokio::test]
    async fn reports_flow_through_the_trait_object() {
        let provider: Box<dyn WeatherProvider> = Box::new(CannedProvider);
        let request = ForecastRequest { latitude: 21.03, longitude: 105.85 };

        let report = provider.forecast(&request).await.expect("canned forecast");
        let air = provider.air_quality(&request).await.expect("canned air quality");

        // Derived values come straight from the core, no state in between.
        let feels = report.current.observation().feels_like();
        assert!((feels - 30.5245407222).abs() < 1e-6);
        assert_eq!(crate::classify::aqi_tier(air.us_aqi).level, "Tốt");
    }

    #[test]
    fn default_provider_is_open_meteo() {
        let provider = default_provider();
        assert!(format!("{provider:?}").contains("OpenMeteoProvider"));
    }
}
