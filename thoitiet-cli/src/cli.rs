use std::time::Duration;

use anyhow::{Result, ensure};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::warn;

use thoitiet_core::model::ForecastRequest;
use thoitiet_core::provider::{self, WeatherProvider};

use crate::config::{Config, SavedLocation};
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "thoitiet", version, about = "Weather, forecast and air-quality dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard for the saved or given coordinates.
    Show {
        /// Latitude in decimal degrees; overrides the saved location.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees; overrides the saved location.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Stay open and refresh on the configured interval.
        #[arg(long)]
        watch: bool,
    },

    /// Store the default location and refresh interval.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { lat, lon, watch } => show(lat, lon, watch).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(lat: Option<f64>, lon: Option<f64>, watch: bool) -> Result<()> {
    let config = Config::load()?;
    let (label, request) = resolve_request(&config, lat, lon)?;
    let provider = provider::default_provider();

    if !watch {
        return refresh(provider.as_ref(), &label, &request).await;
    }

    // Zero would panic inside tokio's interval.
    let minutes = config.refresh_interval_minutes.max(1);
    let mut ticker = tokio::time::interval(Duration::from_secs(u64::from(minutes) * 60));

    loop {
        // The first tick fires immediately.
        ticker.tick().await;
        if let Err(err) = refresh(provider.as_ref(), &label, &request).await {
            warn!("refresh failed: {err:#}");
        }
    }
}

fn resolve_request(
    config: &Config,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<(String, ForecastRequest)> {
    if let (Some(latitude), Some(longitude)) = (lat, lon) {
        ensure!((-90.0..=90.0).contains(&latitude), "Latitude must be between -90 and 90");
        ensure!((-180.0..=180.0).contains(&longitude), "Longitude must be between -180 and 180");

        let label = format!("{latitude:.4}, {longitude:.4}");
        return Ok((label, ForecastRequest { latitude, longitude }));
    }

    let location = config.location()?;
    Ok((
        location.label.clone(),
        ForecastRequest { latitude: location.latitude, longitude: location.longitude },
    ))
}

async fn refresh(
    provider: &dyn WeatherProvider,
    label: &str,
    request: &ForecastRequest,
) -> Result<()> {
    let report = provider.forecast(request).await?;

    // The dashboard still renders when only the air-quality query fails.
    let air = match provider.air_quality(request).await {
        Ok(air) => Some(air),
        Err(err) => {
            warn!("air-quality query failed: {err:#}");
            None
        }
    };

    println!("{}", render::dashboard(label, Local::now().naive_local(), &report, air.as_ref()));
    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let label = inquire::Text::new("Tên vị trí:").with_default("Vị trí của bạn").prompt()?;

    let latitude = inquire::CustomType::<f64>::new("Vĩ độ:")
        .with_help_message("Decimal degrees, -90 to 90")
        .prompt()?;
    ensure!((-90.0..=90.0).contains(&latitude), "Latitude must be between -90 and 90");

    let longitude = inquire::CustomType::<f64>::new("Kinh độ:")
        .with_help_message("Decimal degrees, -180 to 180")
        .prompt()?;
    ensure!((-180.0..=180.0).contains(&longitude), "Longitude must be between -180 and 180");

    let refresh_interval = inquire::CustomType::<u32>::new("Chu kỳ làm mới (phút):")
        .with_default(config.refresh_interval_minutes)
        .prompt()?;
    ensure!(refresh_interval >= 1, "Refresh interval must be at least one minute");

    config.set_location(SavedLocation { label, latitude, longitude });
    config.refresh_interval_minutes = refresh_interval;
    config.save()?;

    println!("Đã lưu cấu hình vào {}", Config::config_file_path()?.display());
    Ok(())
}
