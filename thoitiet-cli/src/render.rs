//! Terminal rendering for the dashboard.
//!
//! User-facing strings follow the vi-VN wording of the classification
//! tables in the core crate. Colors from the core (wind ramp, AQI band) are
//! applied as truecolor escapes; rendering falls back to plain text when a
//! hex value cannot be parsed.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use std::fmt::Write as _;

use thoitiet_core::classify;
use thoitiet_core::model::{AirQualityReport, HourlySlot, WeatherReport};

// The hourly strip covers the next 24 hours in 3-hour steps.
const HOURLY_STEP: usize = 3;
const HOURLY_SLOTS: usize = 8;
const DAILY_SPAN: usize = 7;

#[must_use]
pub fn dashboard(
    label: &str,
    now: NaiveDateTime,
    report: &WeatherReport,
    air: Option<&AirQualityReport>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dashboard(&mut out, label, now, report, air);
    out
}

fn write_dashboard(
    out: &mut String,
    label: &str,
    now: NaiveDateTime,
    report: &WeatherReport,
    air: Option<&AirQualityReport>,
) -> std::fmt::Result {
    let cur = &report.current;

    writeln!(out, "📍 {label}")?;
    writeln!(out, "{}", format_date_time(now))?;
    writeln!(out)?;

    let glyph = icon_glyph(classify::icon(cur.weather_code, cur.is_day));
    writeln!(
        out,
        "{glyph}  {}, {:.0}°C (cảm giác như {:.1}°C)",
        classify::description(cur.weather_code),
        cur.temperature_c,
        cur.observation().feels_like(),
    )?;
    if let Some(today) = report.daily.first() {
        writeln!(out, "Cao {:.0}° / thấp {:.0}°", today.temperature_max_c, today.temperature_min_c)?;
    }

    let wind = paint(
        classify::wind_color(cur.wind_speed_kmh),
        &format!("{:.1} km/h", cur.wind_speed_kmh),
    );
    writeln!(
        out,
        "Độ ẩm {}%  Gió {wind}  Áp suất {:.0} hPa",
        cur.humidity_pct, cur.surface_pressure_hpa,
    )?;

    if let Some(air) = air {
        let tier = classify::aqi_tier(air.us_aqi);
        writeln!(
            out,
            "Chất lượng không khí: {} {} {}. {}",
            air.us_aqi,
            paint(tier.color, tier.level),
            tier.glyph,
            tier.summary,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Dự báo theo giờ:")?;
    // The forecast strips always use the day icon variants.
    for slot in hourly_window(&report.hourly, now) {
        writeln!(
            out,
            "  {}  {}  {:>3.0}°  💧 {:>3}%",
            slot.time.format("%H:%M"),
            icon_glyph(classify::icon(slot.weather_code, true)),
            slot.temperature_c,
            slot.precipitation_pct,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Dự báo 7 ngày:")?;
    for (i, day) in report.daily.iter().take(DAILY_SPAN).enumerate() {
        let name = if i == 0 { "Hôm nay" } else { day_name(day.date.weekday()) };
        writeln!(
            out,
            "  {name:<9} {}  {:>3.0}° / {:>3.0}°  💧 {:>3}%  {}",
            icon_glyph(classify::icon(day.weather_code, true)),
            day.temperature_max_c,
            day.temperature_min_c,
            day.precipitation_pct,
            classify::description(day.weather_code),
        )?;
    }

    Ok(())
}

/// Slots from the one covering the current hour onwards, thinned to the
/// strip's step and span.
fn hourly_window(slots: &[HourlySlot], now: NaiveDateTime) -> Vec<&HourlySlot> {
    let start =
        slots.iter().position(|slot| slot.time + Duration::hours(1) > now).unwrap_or(slots.len());
    slots[start..].iter().step_by(HOURLY_STEP).take(HOURLY_SLOTS).collect()
}

fn format_date_time(now: NaiveDateTime) -> String {
    format!(
        "{}, ngày {} tháng {} năm {}, {:02}:{:02}",
        day_name(now.weekday()),
        now.day(),
        now.month(),
        now.year(),
        now.hour(),
        now.minute(),
    )
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}

// Terminal stand-ins for the Weather Icons identifiers the core returns.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "wi-day-sunny" => "☀️",
        "wi-night-clear" => "🌙",
        "wi-day-sunny-overcast" => "🌤️",
        "wi-night-alt-partly-cloudy" => "🌥️",
        "wi-day-cloudy" => "⛅",
        "wi-night-alt-cloudy" | "wi-cloudy" => "☁️",
        "wi-fog" => "🌫️",
        "wi-sprinkle" | "wi-showers" => "🌦️",
        "wi-rain" => "🌧️",
        "wi-rain-mix" | "wi-snow-wind" => "🌨️",
        "wi-snow" | "wi-snowflake-cold" => "❄️",
        "wi-thunderstorm" => "⛈️",
        _ => "❔",
    }
}

fn paint(hex: &str, text: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\u{1b}[38;2;{r};{g};{b}m{text}\u{1b}[0m"),
        None => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use thoitiet_core::model::{CurrentConditions, DailyOutlook};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn sample_report() -> WeatherReport {
        let hourly = (0..48)
            .map(|i| HourlySlot {
                time: at(0, 0) + Duration::hours(i),
                temperature_c: 25.0,
                weather_code: 3,
                precipitation_pct: 10,
            })
            .collect();

        let daily = (0..7)
            .map(|i| DailyOutlook {
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap() + Duration::days(i),
                weather_code: 61,
                temperature_max_c: 31.0,
                temperature_min_c: 24.0,
                precipitation_pct: 40,
            })
            .collect();

        WeatherReport {
            latitude: 21.0285,
            longitude: 105.8542,
            current: CurrentConditions {
                time: at(14, 0),
                temperature_c: 30.0,
                humidity_pct: 70,
                wind_speed_kmh: 12.0,
                weather_code: 2,
                is_day: true,
                surface_pressure_hpa: 1006.0,
            },
            hourly,
            daily,
        }
    }

    #[test]
    fn hourly_window_starts_at_the_current_hour() {
        let report = sample_report();
        let window = hourly_window(&report.hourly, at(14, 10));

        assert_eq!(window.len(), 8);
        assert_eq!(window[0].time, at(14, 0));
        assert_eq!(window[1].time, at(17, 0));
        assert_eq!(window.last().unwrap().time, at(14, 0) + Duration::hours(21));
    }

    #[test]
    fn hourly_window_is_empty_when_data_is_stale() {
        let report = sample_report();
        let tomorrow = at(14, 0) + Duration::days(2);
        assert!(hourly_window(&report.hourly, tomorrow).is_empty());
    }

    #[test]
    fn dashboard_renders_the_expected_sections() {
        let report = sample_report();
        let air = AirQualityReport { time: at(14, 0), us_aqi: 42 };
        let text = dashboard("Hà Nội", at(14, 10), &report, Some(&air));

        assert!(text.contains("📍 Hà Nội"));
        assert!(text.contains("Có mây rải rác"));
        assert!(text.contains("cảm giác như"));
        assert!(text.contains("Hôm nay"));
        assert!(text.contains("Tốt"));
        assert!(text.contains("Mưa nhẹ"));
        assert!(text.contains("km/h"));
    }

    #[test]
    fn dashboard_omits_air_quality_when_missing() {
        let report = sample_report();
        let text = dashboard("Hà Nội", at(14, 10), &report, None);
        assert!(!text.contains("Chất lượng không khí"));
    }

    #[test]
    fn monday_is_thu_hai() {
        // 2025-06-02 is a Monday.
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(day_name(date.weekday()), "Thứ Hai");
        assert_eq!(day_name(Weekday::Sun), "Chủ Nhật");
    }

    #[test]
    fn paint_wraps_text_in_truecolor_escapes() {
        let painted = paint("#ff7e00", "Kém");
        assert!(painted.starts_with("\u{1b}[38;2;255;126;0m"));
        assert!(painted.ends_with("\u{1b}[0m"));
        assert!(painted.contains("Kém"));
    }

    #[test]
    fn paint_falls_back_on_bad_hex() {
        assert_eq!(paint("not-a-color", "Gió"), "Gió");
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#00e400"), Some((0, 228, 0)));
    }
}
