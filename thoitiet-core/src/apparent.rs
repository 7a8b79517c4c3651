//! Apparent-temperature formulas.
//!
//! The dashboard shows one "feels like" number, the arithmetic mean of the
//! heat index and the wind chill. The mean is taken even when one side (or
//! both) degenerates to the plain air temperature; that averaging is the
//! product behaviour and must stay as is.

// Rothfusz regression constants, Celsius form.
const C1: f64 = -8.78469475556;
const C2: f64 = 1.61139411;
const C3: f64 = 2.33854883889;
const C4: f64 = -0.14611605;
const C5: f64 = -0.012308094;
const C6: f64 = -0.0164248277778;
const C7: f64 = 0.002211732;
const C8: f64 = 0.00072546;
const C9: f64 = -0.000003582;

/// Heat index for an air temperature (°C) and relative humidity (%).
///
/// Below 27 °C the regression is not applicable and the temperature is
/// returned unchanged.
#[must_use]
pub fn heat_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    if temperature_c < 27.0 {
        return temperature_c;
    }

    let t = temperature_c;
    let h = humidity_pct;

    C1 + C2 * t
        + C3 * h
        + C4 * t * h
        + C5 * t * t
        + C6 * h * h
        + C7 * t * t * h
        + C8 * t * h * h
        + C9 * t * t * h * h
}

/// Wind chill for an air temperature (°C) and wind speed (km/h).
///
/// Above 10 °C the formula is not applicable and the temperature is returned
/// unchanged. Wind speed is clamped to zero first; the fractional power is
/// undefined for negative speeds.
#[must_use]
pub fn wind_chill(temperature_c: f64, wind_speed_kmh: f64) -> f64 {
    if temperature_c > 10.0 {
        return temperature_c;
    }

    let v = wind_speed_kmh.max(0.0).powf(0.16);
    13.12 + 0.6215 * temperature_c - 11.37 * v + 0.3965 * temperature_c * v
}

/// Apparent temperature: the mean of [`heat_index`] and [`wind_chill`].
#[must_use]
pub fn feels_like(temperature_c: f64, humidity_pct: f64, wind_speed_kmh: f64) -> f64 {
    let hi = heat_index(temperature_c, humidity_pct);
    let wc = wind_chill(temperature_c, wind_speed_kmh);
    (hi + wc) / 2.0
}
