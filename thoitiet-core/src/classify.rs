//! Lookup tables behind the dashboard panels.
//!
//! WMO weather codes map to Weather Icons identifiers and Vietnamese
//! descriptions, US AQI values map to the EPA bands, and wind speeds map to
//! the color ramp of the wind panel. Every function here is total: values
//! outside the known sets resolve to a fixed fallback instead of failing.

/// Icon identifier for a WMO weather code.
///
/// Codes 0-2 are the only entries with separate day and night variants;
/// `is_day` is ignored everywhere else. Unknown codes yield `"wi-na"`.
///
/// See: <https://open-meteo.com/en/docs#weathervariables>
#[must_use]
pub fn icon(code: u16, is_day: bool) -> &'static str {
    match code {
        0 => {
            if is_day {
                "wi-day-sunny"
            } else {
                "wi-night-clear"
            }
        }
        1 => {
            if is_day {
                "wi-day-sunny-overcast"
            } else {
                "wi-night-alt-partly-cloudy"
            }
        }
        2 => {
            if is_day {
                "wi-day-cloudy"
            } else {
                "wi-night-alt-cloudy"
            }
        }
        3 => "wi-cloudy",
        45 | 48 => "wi-fog",
        51 | 53 | 55 => "wi-sprinkle",
        61 | 63 | 65 => "wi-rain",
        66 | 67 => "wi-rain-mix",
        71 | 73 | 75 => "wi-snow",
        77 => "wi-snowflake-cold",
        80 | 81 | 82 => "wi-showers",
        85 | 86 => "wi-snow-wind",
        95 | 96 | 99 => "wi-thunderstorm",
        _ => "wi-na",
    }
}

/// Vietnamese description for a WMO weather code.
///
/// Unknown codes yield `"Không xác định"`.
#[must_use]
pub fn description(code: u16) -> &'static str {
    match code {
        0 => "Trời quang",
        1 => "Chủ yếu trời quang",
        2 => "Có mây rải rác",
        3 => "Nhiều mây",
        45 => "Sương mù",
        48 => "Sương mù",
        51 => "Mưa phùn nhẹ",
        53 => "Mưa phùn vừa",
        55 => "Mưa phùn dày đặc",
        61 => "Mưa nhẹ",
        63 => "Mưa vừa",
        65 => "Mưa nặng hạt",
        66 => "Mưa đá nhẹ",
        67 => "Mưa đá nặng hạt",
        71 => "Tuyết rơi nhẹ",
        73 => "Tuyết rơi vừa",
        75 => "Tuyết rơi nặng hạt",
        77 => "Hạt tuyết",
        80 => "Mưa rào nhẹ",
        81 => "Mưa rào vừa",
        82 => "Mưa rào nặng hạt",
        85 => "Tuyết rơi nhẹ",
        86 => "Tuyết rơi nặng hạt",
        95 => "Dông",
        96 => "Dông kèm mưa đá nhẹ",
        99 => "Dông kèm mưa đá nặng hạt",
        _ => "Không xác định",
    }
}

/// One band of the US EPA air-quality index scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiTier {
    /// Level label shown next to the AQI number.
    pub level: &'static str,
    /// Short glyph for compact layouts.
    pub glyph: &'static str,
    /// Band color as a hex string.
    pub color: &'static str,
    /// One-line health guidance.
    pub summary: &'static str,
}

const AQI_TIERS: [AqiTier; 6] = [
    AqiTier {
        level: "Tốt",
        glyph: "😊",
        color: "#00e400",
        summary: "Chất lượng không khí tốt, an toàn cho hoạt động ngoài trời.",
    },
    AqiTier {
        level: "Trung bình",
        glyph: "🙂",
        color: "#ffff00",
        summary: "Chất lượng không khí chấp nhận được với hầu hết mọi người.",
    },
    AqiTier {
        level: "Kém cho nhóm nhạy cảm",
        glyph: "😐",
        color: "#ff7e00",
        summary: "Nhóm nhạy cảm nên hạn chế hoạt động ngoài trời kéo dài.",
    },
    AqiTier {
        level: "Kém",
        glyph: "😷",
        color: "#ff0000",
        summary: "Mọi người có thể bắt đầu cảm thấy ảnh hưởng sức khỏe.",
    },
    AqiTier {
        level: "Rất kém",
        glyph: "🤢",
        color: "#8f3f97",
        summary: "Cảnh báo sức khỏe: ảnh hưởng nghiêm trọng hơn với mọi người.",
    },
    AqiTier {
        level: "Nguy hiểm",
        glyph: "☠️",
        color: "#7e0023",
        summary: "Cảnh báo khẩn cấp: toàn bộ dân cư có nguy cơ bị ảnh hưởng.",
    },
];

/// EPA band for a US AQI value.
///
/// Upper bounds are inclusive: 50 is still "Tốt", 51 is the next band.
/// Everything above 300 lands in the highest band.
#[must_use]
pub fn aqi_tier(aqi: u32) -> &'static AqiTier {
    match aqi {
        0..=50 => &AQI_TIERS[0],
        51..=100 => &AQI_TIERS[1],
        101..=150 => &AQI_TIERS[2],
        151..=200 => &AQI_TIERS[3],
        201..=300 => &AQI_TIERS[4],
        _ => &AQI_TIERS[5],
    }
}

/// Color for the wind panel, darkening as the speed (km/h) rises.
///
/// Thresholds are exclusive: 5.0 km/h already takes the second color.
#[must_use]
pub fn wind_color(speed_kmh: f64) -> &'static str {
    if speed_kmh < 5.0 {
        "#b3e5fc"
    } else if speed_kmh < 15.0 {
        "#4fc3f7"
    } else if speed_kmh < 25.0 {
        "#0288d1"
    } else if speed_kmh < 40.0 {
        "#01579b"
    } else {
        "#002f6c"
    }
}
