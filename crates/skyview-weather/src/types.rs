use serde::{Deserialize, Serialize};

/// A single labelled value of a chronological series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered temperature readings, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSeries {
    pub points: Vec<SeriesPoint>,
}

impl TemperatureSeries {
    /// Pair labels and values by position. Extra entries on either side are dropped.
    pub fn from_parallel<L, S>(labels: L, values: &[f64]) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let points = labels
            .into_iter()
            .zip(values.iter().copied())
            .map(|(label, value)| SeriesPoint::new(label, value))
            .collect();
        Self { points }
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Daily highs and lows sharing one label axis.
///
/// Serialized with the same field names the page scripts use
/// (`labels`, `maxTemps`, `minTemps`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub max_temps: Vec<f64>,
    pub min_temps: Vec<f64>,
}

impl WeeklySeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    #[default]
    MostlyClear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Showers,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1 => Self::MostlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 80 => Self::Showers,
            53 | 55 | 61 | 63 | 65 | 81 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            82 | 95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::MostlyClear,
        }
    }

    /// Emoji shown next to the reading
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::MostlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Fog => "🌫️",
            Self::Showers => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "🌨️",
            Self::Thunderstorm => "⛈️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::MostlyClear => "Mostly Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Showers => "Showers",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Conditions at fetch time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub condition: WeatherCondition,
}

/// Forecast payload errors
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_clear_sky_variants() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(1), WeatherCondition::MostlyClear);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Cloudy);
    }

    #[test]
    fn test_wmo_code_precipitation() {
        assert_eq!(WeatherCondition::from_wmo_code(51), WeatherCondition::Showers);
        assert_eq!(WeatherCondition::from_wmo_code(80), WeatherCondition::Showers);
        assert_eq!(WeatherCondition::from_wmo_code(63), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(81), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(75), WeatherCondition::Snow);
    }

    #[test]
    fn test_wmo_code_storms() {
        assert_eq!(WeatherCondition::from_wmo_code(82), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(99), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_wmo_code_unknown_defaults_to_mostly_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(999), WeatherCondition::MostlyClear);
        assert_eq!(WeatherCondition::from_wmo_code(-1).icon(), "🌤️");
    }

    #[test]
    fn test_condition_icons() {
        assert_eq!(WeatherCondition::Clear.icon(), "☀️");
        assert_eq!(WeatherCondition::Fog.icon(), "🌫️");
        assert_eq!(WeatherCondition::Thunderstorm.icon(), "⛈️");
    }

    #[test]
    fn test_series_from_parallel_keeps_order() {
        let series = TemperatureSeries::from_parallel(["00:00", "01:00", "02:00"], &[12.5, 11.0, 10.2]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.labels(), vec!["00:00", "01:00", "02:00"]);
        assert_eq!(series.values(), vec![12.5, 11.0, 10.2]);
    }

    #[test]
    fn test_series_from_parallel_truncates_to_shorter() {
        let series = TemperatureSeries::from_parallel(["a", "b", "c"], &[1.0]);
        assert_eq!(series.points, vec![SeriesPoint::new("a", 1.0)]);
    }

    #[test]
    fn test_weekly_series_uses_page_field_names() {
        let weekly = WeeklySeries {
            labels: vec!["2026-10-19".into()],
            max_temps: vec![24.0],
            min_temps: vec![15.5],
        };
        let json = serde_json::to_value(&weekly).unwrap();
        assert_eq!(json["maxTemps"][0], 24.0);
        assert_eq!(json["minTemps"][0], 15.5);
    }
}
