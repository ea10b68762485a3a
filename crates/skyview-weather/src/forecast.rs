//! Forecast payload parsing.
//!
//! The dashboard server relays the Open-Meteo forecast response unchanged.
//! Only the sections the charts and the current-conditions card read are
//! modelled here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{
    CurrentConditions, ForecastError, TemperatureSeries, WeatherCondition, WeeklySeries,
};

/// Hours shown on the temperature chart
pub const HOURLY_POINTS: usize = 24;
/// Days shown on the weekly chart
pub const WEEKLY_DAYS: usize = 7;

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current_weather: Option<OpenMeteoCurrent>,
    hourly: Option<OpenMeteoHourly>,
    daily: Option<OpenMeteoDaily>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature: f64,
    windspeed: f64,
    #[serde(default)]
    winddirection: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    time: Vec<String>,
    temperature_2m: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    #[serde(default)]
    weathercode: Vec<i32>,
}

/// Everything the dashboard renders for one city
#[derive(Debug, Clone, PartialEq)]
pub struct CityForecast {
    pub current: CurrentConditions,
    /// Next hours, labelled `HH:MM`. Empty when the payload carries no
    /// hourly temperatures.
    pub hourly: TemperatureSeries,
    /// Coming days, labelled with the ISO date
    pub weekly: WeeklySeries,
    /// Condition per weekly entry (empty if the payload had no daily codes)
    pub daily_conditions: Vec<WeatherCondition>,
}

/// Current-conditions card shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsCard {
    pub temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub icon: &'static str,
    pub description: &'static str,
    pub days: Vec<DayCard>,
}

/// One day of the weekly strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCard {
    pub date: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl CityForecast {
    /// Summarize current conditions and the per-day outlook.
    ///
    /// Days without a weather code are shown with the default condition.
    pub fn conditions_card(&self) -> ConditionsCard {
        let days = self
            .weekly
            .labels
            .iter()
            .zip(self.weekly.max_temps.iter().zip(&self.weekly.min_temps))
            .enumerate()
            .map(|(i, (date, (&max_temp, &min_temp)))| {
                let condition = self.daily_conditions.get(i).copied().unwrap_or_default();
                DayCard {
                    date: date.clone(),
                    icon: condition.icon(),
                    description: condition.description(),
                    max_temp,
                    min_temp,
                }
            })
            .collect();

        ConditionsCard {
            temperature: self.current.temperature,
            wind_speed: self.current.wind_speed,
            wind_direction: self.current.wind_direction,
            icon: self.current.condition.icon(),
            description: self.current.condition.description(),
            days,
        }
    }
}

/// Parse a forecast payload into chart-ready series.
pub fn parse_forecast(body: &str) -> Result<CityForecast, ForecastError> {
    let raw: OpenMeteoResponse = serde_json::from_str(body)?;

    let current = raw
        .current_weather
        .ok_or(ForecastError::MissingField("current_weather"))?;
    let hourly = raw.hourly.ok_or(ForecastError::MissingField("hourly"))?;
    // The dashboard route only asks Open-Meteo for hourly humidity, so an
    // hourly section without temperatures yields an empty series.
    let hourly_temps = hourly.temperature_2m.unwrap_or_else(|| {
        tracing::debug!("Forecast has no hourly temperatures");
        Vec::new()
    });
    let daily = raw.daily.ok_or(ForecastError::MissingField("daily"))?;

    let hourly_labels = hourly
        .time
        .iter()
        .take(HOURLY_POINTS)
        .map(|t| time_of_day(t));
    let hourly_values: Vec<f64> = hourly_temps.into_iter().take(HOURLY_POINTS).collect();
    let hourly = TemperatureSeries::from_parallel(hourly_labels, &hourly_values);

    let weekly = WeeklySeries {
        labels: daily.time.into_iter().take(WEEKLY_DAYS).collect(),
        max_temps: daily.temperature_2m_max.into_iter().take(WEEKLY_DAYS).collect(),
        min_temps: daily.temperature_2m_min.into_iter().take(WEEKLY_DAYS).collect(),
    };

    let daily_conditions = daily
        .weathercode
        .into_iter()
        .take(WEEKLY_DAYS)
        .map(WeatherCondition::from_wmo_code)
        .collect();

    tracing::debug!(
        "Parsed forecast: {} hourly points, {} days",
        hourly.len(),
        weekly.len()
    );

    Ok(CityForecast {
        current: CurrentConditions {
            temperature: current.temperature,
            wind_speed: current.windspeed,
            wind_direction: current.winddirection,
            condition: WeatherCondition::from_wmo_code(current.weathercode),
        },
        hourly,
        weekly,
        daily_conditions,
    })
}

/// `2026-10-19T14:00` -> `14:00`. Unparseable stamps keep whatever follows the `T`.
fn time_of_day(stamp: &str) -> String {
    match NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M") {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => stamp
            .split_once('T')
            .map(|(_, time)| time.to_string())
            .unwrap_or_else(|| stamp.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload(hours: usize, days: usize) -> String {
        let times: Vec<String> = (0..hours)
            .map(|h| format!("2026-10-{:02}T{:02}:00", 19 + h / 24, h % 24))
            .collect();
        let temps: Vec<f64> = (0..hours).map(|h| 10.0 + h as f64 * 0.5).collect();
        let dates: Vec<String> = (0..days).map(|d| format!("2026-10-{:02}", 19 + d)).collect();
        let humidity = vec![60; hours];
        let highs: Vec<f64> = (0..days).map(|d| 22.0 + d as f64).collect();
        let lows: Vec<f64> = (0..days).map(|d| 12.0 + d as f64).collect();
        let codes = vec![61; days];
        json!({
            "current_weather": {
                "temperature": 18.4,
                "windspeed": 12.1,
                "winddirection": 270.0,
                "weathercode": 3
            },
            "hourly": {
                "time": times,
                "temperature_2m": temps,
                "relative_humidity_2m": humidity
            },
            "daily": {
                "time": dates,
                "temperature_2m_max": highs,
                "temperature_2m_min": lows,
                "weathercode": codes
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_limits_hourly_to_one_day() {
        let forecast = parse_forecast(&sample_payload(48, 7)).unwrap();
        assert_eq!(forecast.hourly.len(), HOURLY_POINTS);
        assert_eq!(forecast.hourly.points[0].label, "00:00");
        assert_eq!(forecast.hourly.points[23].label, "23:00");
        assert_eq!(forecast.hourly.points[1].value, 10.5);
    }

    #[test]
    fn test_parse_limits_weekly_to_seven_days() {
        let forecast = parse_forecast(&sample_payload(24, 10)).unwrap();
        assert_eq!(forecast.weekly.len(), WEEKLY_DAYS);
        assert_eq!(forecast.weekly.max_temps.len(), WEEKLY_DAYS);
        assert_eq!(forecast.weekly.min_temps.len(), WEEKLY_DAYS);
        assert_eq!(forecast.weekly.labels[0], "2026-10-19");
        assert_eq!(forecast.weekly.max_temps[6], 28.0);
        assert_eq!(forecast.daily_conditions[0], WeatherCondition::Rain);
    }

    #[test]
    fn test_parse_current_conditions() {
        let forecast = parse_forecast(&sample_payload(24, 7)).unwrap();
        assert_eq!(forecast.current.temperature, 18.4);
        assert_eq!(forecast.current.wind_direction, 270.0);
        assert_eq!(forecast.current.condition, WeatherCondition::Cloudy);
    }

    #[test]
    fn test_short_payload_is_not_padded() {
        let forecast = parse_forecast(&sample_payload(5, 3)).unwrap();
        assert_eq!(forecast.hourly.len(), 5);
        assert_eq!(forecast.weekly.len(), 3);
    }

    #[test]
    fn test_dashboard_route_payload_without_hourly_temperatures() {
        // Shape returned by `/api/weather/<city>`: hourly humidity only, plus
        // sunrise/sunset in the daily block.
        let body = json!({
            "latitude": 38.72,
            "longitude": -9.14,
            "timezone": "Europe/Lisbon",
            "current_weather": {
                "temperature": 19.6,
                "windspeed": 11.2,
                "winddirection": 320.0,
                "weathercode": 2,
                "is_day": 1,
                "time": "2026-10-19T14:00"
            },
            "hourly_units": {"time": "iso8601", "relative_humidity_2m": "%"},
            "hourly": {
                "time": ["2026-10-19T00:00", "2026-10-19T01:00"],
                "relative_humidity_2m": [60, 61]
            },
            "daily": {
                "time": ["2026-10-19", "2026-10-20"],
                "temperature_2m_max": [23.1, 21.4],
                "temperature_2m_min": [14.2, 13.8],
                "sunrise": ["2026-10-19T07:41", "2026-10-20T07:42"],
                "sunset": ["2026-10-19T18:46", "2026-10-20T18:44"],
                "weathercode": [2, 61]
            }
        })
        .to_string();

        let forecast = parse_forecast(&body).unwrap();
        assert!(forecast.hourly.is_empty());
        assert_eq!(forecast.weekly.len(), 2);
        assert_eq!(forecast.weekly.max_temps, vec![23.1, 21.4]);
        assert_eq!(forecast.current.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(
            forecast.daily_conditions,
            vec![WeatherCondition::PartlyCloudy, WeatherCondition::Rain]
        );
    }

    #[test]
    fn test_conditions_card() {
        let forecast = parse_forecast(&sample_payload(24, 3)).unwrap();
        let card = forecast.conditions_card();

        assert_eq!(card.temperature, 18.4);
        assert_eq!(card.icon, "☁️");
        assert_eq!(card.description, "Cloudy");
        assert_eq!(card.days.len(), 3);
        assert_eq!(card.days[0].date, "2026-10-19");
        assert_eq!(card.days[0].icon, "🌧️");
        assert_eq!(card.days[2].max_temp, 24.0);
        assert_eq!(card.days[2].min_temp, 14.0);

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["windSpeed"], 12.1);
        assert_eq!(json["days"][1]["description"], "Rain");
    }

    #[test]
    fn test_conditions_card_without_daily_codes() {
        let mut forecast = parse_forecast(&sample_payload(24, 2)).unwrap();
        forecast.daily_conditions.clear();

        let card = forecast.conditions_card();
        assert_eq!(card.days.len(), 2);
        assert_eq!(card.days[0].description, "Mostly Clear");
    }

    #[test]
    fn test_missing_daily_section() {
        let body = json!({
            "current_weather": {"temperature": 1.0, "windspeed": 2.0, "weathercode": 0},
            "hourly": {"time": [], "temperature_2m": []}
        })
        .to_string();
        let err = parse_forecast(&body).unwrap_err();
        assert!(matches!(err, ForecastError::MissingField("daily")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_forecast("not json"),
            Err(ForecastError::Json(_))
        ));
    }

    #[test]
    fn test_time_of_day_fallback() {
        assert_eq!(time_of_day("2026-10-19T07:00"), "07:00");
        assert_eq!(time_of_day("2026-10-19T07:00:30"), "07:00:30");
        assert_eq!(time_of_day("noon"), "noon");
    }
}
