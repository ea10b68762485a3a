//! Weather data for SkyView
//!
//! Chart-ready series and the parser for the forecast payload the dashboard
//! server relays from Open-Meteo.

pub mod forecast;
pub mod types;

pub use forecast::{
    parse_forecast, CityForecast, ConditionsCard, DayCard, HOURLY_POINTS, WEEKLY_DAYS,
};
pub use types::*;
