//! Errors returned by the dashboard API client.

use skyview_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use skyview_weather::ForecastError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connect, timeout, bad body).
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The server answered with a non-success status on a route whose body is not read.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Forecast could not be read: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// True when the failure happened below the application protocol.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.into_network_error())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(e) => AppError::Network(e),
            ApiError::Status { status, body } => AppError::Network(NetworkError::ServerError {
                status,
                message: body,
            }),
            ApiError::CityNotFound(city) => AppError::Weather(WeatherError::CityNotFound(city)),
            ApiError::Forecast(e) => AppError::Weather(WeatherError::Malformed(e.to_string())),
            ApiError::InvalidUrl(e) => {
                AppError::Config(skyview_core::ConfigError::Invalid(e))
            }
        }
    }
}

/// Result type for dashboard API calls.
pub type ApiResult<T> = Result<T, ApiError>;
