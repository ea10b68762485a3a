use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use skyview_core::{Language, ReqwestErrorExt, Theme};
use skyview_weather::{parse_forecast, CityForecast};
use url::Url;

use crate::backend::DashboardBackend;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    City, ClearHistoryResponse, FavoriteResponse, LanguageUpdateRequest, ThemeUpdateRequest,
};

/// HTTP client for the dashboard server.
///
/// No call is retried. Concurrent calls are independent and may complete in
/// any order.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: Url,
    client: Arc<Client>,
}

impl DashboardClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check response status and extract error
    async fn check_response(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a JSON body whatever the status; the routes answer refusals with
    /// a `success: false` body rather than a bare status.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Undecodable reply ({}): {}", status, body);
            ApiError::Network(skyview_core::NetworkError::InvalidResponse(e.to_string()))
        })
    }

    /// Fetch the forecast the server relays for `city`.
    ///
    /// # Errors
    /// `CityNotFound` on 404, `Forecast` when the payload is incomplete.
    pub async fn city_forecast(&self, city: &str) -> ApiResult<CityForecast> {
        let url = self.endpoint(&["api", "weather", city])?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.into_network_error()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::CityNotFound(city.to_string()));
        }

        let response = Self::check_response(response).await?;
        let body = response.text().await?;
        Ok(parse_forecast(&body)?)
    }
}

impl DashboardBackend for DashboardClient {
    async fn update_theme(&self, theme: Theme) -> ApiResult<()> {
        let url = self.endpoint(&["api", "update-theme"])?;
        tracing::debug!("POST {} theme={}", url, theme);

        let response = self
            .client
            .post(url)
            .json(&ThemeUpdateRequest { theme })
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn update_language(&self, language: Language) -> ApiResult<()> {
        let url = self.endpoint(&["api", "update-language"])?;
        tracing::debug!("POST {} language={}", url, language);

        let response = self
            .client
            .post(url)
            .json(&LanguageUpdateRequest { language })
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn toggle_favorite(&self, city: &City) -> ApiResult<FavoriteResponse> {
        let url = self.endpoint(&["api", "favorite"])?;
        tracing::debug!("POST {} city={}", url, city.name);

        let response = self.client.post(url).json(city).send().await?;
        Self::read_json(response).await
    }

    async fn clear_history(&self) -> ApiResult<ClearHistoryResponse> {
        let url = self.endpoint(&["api", "clear-history"])?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DashboardClient {
        DashboardClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let url = client("http://localhost:8080")
            .endpoint(&["api", "favorite"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/favorite");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("https://example.com/weather/")
            .endpoint(&["api", "clear-history"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/weather/api/clear-history");
    }

    #[test]
    fn test_endpoint_encodes_city() {
        let url = client("http://localhost:8080")
            .endpoint(&["api", "weather", "São Paulo"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/weather/S%C3%A3o%20Paulo"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = DashboardClient::new("mailto:someone@example.com", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
