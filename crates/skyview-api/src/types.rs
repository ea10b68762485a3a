//! Request and response bodies of the dashboard routes.

use serde::{Deserialize, Serialize};
use skyview_core::{Language, Theme};

/// A city as identified by the favorites route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "city_name")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Body of `POST /api/update-theme`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeUpdateRequest {
    pub theme: Theme,
}

/// Body of `POST /api/update-language`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageUpdateRequest {
    pub language: Language,
}

/// Reply of `POST /api/favorite`.
///
/// The server sends `{success: false, message}` without `is_favorite` when the
/// session is missing, so both trailing fields default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub success: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub message: String,
}

/// Reply of `DELETE /api/clear-history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
}
