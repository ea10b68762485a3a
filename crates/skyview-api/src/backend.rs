//! Server operations the UI controllers depend on.
//!
//! `DashboardBackend` abstracts the HTTP client so controllers can be driven
//! by an in-process double in tests.

use std::future::Future;

use skyview_core::{Language, Theme};

use crate::error::ApiResult;
use crate::types::{City, ClearHistoryResponse, FavoriteResponse};

pub trait DashboardBackend: Send + Sync + 'static {
    /// Store the theme server-side. The reply body carries nothing of interest.
    fn update_theme(&self, theme: Theme) -> impl Future<Output = ApiResult<()>> + Send;

    /// Store the interface language server-side.
    fn update_language(&self, language: Language) -> impl Future<Output = ApiResult<()>> + Send;

    /// Flip the favorite flag of `city`.
    ///
    /// # Errors
    /// Only transport and decoding failures are errors; a refusal arrives as
    /// `success: false` in the reply.
    fn toggle_favorite(
        &self,
        city: &City,
    ) -> impl Future<Output = ApiResult<FavoriteResponse>> + Send;

    /// Delete the search history of the current user.
    ///
    /// # Errors
    /// Same contract as [`DashboardBackend::toggle_favorite`].
    fn clear_history(&self) -> impl Future<Output = ApiResult<ClearHistoryResponse>> + Send;
}
