//! In-process backend double for controller tests.

use parking_lot::Mutex;
use skyview_api::{ApiError, ApiResult, City, ClearHistoryResponse, DashboardBackend, FavoriteResponse};
use skyview_core::{Language, NetworkError, Theme};

/// Records every call as a short string and answers with preset replies.
#[derive(Debug)]
pub struct FakeBackend {
    calls: Mutex<Vec<String>>,
    transport_down: Mutex<bool>,
    favorite_reply: Mutex<FavoriteResponse>,
    clear_reply: Mutex<ClearHistoryResponse>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            transport_down: Mutex::new(false),
            favorite_reply: Mutex::new(FavoriteResponse {
                success: true,
                is_favorite: true,
                message: "Adicionado aos favoritos".to_string(),
            }),
            clear_reply: Mutex::new(ClearHistoryResponse { success: true }),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn fail_transport(&self) {
        *self.transport_down.lock() = true;
    }

    pub fn set_favorite_reply(&self, reply: FavoriteResponse) {
        *self.favorite_reply.lock() = reply;
    }

    pub fn set_clear_reply(&self, success: bool) {
        *self.clear_reply.lock() = ClearHistoryResponse { success };
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.lock().push(call);
        if *self.transport_down.lock() {
            return Err(ApiError::Network(NetworkError::ConnectionFailed(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

impl DashboardBackend for FakeBackend {
    async fn update_theme(&self, theme: Theme) -> ApiResult<()> {
        self.record(format!("theme:{}", theme))
    }

    async fn update_language(&self, language: Language) -> ApiResult<()> {
        self.record(format!("language:{}", language))
    }

    async fn toggle_favorite(&self, city: &City) -> ApiResult<FavoriteResponse> {
        self.record(format!("favorite:{}", city.name))?;
        Ok(self.favorite_reply.lock().clone())
    }

    async fn clear_history(&self) -> ApiResult<ClearHistoryResponse> {
        self.record("clear-history".to_string())?;
        Ok(*self.clear_reply.lock())
    }
}
