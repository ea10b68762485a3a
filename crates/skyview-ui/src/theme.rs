//! Light/dark theme switching.

use std::sync::Arc;

use parking_lot::Mutex;
use skyview_api::{ApiResult, DashboardBackend};
use skyview_core::Theme;
use tokio::task::JoinHandle;

use crate::storage::PreferenceStore;
use crate::view::ViewPort;

const THEME_ATTRIBUTE: &str = "data-theme";

pub struct ThemeController<V, S, B> {
    view: Arc<V>,
    store: Arc<S>,
    backend: Arc<B>,
    toggle_id: String,
    current: Mutex<Theme>,
}

impl<V, S, B> ThemeController<V, S, B>
where
    V: ViewPort,
    S: PreferenceStore,
    B: DashboardBackend,
{
    pub fn new(view: Arc<V>, store: Arc<S>, backend: Arc<B>, toggle_id: impl Into<String>) -> Self {
        Self {
            view,
            store,
            backend,
            toggle_id: toggle_id.into(),
            current: Mutex::new(Theme::default()),
        }
    }

    /// Apply the stored theme, or dark when nothing usable is stored.
    pub fn initialize(&self) -> Theme {
        let theme = match self.store.get(Theme::STORAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        };

        self.apply(theme);
        if !self.view.set_checked(&self.toggle_id, theme.is_light()) {
            tracing::debug!("Theme toggle '{}' not on this page", self.toggle_id);
        }
        tracing::info!("Theme initialized: {}", theme);
        theme
    }

    pub fn current(&self) -> Theme {
        *self.current.lock()
    }

    /// Handle a change of the toggle control.
    ///
    /// The page and storage are updated before this returns. The server sync
    /// runs in the background; its result is in the handle and may be ignored.
    pub fn on_toggle(&self, checked: bool) -> JoinHandle<ApiResult<()>> {
        let theme = Theme::from_toggle(checked);
        self.apply(theme);

        if let Err(e) = self.store.set(Theme::STORAGE_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let result = backend.update_theme(theme).await;
            if let Err(e) = &result {
                tracing::debug!("Theme sync failed: {}", e);
            }
            result
        })
    }

    fn apply(&self, theme: Theme) {
        self.view.set_document_attribute(THEME_ATTRIBUTE, theme.as_str());
        *self.current.lock() = theme;
    }
}
