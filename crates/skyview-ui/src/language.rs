//! Interface language selection.

use std::sync::Arc;

use skyview_api::{ApiResult, DashboardBackend};
use skyview_core::Language;
use tokio::task::JoinHandle;

use crate::i18n::{Labels, SharedLanguage};
use crate::storage::PreferenceStore;
use crate::view::ViewPort;

const LANG_ATTRIBUTE: &str = "lang";

pub struct LanguageController<V, S, B> {
    view: Arc<V>,
    store: Arc<S>,
    backend: Arc<B>,
    current: SharedLanguage,
}

impl<V, S, B> LanguageController<V, S, B>
where
    V: ViewPort,
    S: PreferenceStore,
    B: DashboardBackend,
{
    pub fn new(view: Arc<V>, store: Arc<S>, backend: Arc<B>, current: SharedLanguage) -> Self {
        Self {
            view,
            store,
            backend,
            current,
        }
    }

    /// Apply the stored language, or `fallback` when none is stored.
    pub fn initialize(&self, fallback: Language) -> Language {
        let language = match self.store.get(Language::STORAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored language: {}", e);
                fallback
            }),
            None => fallback,
        };
        self.apply(language);
        language
    }

    pub fn current(&self) -> Language {
        *self.current.read()
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(self.current())
    }

    /// Switch language locally and sync it to the server in the background.
    pub fn set_language(&self, language: Language) -> JoinHandle<ApiResult<()>> {
        self.apply(language);
        if let Err(e) = self.store.set(Language::STORAGE_KEY, language.as_str()) {
            tracing::warn!("Failed to persist language: {}", e);
        }

        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let result = backend.update_language(language).await;
            if let Err(e) = &result {
                tracing::debug!("Language sync failed: {}", e);
            }
            result
        })
    }

    fn apply(&self, language: Language) {
        self.view.set_document_attribute(LANG_ATTRIBUTE, language.as_str());
        *self.current.write() = language;
    }
}
