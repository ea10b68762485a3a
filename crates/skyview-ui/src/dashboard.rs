//! Page bootstrap wiring all controllers to one view, store and backend.

use std::sync::Arc;

use parking_lot::RwLock;
use skyview_api::DashboardBackend;
use skyview_core::UiConfig;

use crate::charts::{ChartEngine, ChartRenderer, ChartSurfaces};
use crate::favorite::FavoriteController;
use crate::history::HistoryController;
use crate::i18n::SharedLanguage;
use crate::language::LanguageController;
use crate::notify::{NotificationTiming, Notifier};
use crate::storage::PreferenceStore;
use crate::styles::ANIMATION_KEYFRAMES;
use crate::theme::ThemeController;
use crate::view::ViewPort;

pub struct Dashboard<V, S, B> {
    view: Arc<V>,
    notifier: Notifier<V>,
    theme: ThemeController<V, S, B>,
    language: LanguageController<V, S, B>,
    favorites: FavoriteController<V, B>,
    history: HistoryController<V, B>,
    surfaces: ChartSurfaces,
}

impl<V, S, B> Dashboard<V, S, B>
where
    V: ViewPort,
    S: PreferenceStore,
    B: DashboardBackend,
{
    /// Run the page-load sequence: inject the notification keyframes, then
    /// restore language and theme from storage.
    pub fn load(view: Arc<V>, store: Arc<S>, backend: Arc<B>, ui: &UiConfig) -> Self {
        view.inject_style(ANIMATION_KEYFRAMES);

        let shared: SharedLanguage = Arc::new(RwLock::new(ui.default_language));
        let notifier = Notifier::new(Arc::clone(&view), NotificationTiming::from(&ui.notifications));

        let language = LanguageController::new(
            Arc::clone(&view),
            Arc::clone(&store),
            Arc::clone(&backend),
            Arc::clone(&shared),
        );
        language.initialize(ui.default_language);

        let theme = ThemeController::new(
            Arc::clone(&view),
            store,
            Arc::clone(&backend),
            ui.elements.theme_toggle.clone(),
        );
        theme.initialize();

        let favorites = FavoriteController::new(
            Arc::clone(&view),
            Arc::clone(&backend),
            notifier.clone(),
            Arc::clone(&shared),
            ui.elements.favorite_button.clone(),
        );
        let history = HistoryController::new(Arc::clone(&view), backend, notifier.clone(), shared);

        tracing::info!("Dashboard loaded");

        Self {
            view,
            notifier,
            theme,
            language,
            favorites,
            history,
            surfaces: ChartSurfaces::from(&ui.elements),
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn notifier(&self) -> &Notifier<V> {
        &self.notifier
    }

    pub fn theme(&self) -> &ThemeController<V, S, B> {
        &self.theme
    }

    pub fn language(&self) -> &LanguageController<V, S, B> {
        &self.language
    }

    pub fn favorites(&self) -> &FavoriteController<V, B> {
        &self.favorites
    }

    pub fn history(&self) -> &HistoryController<V, B> {
        &self.history
    }

    /// Chart renderer drawing onto this page's surfaces with `engine`.
    pub fn charts<E: ChartEngine>(&self, engine: E) -> ChartRenderer<V, E> {
        ChartRenderer::new(Arc::clone(&self.view), engine, self.surfaces.clone())
    }
}
