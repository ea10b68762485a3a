//! Favorite city toggling.

use std::sync::Arc;

use skyview_api::{City, DashboardBackend};

use crate::i18n::{Labels, SharedLanguage};
use crate::notify::Notifier;
use crate::view::ViewPort;

const FAVORITE_CLASS: &str = "is-favorite";

/// What a favorite toggle ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// The server flipped the flag; the button reflects `is_favorite`
    Updated { is_favorite: bool },
    /// The server answered `success: false`
    Rejected { message: String },
    /// The request never produced a usable reply
    Failed,
}

pub struct FavoriteController<V, B> {
    view: Arc<V>,
    backend: Arc<B>,
    notifier: Notifier<V>,
    language: SharedLanguage,
    button_id: String,
}

impl<V: ViewPort, B: DashboardBackend> FavoriteController<V, B> {
    pub fn new(
        view: Arc<V>,
        backend: Arc<B>,
        notifier: Notifier<V>,
        language: SharedLanguage,
        button_id: impl Into<String>,
    ) -> Self {
        Self {
            view,
            backend,
            notifier,
            language,
            button_id: button_id.into(),
        }
    }

    /// Ask the server to flip the favorite flag of `city`.
    ///
    /// The button is only touched after a successful reply.
    pub async fn toggle_favorite(&self, city: &City) -> FavoriteOutcome {
        let labels = Labels::for_language(*self.language.read());

        let reply = match self.backend.toggle_favorite(city).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Favorite toggle for {} failed: {}", city.name, e);
                self.notifier.error(labels.favorite_error);
                return FavoriteOutcome::Failed;
            }
        };

        if !reply.success {
            tracing::info!("Favorite toggle for {} refused: {}", city.name, reply.message);
            let message = if reply.message.is_empty() {
                labels.favorite_error.to_string()
            } else {
                reply.message
            };
            self.notifier.error(&message);
            return FavoriteOutcome::Rejected { message };
        }

        let is_favorite = reply.is_favorite;
        if !self
            .view
            .set_text(&self.button_id, labels.favorite_button(is_favorite))
        {
            tracing::debug!("Favorite button '{}' not on this page", self.button_id);
        }
        self.view
            .toggle_class(&self.button_id, FAVORITE_CLASS, is_favorite);
        self.notifier.success(&reply.message);

        FavoriteOutcome::Updated { is_favorite }
    }
}
