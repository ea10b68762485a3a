//! Fixed interface strings per language.

use std::sync::Arc;

use parking_lot::RwLock;
use skyview_core::Language;

/// Language shared between the language controller and the controllers that
/// print text.
pub type SharedLanguage = Arc<RwLock<Language>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Favorite button text when the city is not a favorite
    pub favorite_add: &'static str,
    /// Favorite button text when the city is a favorite
    pub favorite_remove: &'static str,
    /// Shown when the favorites request fails
    pub favorite_error: &'static str,
    pub history_confirm: &'static str,
    pub history_error: &'static str,
}

const PT: Labels = Labels {
    favorite_add: "☆ Adicionar aos Favoritos",
    favorite_remove: "⭐ Remover dos Favoritos",
    favorite_error: "Erro ao atualizar favoritos",
    history_confirm: "Deseja realmente limpar todo o histórico de buscas?",
    history_error: "Erro ao limpar histórico",
};

const EN: Labels = Labels {
    favorite_add: "☆ Add to Favorites",
    favorite_remove: "⭐ Remove from Favorites",
    favorite_error: "Could not update favorites",
    history_confirm: "Do you really want to clear your whole search history?",
    history_error: "Could not clear history",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Pt => &PT,
            Language::En => &EN,
        }
    }

    /// Favorite button text for the given flag.
    pub fn favorite_button(&self, is_favorite: bool) -> &'static str {
        if is_favorite {
            self.favorite_remove
        } else {
            self.favorite_add
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_button_labels() {
        let labels = Labels::for_language(Language::Pt);
        assert_eq!(labels.favorite_button(true), "⭐ Remover dos Favoritos");
        assert_eq!(labels.favorite_button(false), "☆ Adicionar aos Favoritos");
    }

    #[test]
    fn test_every_language_has_text() {
        for language in [Language::Pt, Language::En] {
            let labels = Labels::for_language(language);
            assert!(!labels.favorite_error.is_empty());
            assert!(!labels.history_confirm.is_empty());
            assert!(!labels.history_error.is_empty());
        }
    }
}
