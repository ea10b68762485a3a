//! Dashboard page behavior: theme and language switching, favorites,
//! history clearing, transient notifications and chart rendering.
//!
//! Everything that touches the page goes through [`ViewPort`] and
//! [`PreferenceStore`], so the controllers run unchanged against the
//! in-memory document used by tests and the CLI shell.

pub mod charts;
pub mod dashboard;
pub mod favorite;
pub mod history;
pub mod i18n;
pub mod language;
pub mod memory;
pub mod notify;
pub mod storage;
pub mod styles;
pub mod theme;
pub mod view;

#[cfg(test)]
mod testing;

pub use charts::{ChartConfig, ChartEngine, ChartRenderer, ChartSurfaces, RecordingEngine};
pub use dashboard::Dashboard;
pub use favorite::{FavoriteController, FavoriteOutcome};
pub use history::{HistoryController, HistoryOutcome};
pub use i18n::{Labels, SharedLanguage};
pub use language::LanguageController;
pub use memory::MemoryView;
pub use notify::{NotificationTiming, Notifier, Severity};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use theme::ThemeController;
pub use view::{NodeId, NotificationElement, ViewPort};
