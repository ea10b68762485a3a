//! Search history clearing.

use std::sync::Arc;

use skyview_api::DashboardBackend;

use crate::i18n::{Labels, SharedLanguage};
use crate::notify::Notifier;
use crate::view::ViewPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// History deleted and the page reloaded
    Cleared,
    /// The server answered `success: false`
    Rejected,
    Failed,
}

pub struct HistoryController<V, B> {
    view: Arc<V>,
    backend: Arc<B>,
    notifier: Notifier<V>,
    language: SharedLanguage,
}

impl<V: ViewPort, B: DashboardBackend> HistoryController<V, B> {
    pub fn new(view: Arc<V>, backend: Arc<B>, notifier: Notifier<V>, language: SharedLanguage) -> Self {
        Self {
            view,
            backend,
            notifier,
            language,
        }
    }

    /// Confirm with the user, then delete the history and reload the page.
    pub async fn clear_history(&self) -> HistoryOutcome {
        let labels = Labels::for_language(*self.language.read());

        // The dialog blocks until answered, so keep it off the runtime threads.
        let view = Arc::clone(&self.view);
        let prompt = labels.history_confirm;
        let confirmed = tokio::task::spawn_blocking(move || view.confirm(prompt))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Confirmation dialog failed: {}", e);
                false
            });
        if !confirmed {
            tracing::debug!("History clearing cancelled");
            return HistoryOutcome::Cancelled;
        }

        match self.backend.clear_history().await {
            Ok(reply) if reply.success => {
                tracing::info!("Search history cleared");
                self.view.reload();
                HistoryOutcome::Cleared
            }
            Ok(_) => {
                tracing::info!("History clearing refused by server");
                self.notifier.error(labels.history_error);
                HistoryOutcome::Rejected
            }
            Err(e) => {
                tracing::error!("History clearing failed: {}", e);
                self.notifier.error(labels.history_error);
                HistoryOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryView;
    use crate::notify::NotificationTiming;
    use crate::testing::FakeBackend;
    use crate::view::{NodeId, NotificationElement};
    use parking_lot::{Mutex, RwLock};
    use skyview_core::Language;
    use std::sync::mpsc;
    use std::time::Duration;

    fn build(
        answer: bool,
    ) -> (
        Arc<MemoryView>,
        Arc<FakeBackend>,
        HistoryController<MemoryView, FakeBackend>,
    ) {
        let view = Arc::new(MemoryView::new().with_confirm_answer(answer));
        let backend = Arc::new(FakeBackend::default());
        let notifier = Notifier::new(Arc::clone(&view), NotificationTiming::default());
        let controller = HistoryController::new(
            Arc::clone(&view),
            Arc::clone(&backend),
            notifier,
            Arc::new(RwLock::new(Language::Pt)),
        );
        (view, backend, controller)
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_sends_nothing() {
        let (view, backend, controller) = build(false);

        assert_eq!(controller.clear_history().await, HistoryOutcome::Cancelled);
        assert_eq!(
            view.prompts(),
            vec!["Deseja realmente limpar todo o histórico de buscas?".to_string()]
        );
        assert!(backend.calls().is_empty());
        assert!(view.notifications().is_empty());
        assert_eq!(view.reload_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmed_clears_and_reloads() {
        let (view, backend, controller) = build(true);

        assert_eq!(controller.clear_history().await, HistoryOutcome::Cleared);
        assert_eq!(backend.calls(), vec!["clear-history".to_string()]);
        assert_eq!(view.reload_count(), 1);
        assert!(view.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refusal_notifies_without_reload() {
        let (view, backend, controller) = build(true);
        backend.set_clear_reply(false);

        assert_eq!(controller.clear_history().await, HistoryOutcome::Rejected);
        assert_eq!(view.reload_count(), 0);
        assert_eq!(view.notifications()[0].element.text, "Erro ao limpar histórico");
    }

    /// Page whose confirmation dialog waits for an answer sent from
    /// another task.
    struct WaitingDialogView {
        page: MemoryView,
        answers: Mutex<mpsc::Receiver<bool>>,
    }

    impl ViewPort for WaitingDialogView {
        fn has_element(&self, id: &str) -> bool {
            self.page.has_element(id)
        }
        fn set_document_attribute(&self, name: &str, value: &str) {
            self.page.set_document_attribute(name, value)
        }
        fn set_checked(&self, id: &str, checked: bool) -> bool {
            self.page.set_checked(id, checked)
        }
        fn set_text(&self, id: &str, text: &str) -> bool {
            self.page.set_text(id, text)
        }
        fn toggle_class(&self, id: &str, class: &str, on: bool) -> bool {
            self.page.toggle_class(id, class, on)
        }
        fn inject_style(&self, css: &str) {
            self.page.inject_style(css)
        }
        fn append_notification(&self, element: &NotificationElement) -> NodeId {
            self.page.append_notification(element)
        }
        fn set_animation(&self, node: NodeId, animation: &str) -> bool {
            self.page.set_animation(node, animation)
        }
        fn remove_node(&self, node: NodeId) -> bool {
            self.page.remove_node(node)
        }
        fn confirm(&self, prompt: &str) -> bool {
            self.page.confirm(prompt);
            self.answers
                .lock()
                .recv_timeout(Duration::from_secs(5))
                .unwrap_or(false)
        }
        fn reload(&self) {
            self.page.reload()
        }
    }

    #[tokio::test]
    async fn test_blocking_dialog_does_not_stall_the_runtime() {
        let (tx, rx) = mpsc::channel();
        let view = Arc::new(WaitingDialogView {
            page: MemoryView::new(),
            answers: Mutex::new(rx),
        });
        let backend = Arc::new(FakeBackend::default());
        let notifier = Notifier::new(Arc::clone(&view), NotificationTiming::default());
        let controller = HistoryController::new(
            Arc::clone(&view),
            Arc::clone(&backend),
            notifier,
            Arc::new(RwLock::new(Language::Pt)),
        );

        // Answered by a task on the same single-threaded runtime; it only
        // gets to run if the dialog is not holding that thread.
        tokio::spawn(async move {
            let _ = tx.send(true);
        });

        assert_eq!(controller.clear_history().await, HistoryOutcome::Cleared);
        assert_eq!(view.page.reload_count(), 1);
        assert_eq!(backend.calls(), vec!["clear-history".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_notifies_without_reload() {
        let (view, backend, controller) = build(true);
        backend.fail_transport();

        assert_eq!(controller.clear_history().await, HistoryOutcome::Failed);
        assert_eq!(view.reload_count(), 0);
        assert_eq!(view.notifications().len(), 1);
    }
}
