//! Transient, self-dismissing notifications.
//!
//! Every call owns its element and its timers. Nothing is queued,
//! deduplicated or capped; overlapping notifications simply stack.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use skyview_core::NotificationConfig;
use tokio::task::JoinHandle;

use crate::styles::{notification_style, slide_in, slide_out};
use crate::view::{NotificationElement, ViewPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// How long a notification stays up and how long it takes to slide away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub dwell: Duration,
    pub fade: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for NotificationTiming {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            dwell: Duration::from_millis(config.dwell_ms),
            fade: Duration::from_millis(config.fade_ms),
        }
    }
}

pub struct Notifier<V> {
    view: Arc<V>,
    timing: NotificationTiming,
}

impl<V> Clone for Notifier<V> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            timing: self.timing,
        }
    }
}

impl<V: ViewPort> Notifier<V> {
    pub fn new(view: Arc<V>, timing: NotificationTiming) -> Self {
        Self { view, timing }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Show `message` now and schedule its dismissal.
    ///
    /// The element is attached before this returns. The handle resolves once
    /// the element has been removed; dropping it does not cancel anything.
    /// Must be called from within a Tokio runtime.
    pub fn notify(&self, message: &str, severity: Severity) -> JoinHandle<()> {
        let element = NotificationElement {
            class_name: format!("notification notification-{}", severity.as_str()),
            text: message.to_string(),
            style: notification_style(severity, &slide_in(self.timing.fade)),
        };
        let node = self.view.append_notification(&element);
        tracing::debug!("Notification {} ({}): {}", node, severity.as_str(), message);

        let view = Arc::clone(&self.view);
        let timing = self.timing;
        tokio::spawn(async move {
            tokio::time::sleep(timing.dwell).await;
            view.set_animation(node, &slide_out(timing.fade));
            tokio::time::sleep(timing.fade).await;
            if !view.remove_node(node) {
                tracing::trace!("Notification {} was already gone", node);
            }
        })
    }

    pub fn info(&self, message: &str) -> JoinHandle<()> {
        self.notify(message, Severity::Info)
    }

    pub fn success(&self, message: &str) -> JoinHandle<()> {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: &str) -> JoinHandle<()> {
        self.notify(message, Severity::Error)
    }
}
