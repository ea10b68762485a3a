//! The slice of the page the controllers are allowed to touch.

use std::fmt;

/// Handle to a notification element appended by [`ViewPort::append_notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A detached notification element, ready to be appended to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationElement {
    pub class_name: String,
    pub text: String,
    /// Inline style, including the entry animation
    pub style: String,
}

/// Page operations used by the dashboard.
///
/// Element lookups are by id. Operations on a missing element do nothing and
/// report `false`; callers decide whether that matters.
pub trait ViewPort: Send + Sync + 'static {
    /// Whether an element with this id is present.
    fn has_element(&self, id: &str) -> bool;

    /// Set an attribute on the document body (`data-theme`, `lang`).
    fn set_document_attribute(&self, name: &str, value: &str);

    /// Set the checked state of a checkbox-like control.
    fn set_checked(&self, id: &str, checked: bool) -> bool;

    /// Replace the text content of an element.
    fn set_text(&self, id: &str, text: &str) -> bool;

    /// Add (`on`) or remove a CSS class.
    fn toggle_class(&self, id: &str, class: &str, on: bool) -> bool;

    /// Append a `<style>` block to the document head.
    fn inject_style(&self, css: &str);

    /// Append a notification element to the body and return its handle.
    fn append_notification(&self, element: &NotificationElement) -> NodeId;

    /// Replace the running animation of an appended notification.
    fn set_animation(&self, node: NodeId, animation: &str) -> bool;

    /// Detach an appended notification. Detaching twice is harmless.
    fn remove_node(&self, node: NodeId) -> bool;

    /// Ask the user a yes/no question, blocking until answered.
    ///
    /// Callers on the async runtime run this through
    /// `tokio::task::spawn_blocking`.
    fn confirm(&self, prompt: &str) -> bool;

    /// Reload the whole page.
    fn reload(&self);
}
