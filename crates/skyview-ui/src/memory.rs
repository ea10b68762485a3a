//! In-memory page used by tests and the headless CLI.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use parking_lot::Mutex;

use crate::view::{NodeId, NotificationElement, ViewPort};

#[derive(Debug, Clone, Default)]
struct ElementState {
    text: String,
    classes: BTreeSet<String>,
    checked: bool,
}

/// A notification as currently attached to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedNotification {
    pub id: NodeId,
    pub element: NotificationElement,
    pub animation: String,
}

#[derive(Debug, Default)]
struct DocumentState {
    attributes: BTreeMap<String, String>,
    elements: HashMap<String, ElementState>,
    styles: Vec<String>,
    notifications: BTreeMap<NodeId, AttachedNotification>,
    next_node: u64,
    confirm_answer: bool,
    prompts: Vec<String>,
    reloads: usize,
}

/// Document double holding attributes, elements and notifications in memory.
///
/// `confirm` answers with a preset value and records every prompt.
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<DocumentState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element the controllers can find by id.
    pub fn with_element(self, id: impl Into<String>) -> Self {
        self.state
            .lock()
            .elements
            .insert(id.into(), ElementState::default());
        self
    }

    /// Answer future confirmation prompts with `answer`.
    pub fn with_confirm_answer(self, answer: bool) -> Self {
        self.state.lock().confirm_answer = answer;
        self
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.state.lock().confirm_answer = answer;
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.lock().attributes.get(name).cloned()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.state.lock().elements.get(id).map(|e| e.text.clone())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.state
            .lock()
            .elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.state
            .lock()
            .elements
            .get(id)
            .is_some_and(|e| e.checked)
    }

    /// Notifications currently attached, oldest first.
    pub fn notifications(&self) -> Vec<AttachedNotification> {
        self.state.lock().notifications.values().cloned().collect()
    }

    pub fn styles(&self) -> Vec<String> {
        self.state.lock().styles.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.lock().prompts.clone()
    }

    pub fn reload_count(&self) -> usize {
        self.state.lock().reloads
    }
}

impl ViewPort for MemoryView {
    fn has_element(&self, id: &str) -> bool {
        self.state.lock().elements.contains_key(id)
    }

    fn set_document_attribute(&self, name: &str, value: &str) {
        self.state
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_checked(&self, id: &str, checked: bool) -> bool {
        match self.state.lock().elements.get_mut(id) {
            Some(element) => {
                element.checked = checked;
                true
            }
            None => false,
        }
    }

    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.state.lock().elements.get_mut(id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) -> bool {
        match self.state.lock().elements.get_mut(id) {
            Some(element) => {
                if on {
                    element.classes.insert(class.to_string());
                } else {
                    element.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    fn inject_style(&self, css: &str) {
        self.state.lock().styles.push(css.to_string());
    }

    fn append_notification(&self, element: &NotificationElement) -> NodeId {
        let mut state = self.state.lock();
        let id = NodeId(state.next_node);
        state.next_node += 1;
        let animation = crate::styles::animation_of(&element.style)
            .unwrap_or_default()
            .to_string();
        state.notifications.insert(
            id,
            AttachedNotification {
                id,
                element: element.clone(),
                animation,
            },
        );
        id
    }

    fn set_animation(&self, node: NodeId, animation: &str) -> bool {
        match self.state.lock().notifications.get_mut(&node) {
            Some(attached) => {
                attached.animation = animation.to_string();
                true
            }
            None => false,
        }
    }

    fn remove_node(&self, node: NodeId) -> bool {
        self.state.lock().notifications.remove(&node).is_some()
    }

    fn confirm(&self, prompt: &str) -> bool {
        let mut state = self.state.lock();
        state.prompts.push(prompt.to_string());
        state.confirm_answer
    }

    fn reload(&self) {
        self.state.lock().reloads += 1;
    }
}
