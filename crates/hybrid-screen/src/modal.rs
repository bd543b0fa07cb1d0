//! Native modal presentation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Default,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalAction {
    pub label: String,
    pub style: ActionStyle,
}

impl ModalAction {
    pub fn new(label: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

/// A modal to be shown on top of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub actions: Vec<ModalAction>,
    /// `Some` when the modal carries a text field; the inner value is the
    /// field's initial text.
    pub text_field: Option<Option<String>>,
}

/// What the user did with a modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalResponse {
    /// Index into [`Modal::actions`].
    pub action: usize,
    /// Contents of the text field, if the modal had one.
    pub text: Option<String>,
}

impl ModalResponse {
    pub fn action(action: usize) -> Self {
        Self { action, text: None }
    }

    pub fn with_text(action: usize, text: impl Into<String>) -> Self {
        Self {
            action,
            text: Some(text.into()),
        }
    }
}

pub type ModalCallback = Box<dyn FnOnce(ModalResponse) + Send>;

/// Shows modals. The callback must be invoked exactly once, when the
/// user dismisses the modal.
pub trait ModalPresenter {
    fn present(&mut self, modal: Modal, on_dismiss: ModalCallback);
}
