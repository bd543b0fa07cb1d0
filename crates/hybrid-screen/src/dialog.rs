//! Page dialogs and new-window requests, re-presented as native UI.

use std::fmt;

use hybrid_config::DialogConfig;
use tracing::debug;
use url::Url;

use crate::modal::{ActionStyle, Modal, ModalAction, ModalPresenter, ModalResponse};
use crate::renderer::RendererConfig;
use crate::stack::{NavigationStack, ScreenSeed};

pub type AlertCompletion = Box<dyn FnOnce() + Send>;
pub type ConfirmCompletion = Box<dyn FnOnce(bool) + Send>;
pub type PromptCompletion = Box<dyn FnOnce(Option<String>) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

/// A script-originated dialog waiting for the user.
///
/// Each variant carries the completion the renderer is blocked on.
pub enum DialogRequest {
    Alert {
        message: String,
        completion: AlertCompletion,
    },
    Confirm {
        message: String,
        completion: ConfirmCompletion,
    },
    Prompt {
        message: String,
        default_text: Option<String>,
        completion: PromptCompletion,
    },
}

impl DialogRequest {
    pub fn alert(message: impl Into<String>, completion: impl FnOnce() + Send + 'static) -> Self {
        Self::Alert {
            message: message.into(),
            completion: Box::new(completion),
        }
    }

    pub fn confirm(
        message: impl Into<String>,
        completion: impl FnOnce(bool) + Send + 'static,
    ) -> Self {
        Self::Confirm {
            message: message.into(),
            completion: Box::new(completion),
        }
    }

    pub fn prompt(
        message: impl Into<String>,
        default_text: Option<String>,
        completion: impl FnOnce(Option<String>) + Send + 'static,
    ) -> Self {
        Self::Prompt {
            message: message.into(),
            default_text,
            completion: Box::new(completion),
        }
    }

    pub fn kind(&self) -> DialogKind {
        match self {
            Self::Alert { .. } => DialogKind::Alert,
            Self::Confirm { .. } => DialogKind::Confirm,
            Self::Prompt { .. } => DialogKind::Prompt,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Alert { message, .. }
            | Self::Confirm { message, .. }
            | Self::Prompt { message, .. } => message,
        }
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("DialogRequest");
        d.field("kind", &self.kind()).field("message", &self.message());
        if let Self::Prompt { default_text, .. } = self {
            d.field("default_text", default_text);
        }
        d.finish_non_exhaustive()
    }
}

/// Describes the frame a navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInfo {
    pub is_main_frame: bool,
}

/// A navigation that asked for a new window (e.g. `target="_blank"`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewWindowRequest {
    pub url: Option<Url>,
    /// `None` when the navigation targets no existing frame.
    pub target_frame: Option<FrameInfo>,
    /// Configuration the renderer proposes for the new surface.
    pub configuration: RendererConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewWindowOutcome {
    /// A new screen was queued on the navigation stack.
    Pushed,
    /// The request targeted an existing frame and was left alone.
    Ignored,
}

/// Maps dialog requests onto modals and new-window requests onto screens.
#[derive(Debug, Clone)]
pub struct DialogBridge {
    labels: DialogConfig,
}

impl DialogBridge {
    pub fn new(labels: DialogConfig) -> Self {
        Self { labels }
    }

    /// Present one modal for `request`. The request's completion runs
    /// exactly once, when the modal is dismissed.
    pub fn present(&self, request: DialogRequest, presenter: &mut dyn ModalPresenter) {
        debug!(kind = ?request.kind(), "presenting page dialog");
        match request {
            DialogRequest::Alert {
                message,
                completion,
            } => {
                let modal = self.modal(message, vec![self.confirm_action()], None);
                presenter.present(modal, Box::new(move |_: ModalResponse| completion()));
            }
            DialogRequest::Confirm {
                message,
                completion,
            } => {
                let actions = vec![
                    self.confirm_action(),
                    ModalAction::new(self.labels.cancel_label.clone(), ActionStyle::Cancel),
                ];
                let modal = self.modal(message, actions, None);
                presenter.present(
                    modal,
                    Box::new(move |response: ModalResponse| completion(response.action == 0)),
                );
            }
            DialogRequest::Prompt {
                message,
                default_text,
                completion,
            } => {
                let modal = self.modal(
                    message,
                    vec![self.confirm_action()],
                    Some(default_text.clone()),
                );
                presenter.present(
                    modal,
                    Box::new(move |response: ModalResponse| {
                        completion(response.text.or(default_text))
                    }),
                );
            }
        }
    }

    /// Handle a new-window request without creating a second surface.
    ///
    /// The renderer is always answered with "no surface"; when the request
    /// targets no existing frame, a new screen carrying the requested URL
    /// and the proposed configuration is pushed instead.
    pub fn open_window(
        &self,
        request: NewWindowRequest,
        stack: &mut dyn NavigationStack,
    ) -> NewWindowOutcome {
        if let Some(frame) = &request.target_frame {
            debug!(
                main_frame = frame.is_main_frame,
                "new-window request targets an existing frame; ignoring"
            );
            return NewWindowOutcome::Ignored;
        }

        debug!(
            url = request.url.as_ref().map(Url::as_str).unwrap_or("<none>"),
            "pushing screen for new-window request"
        );
        stack.push(ScreenSeed {
            target_url: request.url,
            configuration: Some(request.configuration),
        });
        NewWindowOutcome::Pushed
    }

    fn confirm_action(&self) -> ModalAction {
        ModalAction::new(self.labels.confirm_label.clone(), ActionStyle::Default)
    }

    fn modal(
        &self,
        message: String,
        actions: Vec<ModalAction>,
        text_field: Option<Option<String>>,
    ) -> Modal {
        Modal {
            title: self.labels.title.clone(),
            message,
            actions,
            text_field,
        }
    }
}
