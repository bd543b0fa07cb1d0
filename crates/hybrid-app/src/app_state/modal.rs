//! Modal presentation over the toolbar surface.
//!
//! Screens hand their modals to a [`ModalQueue`] during `pump`; the app
//! then shows them one at a time and resolves each with whatever the
//! user picked in the toolbar page.

use std::collections::VecDeque;

use hybrid_screen::{ActionStyle, Modal, ModalCallback, ModalPresenter, ModalResponse};

use super::core::HybridApp;

struct Pending {
    modal: Modal,
    on_dismiss: ModalCallback,
}

struct Active {
    cancel_action: usize,
    on_dismiss: ModalCallback,
}

#[derive(Default)]
pub(crate) struct ModalQueue {
    waiting: VecDeque<Pending>,
    active: Option<Active>,
}

impl ModalPresenter for ModalQueue {
    fn present(&mut self, modal: Modal, on_dismiss: ModalCallback) {
        self.waiting.push_back(Pending { modal, on_dismiss });
    }
}

impl ModalQueue {
    pub(crate) fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub(crate) fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Activate the next waiting modal if nothing is on screen.
    pub(crate) fn next_to_show(&mut self) -> Option<Modal> {
        if self.active.is_some() {
            return None;
        }
        let Pending { modal, on_dismiss } = self.waiting.pop_front()?;
        let cancel_action = modal
            .actions
            .iter()
            .position(|a| a.style == ActionStyle::Cancel)
            .unwrap_or(0);
        self.active = Some(Active {
            cancel_action,
            on_dismiss,
        });
        Some(modal)
    }

    /// Complete the active modal. Returns `false` if none was showing.
    pub(crate) fn resolve(&mut self, response: ModalResponse) -> bool {
        match self.active.take() {
            Some(active) => {
                (active.on_dismiss)(response);
                true
            }
            None => false,
        }
    }

    /// Dismiss the active modal as if its cancel action were chosen.
    pub(crate) fn cancel_active(&mut self) -> bool {
        let Some(action) = self.active.as_ref().map(|a| a.cancel_action) else {
            return false;
        };
        self.resolve(ModalResponse::action(action))
    }

    /// Cancel the active modal and everything waiting behind it.
    pub(crate) fn cancel_all(&mut self) {
        self.cancel_active();
        while self.next_to_show().is_some() {
            self.cancel_active();
        }
    }
}

impl HybridApp {
    /// Show the next queued modal, growing the toolbar over the page.
    pub(super) fn show_next_modal(&mut self) {
        let Some(modal) = self.modals.next_to_show() else {
            return;
        };
        tracing::debug!(
            actions = modal.actions.len(),
            waiting = self.modals.waiting(),
            "showing modal"
        );
        self.sync_bounds();
        if let Some(ref toolbar) = self.toolbar {
            if let Err(e) = toolbar.show_modal(&modal) {
                tracing::warn!("Failed to show modal: {e}");
            }
        }
    }

    /// The user answered the active modal.
    pub(super) fn finish_modal(&mut self, response: ModalResponse) {
        if !self.modals.resolve(response) {
            tracing::debug!("modal response with no modal showing");
            return;
        }
        self.close_modal_surface();
    }

    /// Escape while a modal is up.
    pub(super) fn cancel_modal(&mut self) -> bool {
        if !self.modals.cancel_active() {
            return false;
        }
        self.close_modal_surface();
        true
    }

    fn close_modal_surface(&mut self) {
        if let Some(ref toolbar) = self.toolbar {
            if let Err(e) = toolbar.hide_modal() {
                tracing::warn!("Failed to hide modal: {e}");
            }
        }
        self.sync_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hybrid_screen::ModalAction;
    use std::sync::{Arc, Mutex};

    fn modal(actions: Vec<ModalAction>) -> Modal {
        Modal {
            title: String::new(),
            message: "hello".into(),
            actions,
            text_field: None,
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<ModalResponse>>>, ModalCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |r| sink.lock().unwrap().push(r)))
    }

    #[test]
    fn modals_show_one_at_a_time() {
        let mut q = ModalQueue::default();
        let (first, cb1) = recorder();
        let (second, cb2) = recorder();
        q.present(modal(vec![ModalAction::new("OK", ActionStyle::Default)]), cb1);
        q.present(modal(vec![ModalAction::new("OK", ActionStyle::Default)]), cb2);

        assert!(q.next_to_show().is_some());
        assert!(q.next_to_show().is_none());
        assert_eq!(q.waiting(), 1);

        assert!(q.resolve(ModalResponse::action(0)));
        assert_eq!(first.lock().unwrap().len(), 1);
        assert!(second.lock().unwrap().is_empty());

        assert!(q.next_to_show().is_some());
        assert!(q.resolve(ModalResponse::action(0)));
        assert_eq!(second.lock().unwrap().len(), 1);
        assert!(!q.is_showing());
    }

    #[test]
    fn resolve_without_active_modal_is_rejected() {
        let mut q = ModalQueue::default();
        assert!(!q.resolve(ModalResponse::action(0)));
    }

    #[test]
    fn cancel_picks_cancel_action() {
        let mut q = ModalQueue::default();
        let (seen, cb) = recorder();
        q.present(
            modal(vec![
                ModalAction::new("OK", ActionStyle::Default),
                ModalAction::new("Cancel", ActionStyle::Cancel),
            ]),
            cb,
        );
        q.next_to_show();
        assert!(q.cancel_active());
        assert_eq!(seen.lock().unwrap()[0], ModalResponse::action(1));
    }

    #[test]
    fn cancel_all_completes_every_modal_once() {
        let mut q = ModalQueue::default();
        let (a, cb1) = recorder();
        let (b, cb2) = recorder();
        q.present(modal(vec![ModalAction::new("OK", ActionStyle::Default)]), cb1);
        q.present(modal(vec![ModalAction::new("OK", ActionStyle::Default)]), cb2);
        q.next_to_show();

        q.cancel_all();

        assert_eq!(a.lock().unwrap().len(), 1);
        assert_eq!(b.lock().unwrap().len(), 1);
        assert!(!q.is_showing());
        assert_eq!(q.waiting(), 0);
    }
}
