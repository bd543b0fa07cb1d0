//! A single embedded web screen, independent of the rendering engine.
//!
//! The screen mirrors the renderer's navigation state into toolbar
//! widgets, turns page dialogs into native modals, and pushes a new
//! screen for every new-window request. The renderer, the modal UI, the
//! swipe-back gesture and the navigation stack are all collaborators
//! reached through the traits defined here:
//!
//! - [`Renderer`]: the engine that actually fetches and draws pages
//! - [`ModalPresenter`]: shows a [`Modal`] and reports the user's choice
//! - [`GesturePolicy`]: enables or disables the stack-level swipe-back
//! - [`NavigationStack`]: accepts new screens

pub mod controller;
pub mod dialog;
pub mod events;
pub mod gesture;
pub mod mirror;
pub mod modal;
pub mod renderer;
pub mod request;
pub mod settings;
pub mod stack;
pub mod subscription;

#[cfg(test)]
mod testing;

pub use controller::{ScreenController, ScreenState};
pub use dialog::{
    DialogBridge, DialogKind, DialogRequest, FrameInfo, NewWindowOutcome, NewWindowRequest,
};
pub use events::{EventSink, NavigationEvent, PropertyChange, RendererEvent};
pub use gesture::{GesturePolicy, SwipeBackGate};
pub use mirror::{Capabilities, ChromeState, NavigationMirror, NavigationSnapshot, ProgressIndicator};
pub use modal::{ActionStyle, Modal, ModalAction, ModalCallback, ModalPresenter, ModalResponse};
pub use renderer::{Renderer, RendererConfig, RendererFactory};
pub use request::{normalize_address, LoadOptions, LoadRequest};
pub use settings::ScreenSettings;
pub use stack::{NavigationStack, PushQueue, ScreenSeed, ScreenStack};
pub use subscription::{PropertyHub, Subscription, SubscriptionBag};
