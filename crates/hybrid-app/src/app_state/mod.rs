//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Hosts the toolbar surface and a stack of web screens, and
//! presents their dialogs over the toolbar.

mod core;
mod event_handler;
mod init;
mod layout;
mod modal;
mod polling;
mod shutdown;
mod title;

pub use core::HybridApp;
