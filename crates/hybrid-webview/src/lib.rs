//! `wry`-backed renderer for hybrid screens.
//!
//! Provides:
//! - [`WryRenderer`]: a child WebView implementing `hybrid_screen::Renderer`
//! - [`History`]: back/forward tracking, which wry does not expose
//! - [`Toolbar`]: progress bar, back/forward buttons and modal overlay,
//!   rendered as a second child WebView and driven over IPC

pub mod bounds;
pub mod history;
pub mod ipc;
pub mod renderer;
pub mod request;
pub mod toolbar;

pub use bounds::rect_to_wry;
pub use history::History;
pub use ipc::IpcMessage;
pub use renderer::{WryRenderer, WryRendererFactory};
pub use toolbar::{Toolbar, ToolbarAction};
