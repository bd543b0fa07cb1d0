//! HybridApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use url::Url;
use winit::window::Window;

use hybrid_common::ScreenId;
use hybrid_config::HybridConfig;
use hybrid_screen::{ChromeState, ScreenStack, SwipeBackGate};
use hybrid_webview::{Toolbar, WryRendererFactory};

use super::modal::ModalQueue;

pub(super) type Screens = ScreenStack<WryRendererFactory<Window>>;

/// Top-level application state.
pub struct HybridApp {
    pub(super) config: HybridConfig,
    /// Address from the command line; consumed by the root screen.
    pub(super) initial_url: Option<Url>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) toolbar: Option<Toolbar>,

    // Screens
    pub(super) screens: Option<Screens>,
    pub(super) gesture: Arc<SwipeBackGate>,
    pub(super) modals: ModalQueue,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // What the window currently shows, to skip redundant updates
    pub(super) shown_screen: Option<(ScreenId, bool)>,
    pub(super) shown_chrome: Option<ChromeState>,
    pub(super) shown_title: Option<String>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl HybridApp {
    pub fn new(config: HybridConfig, initial_url: Option<Url>) -> Self {
        Self {
            config,
            initial_url,
            window: None,
            toolbar: None,
            screens: None,
            gesture: Arc::new(SwipeBackGate::new()),
            modals: ModalQueue::default(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            shown_screen: None,
            shown_chrome: None,
            shown_title: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
