//! Screen controller: owns one renderer and drives its lifecycle.

use std::sync::Arc;
use std::time::Duration;

use hybrid_common::ScreenId;
use tracing::{debug, info, warn};
use url::Url;

use crate::dialog::{DialogBridge, NewWindowOutcome};
use crate::events::{EventSink, NavigationEvent, PropertyChange, RendererEvent};
use crate::gesture::GesturePolicy;
use crate::mirror::{Capabilities, ChromeState, NavigationMirror, NavigationSnapshot};
use crate::modal::ModalPresenter;
use crate::renderer::Renderer;
use crate::request::{normalize_address, LoadOptions, LoadRequest};
use crate::settings::ScreenSettings;
use crate::stack::{NavigationStack, ScreenSeed};
use crate::subscription::SubscriptionBag;

/// Lifecycle of a screen.
///
/// `Constructing -> ViewLoaded -> Active <-> Inactive -> Destroyed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Constructing,
    ViewLoaded,
    Active,
    Inactive,
    Destroyed,
}

pub struct ScreenController<R: Renderer> {
    id: ScreenId,
    state: ScreenState,
    renderer: R,
    target_url: Option<Url>,
    settings: ScreenSettings,
    mirror: NavigationMirror,
    dialogs: DialogBridge,
    gesture: Arc<dyn GesturePolicy>,
    inbox: EventSink,
    subscriptions: SubscriptionBag,
    initial_load_done: bool,
    crash_reloads: u32,
}

impl<R: Renderer> ScreenController<R> {
    pub fn new(
        renderer: R,
        seed: ScreenSeed,
        settings: ScreenSettings,
        gesture: Arc<dyn GesturePolicy>,
    ) -> Self {
        let id = ScreenId::new();
        debug!(screen = id.short(), target = ?seed.target_url.as_ref().map(Url::as_str), "screen constructed");
        Self {
            id,
            state: ScreenState::Constructing,
            renderer,
            target_url: seed.target_url,
            mirror: NavigationMirror::new(settings.progress_fade, Arc::clone(&gesture)),
            dialogs: DialogBridge::new(settings.dialog.clone()),
            settings,
            gesture,
            inbox: EventSink::new(),
            subscriptions: SubscriptionBag::new(),
            initial_load_done: false,
            crash_reloads: 0,
        }
    }

    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn target_url(&self) -> Option<&Url> {
        self.target_url.as_ref()
    }

    pub fn chrome(&self) -> &ChromeState {
        self.mirror.chrome()
    }

    pub fn snapshot(&self) -> &NavigationSnapshot {
        self.mirror.snapshot()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Wire the renderer to this screen. Runs once per instance.
    pub fn view_did_load(&mut self) {
        if self.state != ScreenState::Constructing {
            debug!(screen = self.id.short(), state = ?self.state, "view already loaded");
            return;
        }

        let hub = self.renderer.properties().clone();

        let sink = self.inbox.clone();
        self.subscriptions.push(
            hub.on_progress_changed(move |p| sink.push(PropertyChange::Progress(p))),
        );
        let sink = self.inbox.clone();
        self.subscriptions.push(
            hub.on_loading_changed(move |l| sink.push(PropertyChange::Loading(l))),
        );
        let sink = self.inbox.clone();
        self.subscriptions.push(
            hub.on_url_changed(move |u| sink.push(PropertyChange::Url(u.cloned()))),
        );

        self.renderer.set_event_sink(Some(self.inbox.clone()));
        self.state = ScreenState::ViewLoaded;
        debug!(screen = self.id.short(), "view loaded");
    }

    /// The screen is about to become visible.
    pub fn will_appear(&mut self) {
        match self.state {
            ScreenState::ViewLoaded | ScreenState::Inactive => {}
            ScreenState::Active => return,
            ScreenState::Constructing | ScreenState::Destroyed => {
                warn!(screen = self.id.short(), state = ?self.state, "will_appear in wrong state");
                return;
            }
        }
        self.state = ScreenState::Active;
        self.mirror.set_drives_gesture(true);
        self.gesture
            .set_swipe_back_enabled(!self.renderer.can_go_back());

        if !self.initial_load_done {
            self.initial_load_done = true;
            self.load_initial_page();
        }
    }

    /// The screen is about to be covered or popped.
    pub fn will_disappear(&mut self) {
        if self.state != ScreenState::Active {
            return;
        }
        self.state = ScreenState::Inactive;
        self.mirror.set_drives_gesture(false);
        self.gesture.set_swipe_back_enabled(true);
    }

    /// Stop the renderer and release every subscription. Idempotent.
    pub fn destroy(&mut self) {
        if self.state == ScreenState::Destroyed {
            return;
        }
        if let Err(e) = self.renderer.stop() {
            debug!(screen = self.id.short(), "stop on destroy failed: {e}");
        }
        self.mirror.set_drives_gesture(false);
        self.renderer.set_event_sink(None);
        self.subscriptions.dispose();
        self.inbox.clear();
        self.state = ScreenState::Destroyed;
        info!(screen = self.id.short(), "screen destroyed");
    }

    /// Load an address, prefixing `http://` when it has no scheme.
    /// Absent or malformed addresses are ignored.
    pub fn load_address(&mut self, address: Option<&str>, options: Option<LoadOptions>) {
        let Some(address) = address else {
            debug!(screen = self.id.short(), "no address to load");
            return;
        };
        match normalize_address(address) {
            Ok(url) => self.load_url(Some(url), options),
            Err(e) => warn!(screen = self.id.short(), "ignoring load: {e}"),
        }
    }

    /// Load an already parsed URL. `None` is ignored.
    pub fn load_url(&mut self, url: Option<Url>, options: Option<LoadOptions>) {
        if self.state == ScreenState::Destroyed {
            return;
        }
        let Some(url) = url else {
            debug!(screen = self.id.short(), "no url to load");
            return;
        };
        let options = options.unwrap_or(self.settings.load_options);
        info!(screen = self.id.short(), url = %url, "loading");
        if let Err(e) = self.renderer.load(LoadRequest::new(url, options)) {
            warn!(screen = self.id.short(), "load failed: {e}");
        }
    }

    /// Back button.
    pub fn go_back(&mut self) {
        if self.state == ScreenState::Destroyed || !self.renderer.can_go_back() {
            return;
        }
        if let Err(e) = self.renderer.go_back() {
            warn!(screen = self.id.short(), "go_back failed: {e}");
        }
    }

    /// Forward button.
    pub fn go_forward(&mut self) {
        if self.state == ScreenState::Destroyed || !self.renderer.can_go_forward() {
            return;
        }
        if let Err(e) = self.renderer.go_forward() {
            warn!(screen = self.id.short(), "go_forward failed: {e}");
        }
    }

    /// The host is low on memory: stop whatever is loading.
    pub fn on_memory_warning(&mut self) {
        if self.state == ScreenState::Destroyed {
            return;
        }
        info!(screen = self.id.short(), "memory warning; stopping load");
        if let Err(e) = self.renderer.stop() {
            debug!(screen = self.id.short(), "stop failed: {e}");
        }
    }

    /// Apply every pending renderer event in order. Returns how many
    /// were handled.
    pub fn pump(
        &mut self,
        stack: &mut dyn NavigationStack,
        presenter: &mut dyn ModalPresenter,
    ) -> usize {
        let events = self.inbox.drain();
        let count = events.len();
        for event in events {
            self.handle_event(event, stack, presenter);
        }
        count
    }

    /// Advance the progress fade. Returns `true` if the chrome changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.mirror.tick(dt)
    }

    fn handle_event(
        &mut self,
        event: RendererEvent,
        stack: &mut dyn NavigationStack,
        presenter: &mut dyn ModalPresenter,
    ) {
        if self.state == ScreenState::Destroyed {
            return;
        }
        match event {
            RendererEvent::Property(PropertyChange::Progress(p)) => {
                self.mirror.on_progress(p);
                if p >= 1.0 {
                    self.crash_reloads = 0;
                }
            }
            RendererEvent::Property(PropertyChange::Loading(loading)) => {
                let caps = Capabilities::of(&self.renderer);
                self.mirror.on_loading_changed(loading, caps);
            }
            RendererEvent::Property(PropertyChange::Url(url)) => {
                self.mirror.on_url_changed(url.as_ref());
            }
            RendererEvent::Navigation(NavigationEvent::ProvisionalStarted) => {
                self.refresh_capabilities();
            }
            RendererEvent::Navigation(NavigationEvent::ProvisionalFailed { error })
            | RendererEvent::Navigation(NavigationEvent::Failed { error }) => {
                debug!(screen = self.id.short(), error = %error, "navigation failed");
                self.refresh_capabilities();
            }
            RendererEvent::Navigation(NavigationEvent::ContentProcessTerminated) => {
                self.recover_from_crash();
            }
            RendererEvent::Dialog(request) => {
                self.dialogs.present(request, presenter);
            }
            RendererEvent::NewWindow(request) => {
                if self.dialogs.open_window(request, stack) == NewWindowOutcome::Ignored {
                    debug!(screen = self.id.short(), "new-window request ignored");
                }
            }
        }
    }

    fn load_initial_page(&mut self) {
        match self.target_url.clone() {
            Some(url) => self.load_url(Some(url), None),
            None => {
                let address = self.settings.default_address.clone();
                self.load_address(Some(&address), None);
            }
        }
    }

    /// Navigation start and failure only re-read the capability flags.
    fn refresh_capabilities(&mut self) {
        let caps = Capabilities::of(&self.renderer);
        self.mirror.refresh_capabilities(caps);
    }

    fn recover_from_crash(&mut self) {
        if let Some(cap) = self.settings.crash_reload_cap {
            if self.crash_reloads >= cap {
                warn!(
                    screen = self.id.short(),
                    attempts = self.crash_reloads,
                    "content process keeps terminating; not reloading again"
                );
                return;
            }
        }
        self.crash_reloads += 1;
        warn!(
            screen = self.id.short(),
            attempt = self.crash_reloads,
            "content process terminated; reloading"
        );
        if let Err(e) = self.renderer.reload() {
            warn!(screen = self.id.short(), "reload failed: {e}");
        }
    }
}

impl<R: Renderer> Drop for ScreenController<R> {
    fn drop(&mut self) {
        self.destroy();
    }
}
