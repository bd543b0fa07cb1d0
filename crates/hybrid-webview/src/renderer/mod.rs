//! `Renderer` implementation over a wry child WebView.
//!
//! wry reports page-load start/finish, new-window requests and nothing
//! else, so this renderer fills in the rest:
//! - progress is synthesized: a small value on start, 1.0 on finish
//! - back/forward capability comes from [`History`]
//! - stop/reload/back/forward are issued as page scripts
//!
//! Script dialogs (`alert`, `confirm`, `prompt`) and content-process
//! crashes are not surfaced by wry; the engine handles dialogs with its
//! own UI.

use std::sync::{Arc, Mutex, MutexGuard};

use hybrid_common::ScreenError;
use hybrid_screen::{
    EventSink, LoadRequest, PropertyChange, PropertyHub, Renderer, RendererConfig,
};
use tracing::debug;
use url::Url;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::history::History;
use crate::request::cache_headers;

mod factory;
mod handlers;

pub use factory::WryRendererFactory;

/// Progress reported when a page starts loading.
pub(crate) const STARTED_PROGRESS: f64 = 0.1;

#[derive(Default)]
pub(crate) struct PageState {
    pub(crate) history: History,
    pub(crate) loading: bool,
    pub(crate) url: Option<Url>,
    pub(crate) sink: Option<EventSink>,
}

impl PageState {
    /// A navigation started at `url`. Returns the property changes to emit.
    pub(crate) fn started(&mut self, url: &str) -> Vec<PropertyChange> {
        let parsed = Url::parse(url).ok();
        self.loading = true;
        self.history.commit(url);
        self.url = parsed.clone();
        vec![
            PropertyChange::Loading(true),
            PropertyChange::Progress(STARTED_PROGRESS),
            PropertyChange::Url(parsed),
        ]
    }

    /// The page at `url` finished loading, possibly after redirects.
    pub(crate) fn finished(&mut self, url: &str) -> Vec<PropertyChange> {
        let parsed = Url::parse(url).ok();
        self.loading = false;
        let mut changes = vec![PropertyChange::Progress(1.0), PropertyChange::Loading(false)];
        if self.url != parsed {
            self.history.replace_current(url);
            self.url = parsed.clone();
            changes.push(PropertyChange::Url(parsed));
        }
        changes
    }

    /// Loading was cut short. The bar completes and fades like a finished
    /// load so it does not stay frozen at a partial value.
    pub(crate) fn stopped(&mut self) -> Vec<PropertyChange> {
        if !std::mem::replace(&mut self.loading, false) {
            return Vec::new();
        }
        vec![PropertyChange::Progress(1.0), PropertyChange::Loading(false)]
    }
}

pub struct WryRenderer {
    webview: WebView,
    page: Arc<Mutex<PageState>>,
    hub: PropertyHub,
    config: RendererConfig,
}

impl WryRenderer {
    /// Create a child WebView inside `window`, positioned at `bounds`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: RendererConfig,
    ) -> Result<Self, wry::Error> {
        let page = Arc::new(Mutex::new(PageState::default()));
        let hub = PropertyHub::new();

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_back_forward_navigation_gestures(config.back_forward_gestures);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&page), hub.clone());
        builder = Self::attach_new_window_handler(builder, Arc::clone(&page), config.clone());

        let webview = builder.build_as_child(window)?;
        debug!("renderer webview created");

        Ok(Self {
            webview,
            page,
            hub,
            config,
        })
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    fn page(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn script(&self, js: &str) -> Result<(), ScreenError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ScreenError::Renderer(e.to_string()))
    }
}

impl Renderer for WryRenderer {
    fn load(&mut self, request: LoadRequest) -> Result<(), ScreenError> {
        if let Some(timeout) = request.options.timeout {
            debug!(?timeout, "request timeouts are left to the engine");
        }
        let headers = cache_headers(request.options.cache_policy);
        self.webview
            .load_url_with_headers(request.url.as_str(), headers)
            .map_err(|e| ScreenError::Renderer(e.to_string()))
    }

    fn stop(&mut self) -> Result<(), ScreenError> {
        self.script("window.stop();")?;
        let changes = self.page().stopped();
        for change in changes {
            self.hub.emit(change);
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ScreenError> {
        self.page().history.begin_reload();
        self.script("location.reload();")
    }

    fn go_back(&mut self) -> Result<(), ScreenError> {
        if !self.page().history.begin_back() {
            return Ok(());
        }
        self.script("history.back();")
    }

    fn go_forward(&mut self) -> Result<(), ScreenError> {
        if !self.page().history.begin_forward() {
            return Ok(());
        }
        self.script("history.forward();")
    }

    fn can_go_back(&self) -> bool {
        self.page().history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.page().history.can_go_forward()
    }

    fn is_loading(&self) -> bool {
        self.page().loading
    }

    fn current_url(&self) -> Option<Url> {
        self.page().url.clone()
    }

    fn properties(&self) -> &PropertyHub {
        &self.hub
    }

    fn set_event_sink(&mut self, sink: Option<EventSink>) {
        self.page().sink = sink;
    }

    fn configuration(&self) -> &RendererConfig {
        &self.config
    }
}
