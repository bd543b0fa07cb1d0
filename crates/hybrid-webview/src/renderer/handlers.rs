use std::sync::{Arc, Mutex};

use hybrid_screen::{NavigationEvent, NewWindowRequest, PropertyHub, RendererConfig, RendererEvent};
use tracing::debug;
use url::Url;
use wry::{PageLoadEvent, WebViewBuilder};

use super::{PageState, WryRenderer};

impl WryRenderer {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        page: Arc<Mutex<PageState>>,
        hub: PropertyHub,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let event_label = match event {
                PageLoadEvent::Started => "Started",
                PageLoadEvent::Finished => "Finished",
            };
            debug!(event = event_label, url = %url, "page load");

            let (sink, changes) = {
                let Ok(mut page) = page.lock() else {
                    return;
                };
                match event {
                    PageLoadEvent::Started => (page.sink.clone(), page.started(&url)),
                    PageLoadEvent::Finished => (None, page.finished(&url)),
                }
            };

            if let Some(sink) = sink {
                sink.push(NavigationEvent::ProvisionalStarted);
            }
            for change in changes {
                hub.emit(change);
            }
        })
    }

    /// New-window requests never get a surface here: the screen pushes
    /// a new one instead.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        page: Arc<Mutex<PageState>>,
        config: RendererConfig,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(url = %url, "new window requested");
            let sink = page.lock().ok().and_then(|p| p.sink.clone());
            if let Some(sink) = sink {
                sink.push(RendererEvent::NewWindow(NewWindowRequest {
                    url: Url::parse(&url).ok(),
                    target_frame: None,
                    configuration: config.clone(),
                }));
            }
            false
        })
    }
}
