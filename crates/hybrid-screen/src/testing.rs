//! Recording fakes for controller and stack tests.

use std::sync::{Arc, Mutex};

use hybrid_common::ScreenError;
use url::Url;

use crate::dialog::{DialogRequest, NewWindowRequest};
use crate::events::{EventSink, NavigationEvent, PropertyChange, RendererEvent};
use crate::modal::{Modal, ModalCallback, ModalPresenter, ModalResponse};
use crate::renderer::{Renderer, RendererConfig, RendererFactory};
use crate::request::LoadRequest;
use crate::subscription::PropertyHub;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(LoadRequest),
    Stop,
    Reload,
    GoBack,
    GoForward,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    can_go_back: bool,
    can_go_forward: bool,
    loading: bool,
    url: Option<Url>,
    sink: Option<EventSink>,
}

/// Renderer double. Clones share state, so a test can keep one clone
/// while the screen owns another.
#[derive(Clone)]
pub struct FakeRenderer {
    state: Arc<Mutex<FakeState>>,
    hub: PropertyHub,
    config: RendererConfig,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::with_config(RendererConfig::default())
    }

    pub fn with_config(config: RendererConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState::default())),
            hub: PropertyHub::new(),
            config,
        }
    }

    pub fn set_capabilities(&self, can_go_back: bool, can_go_forward: bool) {
        let mut state = self.state.lock().unwrap();
        state.can_go_back = can_go_back;
        state.can_go_forward = can_go_forward;
    }

    pub fn emit(&self, change: PropertyChange) {
        {
            let mut state = self.state.lock().unwrap();
            match &change {
                PropertyChange::Loading(l) => state.loading = *l,
                PropertyChange::Url(u) => state.url = u.clone(),
                PropertyChange::Progress(_) => {}
            }
        }
        self.hub.emit(change);
    }

    pub fn raise(&self, event: NavigationEvent) {
        self.push(RendererEvent::Navigation(event));
    }

    pub fn raise_dialog(&self, request: DialogRequest) {
        self.push(RendererEvent::Dialog(request));
    }

    pub fn raise_new_window(&self, request: NewWindowRequest) {
        self.push(RendererEvent::NewWindow(request));
    }

    pub fn has_sink(&self) -> bool {
        self.state.lock().unwrap().sink.is_some()
    }

    pub fn loads(&self) -> Vec<LoadRequest> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }

    fn push(&self, event: RendererEvent) {
        let sink = self.state.lock().unwrap().sink.clone();
        if let Some(sink) = sink {
            sink.push(event);
        }
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl Renderer for FakeRenderer {
    fn load(&mut self, request: LoadRequest) -> Result<(), ScreenError> {
        self.record(Call::Load(request));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), ScreenError> {
        self.record(Call::Stop);
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ScreenError> {
        self.record(Call::Reload);
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), ScreenError> {
        self.record(Call::GoBack);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), ScreenError> {
        self.record(Call::GoForward);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.state.lock().unwrap().can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.state.lock().unwrap().can_go_forward
    }

    fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    fn current_url(&self) -> Option<Url> {
        self.state.lock().unwrap().url.clone()
    }

    fn properties(&self) -> &PropertyHub {
        &self.hub
    }

    fn set_event_sink(&mut self, sink: Option<EventSink>) {
        self.state.lock().unwrap().sink = sink;
    }

    fn configuration(&self) -> &RendererConfig {
        &self.config
    }
}

/// Factory that hands out fakes and remembers them.
#[derive(Default)]
pub struct FakeFactory {
    pub created: Vec<FakeRenderer>,
    pub fail_next: bool,
}

impl RendererFactory for FakeFactory {
    type Renderer = FakeRenderer;

    fn create(&mut self, config: &RendererConfig) -> Result<FakeRenderer, ScreenError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(ScreenError::Renderer("factory failure".into()));
        }
        let renderer = FakeRenderer::with_config(config.clone());
        self.created.push(renderer.clone());
        Ok(renderer)
    }
}

/// Presenter that keeps modals until the test answers them.
#[derive(Default)]
pub struct RecordingPresenter {
    pending: Vec<(Modal, ModalCallback)>,
    presented: usize,
}

impl RecordingPresenter {
    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn last_modal(&self) -> Option<&Modal> {
        self.pending.last().map(|(m, _)| m)
    }

    /// Answer the most recent modal.
    pub fn respond(&mut self, response: ModalResponse) {
        let (_, callback) = self.pending.pop().expect("no modal to respond to");
        callback(response);
    }
}

impl ModalPresenter for RecordingPresenter {
    fn present(&mut self, modal: Modal, on_dismiss: ModalCallback) {
        self.presented += 1;
        self.pending.push((modal, on_dismiss));
    }
}
