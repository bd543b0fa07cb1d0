//! Toolbar surface: progress bar, back/forward buttons, modal overlay.

use std::sync::{Arc, Mutex};

use hybrid_screen::{ChromeState, Modal, ModalResponse};
use serde::Deserialize;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::ipc::{js_dispatch_message, IpcMessage, IPC_INIT_SCRIPT};

/// User input coming back from the toolbar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    Back,
    Forward,
    ModalResponse(ModalResponse),
}

#[derive(Deserialize)]
struct ModalReply {
    action: usize,
    #[serde(default)]
    text: Option<String>,
}

impl ToolbarAction {
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "toolbar.back" => Some(Self::Back),
            "toolbar.forward" => Some(Self::Forward),
            "modal.respond" => {
                let reply: ModalReply = serde_json::from_value(msg.payload.clone()).ok()?;
                Some(Self::ModalResponse(ModalResponse {
                    action: reply.action,
                    text: reply.text,
                }))
            }
            _ => None,
        }
    }
}

pub struct Toolbar {
    webview: WebView,
    actions: Arc<Mutex<Vec<ToolbarAction>>>,
}

impl Toolbar {
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        progress_height: u32,
    ) -> Result<Self, wry::Error> {
        let actions = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&actions);

        let webview = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_html(toolbar_html(progress_height))
            .with_ipc_handler(move |request| {
                let body = request.body();
                let Some(msg) = IpcMessage::from_json(body) else {
                    warn!(body_len = body.len(), "toolbar IPC rejected: invalid JSON");
                    return;
                };
                match ToolbarAction::from_ipc(&msg) {
                    Some(action) => {
                        debug!(?action, "toolbar action");
                        if let Ok(mut queue) = sink.lock() {
                            queue.push(action);
                        }
                    }
                    None => warn!(kind = %msg.kind, "unknown toolbar message"),
                }
            })
            .build_as_child(window)?;

        Ok(Self { webview, actions })
    }

    /// Take all actions the user performed since the last call.
    pub fn drain_actions(&self) -> Vec<ToolbarAction> {
        match self.actions.lock() {
            Ok(mut actions) => std::mem::take(&mut *actions),
            Err(_) => Vec::new(),
        }
    }

    pub fn render(&self, chrome: &ChromeState) -> Result<(), wry::Error> {
        self.dispatch("chrome", serde_json::to_value(chrome).unwrap_or_default())
    }

    pub fn show_modal(&self, modal: &Modal) -> Result<(), wry::Error> {
        self.dispatch("modal.show", modal_payload(modal))
    }

    pub fn hide_modal(&self) -> Result<(), wry::Error> {
        self.dispatch("modal.hide", serde_json::Value::Null)
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    fn dispatch(&self, kind: &str, payload: serde_json::Value) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, &payload))
    }
}

fn modal_payload(modal: &Modal) -> serde_json::Value {
    serde_json::json!({
        "title": modal.title,
        "message": modal.message,
        "actions": modal.actions,
        "has_field": modal.text_field.is_some(),
        "field_text": modal.text_field.clone().flatten().unwrap_or_default(),
    })
}

fn toolbar_html(progress_height: u32) -> String {
    TOOLBAR_HTML.replace("{{PROGRESS_HEIGHT}}", &progress_height.to_string())
}

const TOOLBAR_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; font: 15px -apple-system, system-ui, sans-serif; background: #f8f8f8; overflow: hidden; }
  #progress { position: absolute; top: 0; left: 0; height: {{PROGRESS_HEIGHT}}px; width: 0; background: #0a84ff; }
  #bar { display: flex; height: 100%; align-items: center; border-top: 1px solid #ddd; box-sizing: border-box; }
  #bar button { flex: 1; height: 100%; border: 0; background: none; font-size: 22px; color: #0a84ff; }
  #bar button:disabled { color: #c7c7cc; }
  #modal { display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.4); align-items: center; justify-content: center; }
  #modal .card { background: #fff; border-radius: 12px; width: 270px; text-align: center; overflow: hidden; }
  #modal h3 { margin: 16px 16px 0; font-size: 17px; }
  #modal p { margin: 8px 16px 16px; white-space: pre-wrap; }
  #modal input { width: calc(100% - 32px); margin: 0 16px 16px; box-sizing: border-box; }
  #actions { display: flex; border-top: 1px solid #ddd; }
  #actions button { flex: 1; padding: 11px; border: 0; background: none; font-size: 17px; color: #0a84ff; }
  #actions button.cancel { font-weight: 600; }
</style>
</head>
<body>
<div id="progress"></div>
<div id="bar">
  <button id="back" disabled>&#x2039;</button>
  <button id="forward" disabled>&#x203A;</button>
</div>
<div id="modal"><div class="card">
  <h3 id="modal-title"></h3>
  <p id="modal-message"></p>
  <input id="modal-field" type="text">
  <div id="actions"></div>
</div></div>
<script>
(function() {
  var ipc = window.hybrid.ipc;
  var $ = function(id) { return document.getElementById(id); };
  $('back').onclick = function() { ipc.send('toolbar.back'); };
  $('forward').onclick = function() { ipc.send('toolbar.forward'); };

  ipc.on('chrome', function(c) {
    $('back').disabled = !c.back_enabled;
    $('forward').disabled = !c.forward_enabled;
    $('progress').style.width = (c.progress.progress * 100) + '%';
    $('progress').style.opacity = c.progress.alpha;
  });

  ipc.on('modal.show', function(m) {
    $('modal-title').textContent = m.title;
    $('modal-title').style.display = m.title ? '' : 'none';
    $('modal-message').textContent = m.message;
    var field = $('modal-field');
    var hasField = m.has_field;
    field.style.display = hasField ? '' : 'none';
    field.value = m.field_text;
    var actions = $('actions');
    actions.innerHTML = '';
    m.actions.forEach(function(a, i) {
      var b = document.createElement('button');
      b.textContent = a.label;
      if (a.style === 'cancel') { b.className = 'cancel'; }
      b.onclick = function() {
        ipc.send('modal.respond', { action: i, text: hasField ? field.value : null });
      };
      actions.appendChild(b);
    });
    $('modal').style.display = 'flex';
    if (hasField) { field.focus(); }
  });

  ipc.on('modal.hide', function() { $('modal').style.display = 'none'; });
})();
</script>
</body>
</html>
"##;
