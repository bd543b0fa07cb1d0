//! IPC between Rust and the toolbar WebView.
//!
//! - **JS -> Rust**: the page calls `window.hybrid.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` to the WebView's IPC handler.
//! - **Rust -> JS**: Rust evaluates `window.hybrid.ipc._dispatch(kind, payload)`.

use serde::{Deserialize, Serialize};

/// A message from the toolbar page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from the raw `postMessage` body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Installed into the toolbar WebView before its page runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.hybrid = window.hybrid || {};
    window.hybrid.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Build the JS that dispatches `kind` with `payload` to the page.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.hybrid.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
