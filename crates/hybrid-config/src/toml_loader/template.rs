/// The default TOML config content, with every option commented out.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Hybrid Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[screen]
# default_url = "https://www.naver.com"
# progress_fade_ms = 500     # 0-10000
# progress_bar_height = 3    # 1-20
# crash_reload_limit = 5     # 0 = reload forever

[load]
# cache_policy = "protocol_default"   # reload_ignoring_cache | return_cache_else_load | return_cache_only
# timeout_secs = 0                    # 0 = platform default

[dialog]
# title = ""
# confirm_label = "OK"
# cancel_label = "Cancel"

[webview]
# user_agent = "Hybrid/0.1"
# devtools = false
# back_forward_gestures = true
# autoplay = false
# clipboard = true

[window]
# title = "Hybrid"
# width = 430
# height = 860
# toolbar_height = 44

[logging]
# level = "hybrid=info"
"##
}
