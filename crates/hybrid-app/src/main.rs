mod app_state;
mod cli;

use std::path::Path;

use hybrid_common::ConfigError;
use hybrid_config::HybridConfig;
use hybrid_screen::normalize_address;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn load_config(path: Option<&str>) -> Result<HybridConfig, ConfigError> {
    match path {
        Some(path) => hybrid_config::load_config_from(Path::new(path)),
        None => hybrid_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    // Config first, so its log level can seed the filter
    let (config, config_error) = match load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (HybridConfig::default(), Some(e)),
    };

    // Initialize logging: --log-level, then [logging] level
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    let directive: Directive = log_directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Hybrid v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!("Config loaded (default url: {})", config.screen.default_url);

    let initial_url = args.url.as_deref().and_then(|address| {
        normalize_address(address)
            .inspect_err(|e| tracing::warn!("Ignoring start address: {e}"))
            .ok()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::HybridApp::new(config, initial_url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
