//! Navigation stack of screens.

use std::sync::Arc;
use std::time::Duration;

use hybrid_common::{ScreenError, ScreenId};
use tracing::{debug, info, warn};
use url::Url;

use crate::controller::ScreenController;
use crate::gesture::GesturePolicy;
use crate::modal::ModalPresenter;
use crate::renderer::{RendererConfig, RendererFactory};
use crate::settings::ScreenSettings;

/// Everything needed to construct a screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenSeed {
    /// Page to open first. The default page is used when absent.
    pub target_url: Option<Url>,
    /// Renderer configuration inherited from the screen that asked for
    /// this one. The stack's default configuration is used when absent.
    pub configuration: Option<RendererConfig>,
}

impl ScreenSeed {
    pub fn with_url(url: Url) -> Self {
        Self {
            target_url: Some(url),
            configuration: None,
        }
    }
}

/// Something screens can be pushed onto.
pub trait NavigationStack {
    fn push(&mut self, seed: ScreenSeed);
}

/// Collects pushes made while a screen is handling its events, so the
/// owning stack can build the new screens afterwards.
#[derive(Debug, Default)]
pub struct PushQueue {
    seeds: Vec<ScreenSeed>,
}

impl PushQueue {
    pub fn drain(&mut self) -> Vec<ScreenSeed> {
        std::mem::take(&mut self.seeds)
    }
}

impl NavigationStack for PushQueue {
    fn push(&mut self, seed: ScreenSeed) {
        self.seeds.push(seed);
    }
}

/// Owns the screens, top of stack last, and drives their appear and
/// disappear transitions.
pub struct ScreenStack<F: RendererFactory> {
    factory: F,
    settings: ScreenSettings,
    default_config: RendererConfig,
    gesture: Arc<dyn GesturePolicy>,
    screens: Vec<ScreenController<F::Renderer>>,
}

impl<F: RendererFactory> ScreenStack<F> {
    pub fn new(
        factory: F,
        settings: ScreenSettings,
        default_config: RendererConfig,
        gesture: Arc<dyn GesturePolicy>,
    ) -> Self {
        Self {
            factory,
            settings,
            default_config,
            gesture,
            screens: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn top(&self) -> Option<&ScreenController<F::Renderer>> {
        self.screens.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut ScreenController<F::Renderer>> {
        self.screens.last_mut()
    }

    pub fn screens(&self) -> impl Iterator<Item = &ScreenController<F::Renderer>> {
        self.screens.iter()
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Build a screen from `seed` and make it the visible one.
    pub fn push_screen(&mut self, seed: ScreenSeed) -> Result<ScreenId, ScreenError> {
        let config = seed
            .configuration
            .clone()
            .unwrap_or_else(|| self.default_config.clone());
        let renderer = self.factory.create(&config)?;

        if let Some(top) = self.screens.last_mut() {
            top.will_disappear();
        }

        let mut screen = ScreenController::new(
            renderer,
            seed,
            self.settings.clone(),
            Arc::clone(&self.gesture),
        );
        screen.view_did_load();
        screen.will_appear();
        let id = screen.id().clone();
        self.screens.push(screen);
        info!(screen = id.short(), depth = self.screens.len(), "screen pushed");
        Ok(id)
    }

    /// Remove the top screen. The root screen is never popped.
    pub fn pop(&mut self) -> bool {
        if self.screens.len() <= 1 {
            return false;
        }
        if let Some(mut top) = self.screens.pop() {
            top.will_disappear();
            top.destroy();
            info!(screen = top.id().short(), depth = self.screens.len(), "screen popped");
        }
        if let Some(top) = self.screens.last_mut() {
            top.will_appear();
        }
        true
    }

    /// Pop in response to the swipe-back gesture, if the gesture is
    /// currently allowed.
    pub fn pop_by_gesture(&mut self) -> bool {
        if !self.gesture.is_swipe_back_enabled() {
            debug!("swipe-back disabled; page handles back navigation");
            return false;
        }
        self.pop()
    }

    /// Pump every screen's events, then build any screens they asked for.
    /// Returns the number of events handled.
    pub fn pump(&mut self, presenter: &mut dyn ModalPresenter) -> usize {
        let mut queue = PushQueue::default();
        let mut handled = 0;
        for screen in self.screens.iter_mut() {
            handled += screen.pump(&mut queue, presenter);
        }
        for seed in queue.drain() {
            if let Err(e) = self.push_screen(seed) {
                warn!("could not open screen for new-window request: {e}");
            }
        }
        handled
    }

    /// Advance animations on every screen. Returns `true` if any changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.screens
            .iter_mut()
            .fold(false, |changed, screen| screen.tick(dt) || changed)
    }

    /// Forward a memory warning to every live screen.
    pub fn on_memory_warning(&mut self) {
        for screen in self.screens.iter_mut() {
            screen.on_memory_warning();
        }
    }

    /// Destroy every screen, top first.
    pub fn clear(&mut self) {
        while let Some(mut screen) = self.screens.pop() {
            screen.will_disappear();
            screen.destroy();
        }
    }
}
