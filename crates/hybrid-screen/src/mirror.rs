//! Navigation state mirror.
//!
//! Keeps the toolbar (progress bar, back/forward buttons, title) and the
//! swipe-back gesture in step with the renderer's latest callbacks.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::gesture::GesturePolicy;
use crate::renderer::Renderer;

/// Back/forward capability flags, read from the renderer on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl Capabilities {
    pub fn of(renderer: &dyn Renderer) -> Self {
        Self {
            can_go_back: renderer.can_go_back(),
            can_go_forward: renderer.can_go_forward(),
        }
    }
}

/// Thin progress bar that fades out once a load completes.
///
/// Progress updates apply immediately. Reaching 1.0 starts a fade of
/// fixed duration driven by [`ProgressIndicator::advance`]; when the bar
/// is fully transparent its progress snaps back to 0 so the next load
/// does not flash a full bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressIndicator {
    progress: f32,
    alpha: f32,
    #[serde(skip)]
    fade_duration: Duration,
    #[serde(skip)]
    fade_elapsed: Option<Duration>,
}

impl ProgressIndicator {
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            progress: 0.0,
            alpha: 1.0,
            fade_duration,
            fade_elapsed: None,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_fading(&self) -> bool {
        self.fade_elapsed.is_some()
    }

    pub fn set_progress(&mut self, value: f64) {
        if !value.is_finite() {
            debug!(value, "ignoring non-finite progress");
            return;
        }
        let value = value.clamp(0.0, 1.0) as f32;
        self.progress = value;

        if value >= 1.0 {
            if self.fade_elapsed.is_none() {
                self.fade_elapsed = Some(Duration::ZERO);
                if self.fade_duration.is_zero() {
                    self.finish_fade();
                }
            }
        } else {
            // A new load supersedes any fade still running.
            self.fade_elapsed = None;
            self.alpha = 1.0;
        }
    }

    /// Advance the fade animation. Returns `true` if anything changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(elapsed) = self.fade_elapsed else {
            return false;
        };
        let elapsed = elapsed + dt;
        if elapsed >= self.fade_duration {
            self.finish_fade();
        } else {
            self.fade_elapsed = Some(elapsed);
            self.alpha = 1.0 - elapsed.as_secs_f32() / self.fade_duration.as_secs_f32();
        }
        true
    }

    fn finish_fade(&mut self) {
        self.fade_elapsed = None;
        self.alpha = 0.0;
        self.progress = 0.0;
    }
}

/// Latest navigation state reported by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NavigationSnapshot {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_loading: bool,
    pub progress: f64,
    pub host: Option<String>,
}

/// What the screen's widgets currently show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub title: Option<String>,
    pub progress: ProgressIndicator,
}

pub struct NavigationMirror {
    snapshot: NavigationSnapshot,
    chrome: ChromeState,
    gesture: Arc<dyn GesturePolicy>,
    /// Only the visible screen may write the shared gesture.
    drives_gesture: bool,
}

impl NavigationMirror {
    pub fn new(fade_duration: Duration, gesture: Arc<dyn GesturePolicy>) -> Self {
        Self {
            snapshot: NavigationSnapshot::default(),
            chrome: ChromeState {
                back_enabled: false,
                forward_enabled: false,
                title: None,
                progress: ProgressIndicator::new(fade_duration),
            },
            gesture,
            drives_gesture: false,
        }
    }

    /// Hand the swipe-back gesture to (or take it from) this mirror.
    pub fn set_drives_gesture(&mut self, drives: bool) {
        self.drives_gesture = drives;
    }

    pub fn snapshot(&self) -> &NavigationSnapshot {
        &self.snapshot
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn on_progress(&mut self, value: f64) {
        self.snapshot.progress = value;
        self.chrome.progress.set_progress(value);
    }

    /// Started and finished are handled the same way: re-read the
    /// capability flags.
    pub fn on_loading_changed(&mut self, loading: bool, caps: Capabilities) {
        self.snapshot.is_loading = loading;
        self.refresh_capabilities(caps);
    }

    pub fn on_url_changed(&mut self, url: Option<&Url>) {
        let Some(url) = url else {
            return;
        };
        let Some(host) = url.host_str() else {
            debug!(url = %url, "url has no host; keeping title");
            return;
        };
        self.snapshot.host = Some(host.to_string());
        self.chrome.title = Some(host.to_string());
    }

    /// Mirror back/forward flags into the buttons and, while this mirror
    /// drives it, the gesture. The swipe-back gesture is enabled only
    /// when the page cannot go back.
    pub fn refresh_capabilities(&mut self, caps: Capabilities) {
        self.snapshot.can_go_back = caps.can_go_back;
        self.snapshot.can_go_forward = caps.can_go_forward;
        self.chrome.back_enabled = caps.can_go_back;
        self.chrome.forward_enabled = caps.can_go_forward;
        if self.drives_gesture {
            self.gesture.set_swipe_back_enabled(!caps.can_go_back);
        }
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.chrome.progress.advance(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::SwipeBackGate;

    const FADE: Duration = Duration::from_millis(500);

    fn mirror() -> (NavigationMirror, Arc<SwipeBackGate>) {
        let gate = Arc::new(SwipeBackGate::new());
        let mut m = NavigationMirror::new(FADE, gate.clone());
        m.set_drives_gesture(true);
        (m, gate)
    }

    #[test]
    fn partial_progress_is_shown_at_full_alpha() {
        for p in [0.0, 0.1, 0.5, 0.99] {
            let mut bar = ProgressIndicator::new(FADE);
            bar.set_progress(p);
            assert!((bar.progress() - p as f32).abs() < f32::EPSILON);
            assert_eq!(bar.alpha(), 1.0);
            assert!(!bar.is_fading());
        }
    }

    #[test]
    fn complete_progress_fades_then_resets() {
        let mut bar = ProgressIndicator::new(FADE);
        bar.set_progress(0.4);
        bar.set_progress(1.0);
        assert!(bar.is_fading());
        assert_eq!(bar.progress(), 1.0);

        assert!(bar.advance(Duration::from_millis(250)));
        assert!((bar.alpha() - 0.5).abs() < 1e-3);
        assert_eq!(bar.progress(), 1.0);

        assert!(bar.advance(Duration::from_millis(250)));
        assert_eq!(bar.alpha(), 0.0);
        assert_eq!(bar.progress(), 0.0);
        assert!(!bar.is_fading());
        assert!(!bar.advance(Duration::from_millis(16)));
    }

    #[test]
    fn next_load_after_fade_is_visible_again() {
        let mut bar = ProgressIndicator::new(FADE);
        bar.set_progress(1.0);
        bar.advance(FADE);
        bar.set_progress(0.2);
        assert_eq!(bar.alpha(), 1.0);
        assert!((bar.progress() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn new_load_during_fade_cancels_reset() {
        let mut bar = ProgressIndicator::new(FADE);
        bar.set_progress(1.0);
        bar.advance(Duration::from_millis(100));
        bar.set_progress(0.3);
        assert!(!bar.is_fading());
        bar.advance(FADE);
        assert!((bar.progress() - 0.3).abs() < f32::EPSILON);
        assert_eq!(bar.alpha(), 1.0);
    }

    #[test]
    fn repeated_completion_does_not_restart_fade() {
        let mut bar = ProgressIndicator::new(FADE);
        bar.set_progress(1.0);
        bar.advance(Duration::from_millis(400));
        bar.set_progress(1.0);
        bar.advance(Duration::from_millis(100));
        assert_eq!(bar.progress(), 0.0);
    }

    #[test]
    fn zero_fade_resets_immediately() {
        let mut bar = ProgressIndicator::new(Duration::ZERO);
        bar.set_progress(1.0);
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(bar.alpha(), 0.0);
    }

    #[test]
    fn out_of_range_progress_is_clamped_and_nan_ignored() {
        let mut bar = ProgressIndicator::new(FADE);
        bar.set_progress(-0.5);
        assert_eq!(bar.progress(), 0.0);
        bar.set_progress(0.6);
        bar.set_progress(f64::NAN);
        assert!((bar.progress() - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn capabilities_drive_buttons_and_gesture() {
        for can_go_back in [false, true] {
            for can_go_forward in [false, true] {
                let (mut m, gate) = mirror();
                m.on_loading_changed(
                    true,
                    Capabilities {
                        can_go_back,
                        can_go_forward,
                    },
                );
                assert_eq!(m.chrome().back_enabled, can_go_back);
                assert_eq!(m.chrome().forward_enabled, can_go_forward);
                assert_eq!(gate.is_swipe_back_enabled(), !can_go_back);
                assert!(m.snapshot().is_loading);
            }
        }
    }

    #[test]
    fn finished_loading_requeries_capabilities() {
        let (mut m, gate) = mirror();
        m.on_loading_changed(true, Capabilities::default());
        m.on_loading_changed(
            false,
            Capabilities {
                can_go_back: true,
                can_go_forward: false,
            },
        );
        assert!(!m.snapshot().is_loading);
        assert!(m.chrome().back_enabled);
        assert!(!gate.is_swipe_back_enabled());
    }

    #[test]
    fn hidden_mirror_leaves_gesture_alone() {
        let (mut m, gate) = mirror();
        m.set_drives_gesture(false);
        m.refresh_capabilities(Capabilities {
            can_go_back: true,
            can_go_forward: false,
        });
        assert!(m.chrome().back_enabled);
        assert!(gate.is_swipe_back_enabled());
    }

    #[test]
    fn url_host_becomes_title() {
        let (mut m, _) = mirror();
        let url = Url::parse("https://m.example.com/a/b?c=d").unwrap();
        m.on_url_changed(Some(&url));
        assert_eq!(m.chrome().title.as_deref(), Some("m.example.com"));
        assert_eq!(m.snapshot().host.as_deref(), Some("m.example.com"));
    }

    #[test]
    fn url_without_host_keeps_title() {
        let (mut m, _) = mirror();
        m.on_url_changed(Url::parse("https://example.com").ok().as_ref());
        m.on_url_changed(Url::parse("about:blank").ok().as_ref());
        m.on_url_changed(Url::parse("data:text/html,hi").ok().as_ref());
        m.on_url_changed(None);
        assert_eq!(m.chrome().title.as_deref(), Some("example.com"));
    }

    #[test]
    fn snapshot_tracks_latest_progress() {
        let (mut m, _) = mirror();
        m.on_progress(0.2);
        m.on_progress(0.7);
        assert_eq!(m.snapshot().progress, 0.7);
        assert!(!m.tick(Duration::from_millis(16)));
        m.on_progress(1.0);
        assert!(m.tick(Duration::from_millis(16)));
    }
}
