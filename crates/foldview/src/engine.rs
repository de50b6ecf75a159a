//! The scroll-synchronization and snap engine.

use std::time::Duration;

use ahash::HashSet;
use foldview_core::{DebounceTimer, ObservableValue, PaneKey, Subscription};

use crate::config::SyncConfig;
use crate::gesture::GestureFlags;
use crate::header::HeaderTracker;
use crate::nav::{NavigationState, TabRoute};
use crate::offsets::OffsetCache;
use crate::pane::PaneHooks;
use crate::registry::{PaneRegistry, ScrollHandle};
use crate::snap::snap_target;
use crate::tab_bar::TabPressEvent;

/// Coordinates one collapsible header across independently scrollable panes.
///
/// The focused pane's scroll events feed a single shared value that drives
/// the header translate; every pane's last offset is cached so that tab
/// switches never reveal a stale header position. Once scrolling settles
/// (trailing debounce, no active drag) the snap pass realigns every
/// registered pane to the chosen edge.
///
/// The engine is frame-driven: forward pane scroll and gesture events as
/// they happen and call [`tick`](Self::tick) once per frame so the settle
/// countdown can elapse. All state transitions run to completion inside
/// their entry point; there is no internal threading.
pub struct ScrollSync {
    config: SyncConfig,
    scroll_value: ObservableValue,
    offsets: OffsetCache,
    panes: PaneRegistry,
    header: HeaderTracker,
    debounce: DebounceTimer,
    flags: GestureFlags,
    snap_ready: bool,
    snapping: bool,
    active: Option<PaneKey>,
    scroll_disabled: HashSet<PaneKey>,
}

impl ScrollSync {
    /// Create an engine with the given configuration.
    pub fn new(config: SyncConfig) -> Self {
        let header = HeaderTracker::new(config.initial_header_height, config.tab_bar_height);
        let debounce = DebounceTimer::new(config.snap_timeout);
        Self {
            config,
            scroll_value: ObservableValue::new(0.0),
            offsets: OffsetCache::new(),
            panes: PaneRegistry::new(),
            header,
            debounce,
            flags: GestureFlags::default(),
            snap_ready: false,
            snapping: false,
            active: None,
            scroll_disabled: HashSet::default(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    // -- Navigation --

    /// Adopt the tab widget's navigation state.
    ///
    /// Push a snapshot in on every index change. A focus change re-runs the
    /// snap pass so the newly focused pane's offset becomes the alignment
    /// source for the others.
    pub fn set_navigation<R: TabRoute>(&mut self, nav: &NavigationState<R>) {
        self.set_active_pane(nav.active_key());
    }

    /// Focus a pane directly (`None` when no route is focused).
    pub fn set_active_pane(&mut self, key: Option<PaneKey>) {
        if self.active == key {
            return;
        }
        self.active = key;
        match key {
            Some(key) => tracing::debug!(%key, "focus changed"),
            None => tracing::debug!("focus cleared"),
        }
        self.evaluate_snap();
    }

    /// Currently focused pane.
    pub fn active_pane(&self) -> Option<PaneKey> {
        self.active
    }

    // -- Pane surface --

    /// Borrow the engine as seen by one pane.
    pub fn pane(&mut self, key: PaneKey) -> PaneHooks<'_> {
        PaneHooks::new(self, key)
    }

    /// Register a pane's scroll handle. First registration wins.
    pub fn register_scroll_handle(&mut self, key: PaneKey, handle: Box<dyn ScrollHandle>) -> bool {
        self.panes.register(key, handle)
    }

    /// Last cached offset for a pane, if any.
    pub fn pane_offset(&self, key: PaneKey) -> Option<f32> {
        self.offsets.get(key)
    }

    pub(crate) fn set_scroll_enabled(&mut self, key: PaneKey, enabled: bool) {
        if enabled {
            self.scroll_disabled.remove(&key);
        } else {
            self.scroll_disabled.insert(key);
        }
    }

    /// Scroll event from a pane.
    ///
    /// Only the focused pane's events are accepted: the shared value has one
    /// logical writer at a time. Publication to subscribers, the offset
    /// cache write, and the settle countdown restart ride this same call and
    /// must stay coupled, or settle timing would be measured against the
    /// wrong signal.
    pub fn on_scroll(&mut self, key: PaneKey, offset: f32) {
        if self.active != Some(key) {
            tracing::trace!(%key, offset, "scroll from non-focused pane dropped");
            return;
        }
        if self.scroll_disabled.contains(&key) {
            tracing::trace!(%key, offset, "scroll from disabled pane dropped");
            return;
        }
        self.scroll_value.set(offset);
        self.offsets.set(key, offset);
        self.debounce.arm();
    }

    // -- Gesture boundaries --

    /// The user's finger went down and started dragging.
    pub fn on_scroll_begin_drag(&mut self) {
        self.flags.insert(GestureFlags::DRAGGING);
    }

    /// The user's finger lifted.
    ///
    /// Re-arms the settle countdown: if the finger rested in place before
    /// lifting, no further scroll events arrive, and the snap must still
    /// happen.
    pub fn on_scroll_end_drag(&mut self) {
        self.flags.remove(GestureFlags::DRAGGING);
        self.debounce.arm();
    }

    /// Momentum scroll started after release.
    pub fn on_momentum_scroll_begin(&mut self) {
        self.flags.insert(GestureFlags::GLIDING);
    }

    /// Momentum scroll decelerated to a stop.
    pub fn on_momentum_scroll_end(&mut self) {
        self.flags.remove(GestureFlags::GLIDING);
    }

    /// Whether the focused pane is in momentum scroll.
    pub fn is_gliding(&self) -> bool {
        self.flags.is_gliding()
    }

    /// Current gesture flags.
    pub fn gesture_flags(&self) -> GestureFlags {
        self.flags
    }

    // -- Frame tick --

    /// Advance the settle countdown by the frame delta.
    ///
    /// When the countdown elapses with no active drag, the snap pass runs
    /// before this call returns. A countdown that elapses mid-drag is not
    /// rescheduled here; the end-drag handler re-arms it.
    pub fn tick(&mut self, dt: Duration) {
        if self.debounce.tick(dt) && !self.flags.is_dragging() {
            self.snap_ready = true;
        }
        if self.snap_ready {
            self.evaluate_snap();
        }
    }

    // -- Header --

    /// Feed the measured height of the header plus tab bar container.
    ///
    /// A committed height change re-runs the snap pass against the new
    /// collapse boundary.
    pub fn on_header_layout(&mut self, measured_total: f32) {
        if self.header.on_container_layout(measured_total) {
            self.evaluate_snap();
        }
    }

    /// Install the header-height change notification.
    pub fn set_on_header_height_change(&mut self, callback: impl FnMut() + 'static) {
        self.header.set_on_change(callback);
    }

    /// Current collapsible header height.
    pub fn header_height(&self) -> f32 {
        self.header.height()
    }

    /// Fixed tab bar height.
    pub fn tab_bar_height(&self) -> f32 {
        self.header.tab_bar_height()
    }

    /// Vertical space a pane must leave for the header plus tab bar.
    pub fn content_inset(&self) -> f32 {
        self.header.content_inset()
    }

    /// Header translate for the current shared scroll value.
    pub fn header_translate(&self) -> f32 {
        self.header.translate_for(self.scroll_value.get())
    }

    // -- Shared value --

    /// Current shared scroll value.
    pub fn scroll_value(&self) -> f32 {
        self.scroll_value.get()
    }

    /// Subscribe to shared scroll value writes.
    pub fn observe_scroll(&mut self, listener: impl FnMut(f32) + 'static) -> Subscription {
        self.scroll_value.subscribe(listener)
    }

    /// Detach a scroll subscription.
    pub fn unobserve_scroll(&mut self, token: Subscription) {
        self.scroll_value.unsubscribe(token);
    }

    // -- Snap configuration --

    /// Enable or disable edge snapping. A change re-runs the snap pass.
    pub fn set_disable_snap(&mut self, disable: bool) {
        if self.config.disable_snap == disable {
            return;
        }
        self.config.disable_snap = disable;
        self.evaluate_snap();
    }

    /// Change the snap threshold fraction (clamped to `0.0..=1.0`). A change
    /// re-runs the snap pass.
    pub fn set_snap_threshold(&mut self, threshold: f32) {
        let threshold = threshold.clamp(0.0, 1.0);
        if self.config.snap_threshold == threshold {
            return;
        }
        self.config.snap_threshold = threshold;
        self.evaluate_snap();
    }

    // -- Commands --

    /// Scroll every registered pane to the top, expanding the header.
    ///
    /// Animated only for the focused pane; used by pull-to-refresh style
    /// affordances.
    pub fn expand_header(&mut self) {
        self.drive_all_to(0.0);
    }

    /// Scroll every registered pane to the collapse boundary.
    pub fn collapse_header(&mut self) {
        self.drive_all_to(self.header.height());
    }

    fn drive_all_to(&mut self, target: f32) {
        let keys: Vec<PaneKey> = self.panes.keys().collect();
        for key in keys {
            let animated = self.active == Some(key);
            self.panes.reposition(key, target, animated);
            self.offsets.set(key, target);
        }
    }

    // -- Tab press gate --

    /// Run a tab press through the glide gate.
    ///
    /// Cancels the press's default action while the focused pane is gliding
    /// and suppression is enabled. The host's own handler runs either way
    /// and can inspect the outcome.
    pub fn handle_tab_press(&mut self, event: &mut TabPressEvent) {
        if self.flags.is_gliding() && self.config.prevent_tab_press_on_glide {
            tracing::debug!(key = %event.key(), "tab press suppressed during glide");
            event.prevent_default();
        }
    }

    // -- Snap pass --

    /// Realign every registered pane against the focused pane's offset.
    ///
    /// Readiness is cleared before anything else so repeated invocations
    /// with stale readiness cannot re-trigger, and a guard rejects re-entry
    /// while repositionings are being applied. Zero header height is a
    /// pass-through: there is no edge to snap to.
    fn evaluate_snap(&mut self) {
        self.snap_ready = false;
        if self.snapping {
            tracing::trace!("snap pass re-entered, skipping");
            return;
        }
        let Some(active) = self.active else {
            return;
        };
        let height = self.header.height();
        if height <= 0.0 {
            return;
        }

        self.snapping = true;
        let offset = self.offsets.get_or_initial(active);
        let target = snap_target(
            offset,
            height,
            self.config.snap_threshold,
            self.config.disable_snap,
        );
        tracing::debug!(?target, offset, height, "snap pass");

        let keys: Vec<PaneKey> = self.panes.keys().collect();
        for key in keys {
            let focused = key == active;
            match target {
                Some(target) => {
                    if self.config.disable_snap && focused {
                        continue;
                    }
                    if self.offsets.get_or_initial(key) != target {
                        self.panes.reposition(key, target, focused);
                        self.offsets.set(key, target);
                    }
                }
                // The focused pane is past the header; pre-position every
                // lagging pane as already collapsed so a tab switch cannot
                // reveal an expanded header over scrolled content.
                None => {
                    if !focused && self.offsets.get_or_initial(key) < height {
                        self.panes.reposition(key, height, false);
                        self.offsets.set(key, height);
                    }
                }
            }
        }
        self.snapping = false;
    }

    // -- Teardown --

    /// Drop all scroll subscriptions and cancel any pending settle check.
    ///
    /// Unconditional and idempotent: safe with no subscribers attached and
    /// safe to call twice.
    pub fn teardown(&mut self) {
        self.scroll_value.detach_all();
        self.debounce.cancel();
        self.snap_ready = false;
    }
}

impl Drop for ScrollSync {
    fn drop(&mut self) {
        self.teardown();
    }
}
