//! Per-pane engine surface and the optional direction-cue affordance.

use foldview_core::PaneKey;

use crate::engine::ScrollSync;
use crate::registry::ScrollHandle;

/// Everything a pane needs from the engine, scoped to its own key.
///
/// Hand one of these to a pane when wiring its scroll view: it forwards the
/// pane's scroll and gesture events into the engine and reads shared state
/// back out. The dependency is explicit at the call site instead of being
/// threaded through an ambient context.
pub struct PaneHooks<'a> {
    sync: &'a mut ScrollSync,
    key: PaneKey,
}

impl<'a> PaneHooks<'a> {
    pub(crate) fn new(sync: &'a mut ScrollSync, key: PaneKey) -> Self {
        Self { sync, key }
    }

    /// This pane's key.
    pub fn key(&self) -> PaneKey {
        self.key
    }

    /// Whether this pane is the focused one.
    pub fn is_active(&self) -> bool {
        self.sync.active_pane() == Some(self.key)
    }

    /// Current shared scroll value.
    pub fn scroll_value(&self) -> f32 {
        self.sync.scroll_value()
    }

    /// Current collapsible header height.
    pub fn header_height(&self) -> f32 {
        self.sync.header_height()
    }

    /// Fixed tab bar height.
    pub fn tab_bar_height(&self) -> f32 {
        self.sync.tab_bar_height()
    }

    /// Vertical space this pane must leave for the header plus tab bar.
    pub fn content_inset(&self) -> f32 {
        self.sync.content_inset()
    }

    /// Register this pane's scroll handle. First registration wins.
    pub fn register_scroll_handle(&mut self, handle: Box<dyn ScrollHandle>) -> bool {
        self.sync.register_scroll_handle(self.key, handle)
    }

    /// Suppress or accept this pane's scroll events.
    ///
    /// Hosts whose scroll views emit a synthetic scroll event on mount can
    /// keep the pane disabled until its first layout. Default: enabled.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.sync.set_scroll_enabled(self.key, enabled);
    }

    /// Forward a scroll event from this pane.
    pub fn on_scroll(&mut self, offset: f32) {
        self.sync.on_scroll(self.key, offset);
    }

    /// Forward the begin-drag gesture boundary.
    pub fn on_scroll_begin_drag(&mut self) {
        self.sync.on_scroll_begin_drag();
    }

    /// Forward the end-drag gesture boundary.
    pub fn on_scroll_end_drag(&mut self) {
        self.sync.on_scroll_end_drag();
    }

    /// Forward the momentum-begin gesture boundary.
    pub fn on_momentum_scroll_begin(&mut self) {
        self.sync.on_momentum_scroll_begin();
    }

    /// Forward the momentum-end gesture boundary.
    pub fn on_momentum_scroll_end(&mut self) {
        self.sync.on_momentum_scroll_end();
    }
}

/// Cue emitted by [`DirectionCue`] when a pane's scroll direction crosses
/// the top of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCue {
    /// The user scrolled up into the top; the header could expand.
    Expand,
    /// The user scrolled back down after the top; the header could collapse.
    Collapse,
}

/// Optional pane-level affordance: watch one pane's offsets and suggest
/// header transitions from the scroll direction.
///
/// An upward scroll reaching the top primes the tracker and emits
/// [`HeaderCue::Expand`] once; scrolling down again emits
/// [`HeaderCue::Collapse`] and re-arms. Layered on top of the engine; cues
/// never feed the snap pass, the host decides whether to act on them.
#[derive(Debug, Default)]
pub struct DirectionCue {
    prev: f32,
    primed: bool,
}

impl DirectionCue {
    /// Create a tracker starting at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll offset; returns a cue when one fires.
    pub fn on_scroll(&mut self, offset: f32) -> Option<HeaderCue> {
        let cue = if offset <= 0.0 && self.prev > offset && !self.primed {
            self.primed = true;
            Some(HeaderCue::Expand)
        } else if offset > 0.0 && self.primed {
            self.primed = false;
            Some(HeaderCue::Collapse)
        } else {
            None
        };
        self.prev = offset;
        cue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward_scroll_to_top_emits_expand_once() {
        let mut cue = DirectionCue::new();

        assert_eq!(cue.on_scroll(20.0), None);
        assert_eq!(cue.on_scroll(5.0), None);
        assert_eq!(cue.on_scroll(0.0), Some(HeaderCue::Expand));
        assert_eq!(cue.on_scroll(-2.0), None); // still primed, no repeat
    }

    #[test]
    fn test_scrolling_down_after_top_emits_collapse_and_rearms() {
        let mut cue = DirectionCue::new();
        cue.on_scroll(10.0);
        cue.on_scroll(0.0);

        assert_eq!(cue.on_scroll(15.0), Some(HeaderCue::Collapse));
        assert_eq!(cue.on_scroll(0.0), Some(HeaderCue::Expand)); // re-armed
    }

    #[test]
    fn test_resting_at_top_emits_nothing() {
        let mut cue = DirectionCue::new();
        assert_eq!(cue.on_scroll(0.0), None);
        assert_eq!(cue.on_scroll(0.0), None);
    }
}
