//! Engine configuration.

use std::time::Duration;

/// Default tab bar height in pixels.
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 49.0;

/// Default fraction of the header height below which settled panes snap open.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.5;

/// Default quiet period with no scroll activity before a settle check fires.
pub const DEFAULT_SNAP_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for [`ScrollSync`](crate::ScrollSync).
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Header height assumed before the first layout measurement, in pixels.
    pub initial_header_height: f32,
    /// Fixed tab bar height subtracted from container measurements, in pixels.
    pub tab_bar_height: f32,
    /// When set, the focused pane is never forced to an edge on settle;
    /// non-focused panes are still aligned to its raw offset.
    pub disable_snap: bool,
    /// Fraction of the header height at or below which the snap target is the
    /// top. Above it, the target is the collapse boundary.
    pub snap_threshold: f32,
    /// Quiet period with no scroll activity before a snap evaluation.
    pub snap_timeout: Duration,
    /// Swallow tab presses while the focused pane is in momentum scroll.
    pub prevent_tab_press_on_glide: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            initial_header_height: 0.0,
            tab_bar_height: DEFAULT_TAB_BAR_HEIGHT,
            disable_snap: false,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            snap_timeout: DEFAULT_SNAP_TIMEOUT,
            prevent_tab_press_on_glide: true,
        }
    }
}
