//! Header height tracking and the collapse translate mapping.

use foldview_core::Interpolation;

/// Callback invoked just before a height change is committed, so the host
/// can stage its own layout transition.
pub type HeightChangeFn = Box<dyn FnMut()>;

/// Tracks the measured header height and the translate mapping derived from
/// it.
///
/// Layout reports arrive as the total height of the header plus tab bar
/// container; the fixed tab bar height is subtracted to get the collapsible
/// part. Updates are committed only when the one-decimal rounded value
/// moves, which keeps sub-0.05 floating point layout noise from churning the
/// translate mapping.
pub struct HeaderTracker {
    height: f32,
    tab_bar_height: f32,
    translate: Interpolation,
    on_change: Option<HeightChangeFn>,
}

impl HeaderTracker {
    /// Create a tracker with an assumed initial height.
    pub fn new(initial_height: f32, tab_bar_height: f32) -> Self {
        Self {
            height: initial_height,
            tab_bar_height,
            translate: Self::build_translate(initial_height),
            on_change: None,
        }
    }

    /// Install the height-change notification.
    pub fn set_on_change(&mut self, callback: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Current collapsible header height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Fixed tab bar height.
    pub fn tab_bar_height(&self) -> f32 {
        self.tab_bar_height
    }

    /// Vertical space a pane must leave for the header plus tab bar.
    pub fn content_inset(&self) -> f32 {
        self.height + self.tab_bar_height
    }

    /// Feed a layout measurement of the header plus tab bar container.
    ///
    /// Returns whether a new height was committed. On commit the change
    /// notification fires first, then the translate mapping is rebuilt as
    /// `[0, h] -> [0, -h]`, clamped past the collapse boundary.
    pub fn on_container_layout(&mut self, measured_total: f32) -> bool {
        let candidate = measured_total - self.tab_bar_height;
        if round1(candidate) == round1(self.height) {
            return false;
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
        tracing::debug!(height = candidate, previous = self.height, "header height changed");
        self.height = candidate;
        self.translate = Self::build_translate(candidate);
        true
    }

    /// Header translate for a scroll offset.
    ///
    /// Scrolling past the header does not translate it further; negative
    /// offsets (overscroll bounce) pull it down.
    pub fn translate_for(&self, offset: f32) -> f32 {
        self.translate.map(offset)
    }

    fn build_translate(height: f32) -> Interpolation {
        if height <= 0.0 {
            return Interpolation::constant(0.0);
        }
        Interpolation::new(vec![(0.0, 0.0), (height, -height)]).clamp_right(true)
    }
}

/// One-decimal rounding used for the height comparison tolerance.
fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
