//! Tab bar collaborator surfaces: press gating and indicator placement.
//!
//! The tab bar itself is rendered by the host; the engine contributes the
//! glide gate for presses and the indicator placement math for a custom bar.

use foldview_core::{Interpolation, PaneKey};

/// A tab press on its way to the host's handler.
///
/// The engine may cancel the default action (switching tabs) while the
/// focused pane is gliding; the host's own handler still runs and decides
/// what a cancelled press means for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPressEvent {
    key: PaneKey,
    default_prevented: bool,
}

impl TabPressEvent {
    /// A press on the tab addressing `key`.
    pub fn new(key: PaneKey) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// The pressed tab's pane key.
    pub fn key(&self) -> PaneKey {
        self.key
    }

    /// Cancel the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was cancelled.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Layout of one tab item inside the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabItemLayout {
    /// Left edge of the item, in bar coordinates.
    pub x: f32,
    /// Item width.
    pub width: f32,
}

/// Computes the active-tab indicator placement from a fractional tab index.
///
/// While a swipe between tabs is in flight the index is fractional; the
/// indicator's translate and width interpolate across the measured item
/// layouts so it slides and resizes continuously.
#[derive(Debug, Clone, Default)]
pub struct TabIndicator {
    items: Vec<TabItemLayout>,
    rtl: bool,
    translate: Option<Interpolation>,
    width: Option<Interpolation>,
}

impl TabIndicator {
    /// Create an indicator with no measured items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the measured item layouts.
    pub fn set_items(&mut self, items: Vec<TabItemLayout>) {
        self.items = items;
        self.rebuild();
    }

    /// Mirror translations for right-to-left layouts.
    pub fn set_rtl(&mut self, rtl: bool) {
        if self.rtl != rtl {
            self.rtl = rtl;
            self.rebuild();
        }
    }

    /// Indicator `(translate_x, width)` for a fractional tab index.
    ///
    /// `None` until any item layout is known. A single tab needs no
    /// translation and takes its own width.
    pub fn placement(&self, index_decimal: f32) -> Option<(f32, f32)> {
        let first = self.items.first()?;
        match (&self.translate, &self.width) {
            (Some(translate), Some(width)) => {
                Some((translate.map(index_decimal), width.map(index_decimal)))
            }
            _ => Some((0.0, first.width)),
        }
    }

    fn rebuild(&mut self) {
        if self.items.len() < 2 {
            self.translate = None;
            self.width = None;
            return;
        }
        let sign = if self.rtl { -1.0 } else { 1.0 };
        self.translate = Some(Interpolation::new(
            self.items
                .iter()
                .enumerate()
                .map(|(i, item)| (i as f32, sign * item.x))
                .collect(),
        ));
        self.width = Some(Interpolation::new(
            self.items
                .iter()
                .enumerate()
                .map(|(i, item)| (i as f32, item.width))
                .collect(),
        ));
    }
}
