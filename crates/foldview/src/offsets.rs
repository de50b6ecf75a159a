//! Last-known scroll offsets per pane.

use ahash::HashMap;
use foldview_core::PaneKey;

/// Last observed scroll offset for each pane.
///
/// Entries are created on the first scroll event or the first forced
/// repositioning and are never removed: a pane that goes off-screen keeps
/// its entry so focus can return to a consistent position.
#[derive(Debug, Default)]
pub struct OffsetCache {
    offsets: HashMap<PaneKey, f32>,
}

impl OffsetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            offsets: HashMap::default(),
        }
    }

    /// Last known offset for `key`, if the pane has ever reported or been
    /// repositioned.
    pub fn get(&self, key: PaneKey) -> Option<f32> {
        self.offsets.get(&key).copied()
    }

    /// Offset for comparison purposes; a pane with no entry sits at its
    /// initial position.
    pub fn get_or_initial(&self, key: PaneKey) -> f32 {
        self.get(key).unwrap_or(0.0)
    }

    /// Record `key`'s offset.
    pub fn set(&mut self, key: PaneKey, offset: f32) {
        self.offsets.insert(key, offset);
    }

    /// Number of panes with a recorded offset.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no offset has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
