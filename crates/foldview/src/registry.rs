//! Imperative scroll-control registry.
//!
//! Replaces an ad hoc scanned ref list with an explicit insertion-once map:
//! each pane registers one handle when it mounts, and the snap pass drives
//! handles through the registry in registration order.

use foldview_core::PaneKey;
use indexmap::IndexMap;

/// Imperative control over one pane's scroll offset.
///
/// Implementations must tolerate being driven while the pane is off-screen
/// or not yet laid out; such calls are no-ops inside the handle, not in the
/// registry.
pub trait ScrollHandle {
    /// Set the pane's vertical scroll offset, optionally animated.
    fn scroll_to(&mut self, offset: f32, animated: bool);
}

/// Registry of pane scroll handles, iterated in registration order.
///
/// A key registers at most once. Panes stay mounted for the engine's
/// lifetime and are expected not to re-register with a new handle instance;
/// repeated registrations are ignored, first wins.
#[derive(Default)]
pub struct PaneRegistry {
    handles: IndexMap<PaneKey, Box<dyn ScrollHandle>>,
}

impl PaneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handles: IndexMap::new(),
        }
    }

    /// Register a handle for `key`. Returns whether the handle was stored.
    pub fn register(&mut self, key: PaneKey, handle: Box<dyn ScrollHandle>) -> bool {
        if self.handles.contains_key(&key) {
            tracing::trace!(%key, "ignoring repeated scroll handle registration");
            return false;
        }
        self.handles.insert(key, handle);
        true
    }

    /// Drive `key`'s handle to `offset`. Unknown keys are a silent no-op;
    /// returns whether a handle was driven.
    pub fn reposition(&mut self, key: PaneKey, offset: f32, animated: bool) -> bool {
        match self.handles.get_mut(&key) {
            Some(handle) => {
                handle.scroll_to(offset, animated);
                true
            }
            None => {
                tracing::trace!(%key, offset, "reposition for unregistered pane ignored");
                false
            }
        }
    }

    /// Whether `key` has a registered handle.
    pub fn contains(&self, key: PaneKey) -> bool {
        self.handles.contains_key(&key)
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = PaneKey> + '_ {
        self.handles.keys().copied()
    }

    /// Number of registered panes.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no pane has registered yet.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
