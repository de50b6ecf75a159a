//! Navigation-state snapshot consumed from the tab widget.
//!
//! The tab-switching widget is a host collaborator; the engine only needs a
//! snapshot of its `{index, routes}` state, pushed in whenever the index
//! changes.

use foldview_core::PaneKey;

/// A route descriptor that can identify its pane.
///
/// The key decides which pane a route addresses. Implement this on the
/// host's own route type to derive the key from a different field than
/// [`Route::key`].
pub trait TabRoute {
    /// Stable key string for this route's pane. Unique per navigation state.
    fn route_key(&self) -> &str;

    /// Pane key derived from [`route_key`](Self::route_key).
    fn pane_key(&self) -> PaneKey {
        PaneKey::new(self.route_key())
    }
}

/// Minimal route descriptor: a key and a display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub key: String,
    pub title: String,
}

impl Route {
    /// Create a route.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

impl TabRoute for Route {
    fn route_key(&self) -> &str {
        &self.key
    }
}

/// Snapshot of the tab widget's navigation state.
#[derive(Debug, Clone)]
pub struct NavigationState<R> {
    /// Index of the focused route.
    pub index: usize,
    /// Ordered route list.
    pub routes: Vec<R>,
}

impl<R: TabRoute> NavigationState<R> {
    /// Create a snapshot.
    pub fn new(index: usize, routes: Vec<R>) -> Self {
        Self { index, routes }
    }

    /// The focused route, if the index is in range.
    pub fn active_route(&self) -> Option<&R> {
        self.routes.get(self.index)
    }

    /// Pane key of the focused route.
    pub fn active_key(&self) -> Option<PaneKey> {
        self.active_route().map(TabRoute::pane_key)
    }
}
