//! Foldview - collapsible-header tab-pane scroll synchronization.
//!
//! One shared scroll value drives a collapsing header while N independently
//! scrollable tab panes stay visually consistent:
//! - the focused pane's scroll events publish through the engine and feed
//!   both the header translate and settle detection
//! - a trailing debounce decides when scrolling has settled
//! - the snap pass realigns every registered pane to the chosen edge, so
//!   switching tabs never reveals a stale header position
//!
//! The tab-switching widget, the panes' rendering, and the animated-value
//! renderer are host collaborators; this crate owns only the
//! synchronization state and the imperative scroll-control surface.
//!
//! ## Quick start
//!
//! ```
//! use std::time::Duration;
//! use foldview::{NavigationState, Route, ScrollSync, SyncConfig};
//!
//! let mut sync = ScrollSync::new(SyncConfig::default());
//! let nav = NavigationState::new(
//!     0,
//!     vec![Route::new("articles", "Articles"), Route::new("albums", "Albums")],
//! );
//! sync.set_navigation(&nav);
//! sync.on_header_layout(129.0); // 80 of header above a 49 tab bar
//!
//! // Per frame: forward pane events, then advance the settle countdown.
//! let key = nav.active_key().unwrap();
//! sync.pane(key).on_scroll(30.0);
//! assert_eq!(sync.scroll_value(), 30.0);
//! assert_eq!(sync.header_translate(), -30.0);
//!
//! sync.tick(Duration::from_millis(120)); // settled: snap pass runs
//! ```

pub mod config;
pub mod engine;
pub mod gesture;
pub mod header;
pub mod nav;
pub mod offsets;
pub mod pane;
pub mod registry;
pub mod snap;
pub mod tab_bar;

pub use config::{DEFAULT_SNAP_THRESHOLD, DEFAULT_SNAP_TIMEOUT, DEFAULT_TAB_BAR_HEIGHT, SyncConfig};
pub use engine::ScrollSync;
pub use gesture::GestureFlags;
pub use header::HeaderTracker;
pub use nav::{NavigationState, Route, TabRoute};
pub use offsets::OffsetCache;
pub use pane::{DirectionCue, HeaderCue, PaneHooks};
pub use registry::{PaneRegistry, ScrollHandle};
pub use snap::snap_target;
pub use tab_bar::{TabIndicator, TabItemLayout, TabPressEvent};

// Re-export the core primitives alongside the engine types.
pub use foldview_core::{DebounceTimer, Interpolation, ObservableValue, PaneKey, Subscription};
