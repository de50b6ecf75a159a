//! Foldview core primitives.
//!
//! Shared building blocks for the foldview synchronization engine:
//! - [`PaneKey`]: stable pane identifiers derived from route keys
//! - [`ObservableValue`]: the shared scroll value with explicit subscriptions
//! - [`DebounceTimer`]: trailing-edge settle detection, advanced per frame
//! - [`Interpolation`]: piecewise-linear mappings for header translate and
//!   tab indicator placement
//!
//! These types carry no engine policy; the `foldview` crate composes them
//! into the collapsible-header scroll synchronization engine.

pub mod interpolate;
pub mod key;
pub mod logging;
pub mod observable;
pub mod timer;

pub use interpolate::Interpolation;
pub use key::PaneKey;
pub use observable::{ObservableValue, Subscription};
pub use timer::DebounceTimer;
