//! The shared scroll value, observable by every collaborator.
//!
//! The engine owns one `ObservableValue`. The focused pane writes it on each
//! scroll event; the header transform and any host-side mirrors read it
//! through subscriptions. Listeners attach via [`ObservableValue::subscribe`],
//! which hands back a [`Subscription`] token; the token must be moved back
//! into [`ObservableValue::unsubscribe`] to detach, so a subscription can
//! only ever be torn down once.

use std::fmt;

type Listener = Box<dyn FnMut(f32)>;

/// Token identifying one attached listener.
///
/// Not `Copy` or `Clone` on purpose: detaching consumes the token, which
/// makes double-unsubscribe unrepresentable.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "a dropped token leaves its listener attached until detach_all"]
pub struct Subscription(u64);

/// A mutable `f32` that notifies listeners on every write.
///
/// Single-threaded by design: writes happen inside discrete event handlers
/// and listeners run to completion before the write returns.
pub struct ObservableValue {
    value: f32,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

impl ObservableValue {
    /// Create a value starting at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Write a new value and notify every listener, in subscription order.
    ///
    /// Listeners are notified even when the value is unchanged; scroll
    /// sources already coalesce repeats and settle detection keys off the
    /// notification itself, not the delta.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    /// Attach a listener, returning the token that detaches it.
    pub fn subscribe(&mut self, listener: impl FnMut(f32) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Detach the listener behind `token`.
    pub fn unsubscribe(&mut self, token: Subscription) {
        self.listeners.retain(|(id, _)| *id != token.0);
    }

    /// Drop every listener at once.
    ///
    /// Safe to call with no listeners attached and safe to call repeatedly;
    /// teardown paths rely on both.
    pub fn detach_all(&mut self) {
        if !self.listeners.is_empty() {
            tracing::trace!(count = self.listeners.len(), "detaching scroll listeners");
        }
        self.listeners.clear();
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for ObservableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
