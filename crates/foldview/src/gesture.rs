//! Gesture boundary flags.

use bitflags::bitflags;

bitflags! {
    /// Transient gesture state for the focused pane.
    ///
    /// Both bits are driven by the pane's gesture-boundary callbacks and are
    /// never persisted: `DRAGGING` spans begin-drag to end-drag, `GLIDING`
    /// spans momentum begin to momentum end. They can overlap briefly when a
    /// new touch lands during momentum.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GestureFlags: u8 {
        /// A finger is down and dragging the pane.
        const DRAGGING = 1 << 0;
        /// The pane is in post-release momentum scroll.
        const GLIDING = 1 << 1;
    }
}

impl GestureFlags {
    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.contains(Self::DRAGGING)
    }

    /// Whether the pane is gliding.
    #[inline]
    pub fn is_gliding(&self) -> bool {
        self.contains(Self::GLIDING)
    }
}
