//! Snap target policy.

/// Compute where settled panes should sit, given the focused pane's offset.
///
/// Returns `None` when the offset is past the collapse boundary or negative:
/// the focused pane is then left where it is and only lagging panes are
/// forced behind the header. With snapping disabled the focused pane's raw
/// offset becomes the alignment target for the other panes.
///
/// The caller is responsible for short-circuiting `header_height == 0`; at
/// zero height there is no edge to snap to and the threshold ratio is
/// meaningless.
pub fn snap_target(
    offset: f32,
    header_height: f32,
    threshold: f32,
    snap_disabled: bool,
) -> Option<f32> {
    if !(0.0..=header_height).contains(&offset) {
        return None;
    }
    if snap_disabled {
        return Some(offset);
    }
    if offset <= header_height * threshold {
        Some(0.0)
    } else {
        Some(header_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_or_below_threshold_snaps_open() {
        assert_eq!(snap_target(0.0, 80.0, 0.5, false), Some(0.0));
        assert_eq!(snap_target(30.0, 80.0, 0.5, false), Some(0.0));
        assert_eq!(snap_target(40.0, 80.0, 0.5, false), Some(0.0)); // boundary
    }

    #[test]
    fn test_above_threshold_snaps_closed() {
        assert_eq!(snap_target(40.1, 80.0, 0.5, false), Some(80.0));
        assert_eq!(snap_target(60.0, 80.0, 0.5, false), Some(80.0));
        assert_eq!(snap_target(80.0, 80.0, 0.5, false), Some(80.0)); // boundary
    }

    #[test]
    fn test_outside_header_range_has_no_target() {
        assert_eq!(snap_target(-0.1, 80.0, 0.5, false), None);
        assert_eq!(snap_target(80.1, 80.0, 0.5, false), None);
        assert_eq!(snap_target(120.0, 80.0, 0.5, false), None);
    }

    #[test]
    fn test_disabled_snap_passes_raw_offset_through() {
        assert_eq!(snap_target(33.0, 80.0, 0.5, true), Some(33.0));
        assert_eq!(snap_target(120.0, 80.0, 0.5, true), None); // range check first
    }

    #[test]
    fn test_threshold_extremes() {
        // threshold 0: everything except the exact top snaps closed
        assert_eq!(snap_target(0.0, 80.0, 0.0, false), Some(0.0));
        assert_eq!(snap_target(1.0, 80.0, 0.0, false), Some(80.0));
        // threshold 1: everything inside the header snaps open
        assert_eq!(snap_target(80.0, 80.0, 1.0, false), Some(0.0));
    }
}
