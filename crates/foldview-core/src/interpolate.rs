//! Piecewise-linear interpolation over sorted stops.
//!
//! Two consumers: the header translate mapping `[0, h] -> [0, -h]` (clamped
//! past the collapse boundary) and the tab indicator, which maps a fractional
//! tab index across per-tab layouts.

/// Maps an input through `(input, output)` stops.
///
/// Between stops the mapping is linear. Beyond the first or last stop the
/// edge segment is extrapolated unless the corresponding clamp is enabled,
/// in which case the edge output is returned unchanged.
///
/// # Example
/// ```
/// use foldview_core::Interpolation;
///
/// let translate = Interpolation::new(vec![(0.0, 0.0), (80.0, -80.0)]).clamp_right(true);
/// assert_eq!(translate.map(40.0), -40.0);
/// assert_eq!(translate.map(120.0), -80.0); // clamped
/// assert_eq!(translate.map(-10.0), 10.0); // extrapolated
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    stops: Vec<(f32, f32)>,
    clamp_left: bool,
    clamp_right: bool,
}

impl Interpolation {
    /// Build from stops sorted by ascending input.
    ///
    /// Inputs are expected to be strictly increasing; a zero-width segment
    /// maps to its right stop's output instead of dividing by zero.
    pub fn new(stops: Vec<(f32, f32)>) -> Self {
        debug_assert!(
            stops.windows(2).all(|pair| pair[0].0 <= pair[1].0),
            "interpolation stops must be sorted by input"
        );
        Self {
            stops,
            clamp_left: false,
            clamp_right: false,
        }
    }

    /// A mapping that returns `output` for every input.
    pub fn constant(output: f32) -> Self {
        Self::new(vec![(0.0, output)])
    }

    /// Pin inputs before the first stop to the first stop's output.
    pub fn clamp_left(mut self, clamp: bool) -> Self {
        self.clamp_left = clamp;
        self
    }

    /// Pin inputs past the last stop to the last stop's output.
    pub fn clamp_right(mut self, clamp: bool) -> Self {
        self.clamp_right = clamp;
        self
    }

    /// Map `x` through the stops.
    ///
    /// With no stops this returns `0.0`; with one stop, that stop's output.
    pub fn map(&self, x: f32) -> f32 {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if self.stops.len() == 1 {
            return first.1;
        }
        if self.clamp_left && x <= first.0 {
            return first.1;
        }
        if self.clamp_right && x >= last.0 {
            return last.1;
        }

        // Pick the segment containing x; edge segments extend outward for
        // extrapolation.
        let segment = self
            .stops
            .windows(2)
            .find(|pair| x <= pair[1].0)
            .unwrap_or_else(|| &self.stops[self.stops.len() - 2..]);
        let (x0, y0) = segment[0];
        let (x1, y1) = segment[1];

        let span = x1 - x0;
        if span == 0.0 {
            return y1;
        }
        let t = (x - x0) / span;
        y0 + (y1 - y0) * t
    }
}
