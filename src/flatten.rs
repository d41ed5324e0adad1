//! Quadratic Bezier flattening for renderers without curve primitives

use crate::outline::Point;

/// Default parametric step between flattening samples
pub const DEFAULT_FLATTEN_STEP: f64 = 0.1;

/// Evaluate the quadratic Bezier `B(t) = (1-t)²·start + 2(1-t)t·control + t²·end`
pub fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
        u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
    )
}

/// Lazy sampler of a single quadratic Bezier segment
///
/// Yields exactly `floor(1 / step)` points at `t = 0, step, 2·step, …`,
/// covering `t ∈ [0, 1)`. The final endpoint is excluded: the consumer
/// already holds it as the segment's `end`. The sampler is a plain value;
/// keep a clone from before iteration (or construct it again) to restart
/// the sweep.
#[derive(Debug, Clone)]
pub struct QuadFlattener {
    start: Point,
    control: Point,
    end: Point,
    step: f64,
    samples: usize,
    index: usize,
}

impl QuadFlattener {
    pub fn new(start: Point, control: Point, end: Point, step: f64) -> Self {
        // A non-positive or non-finite step would never terminate
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_FLATTEN_STEP
        };
        Self {
            start,
            control,
            end,
            step,
            samples: (1.0 / step).floor() as usize,
            index: 0,
        }
    }
}

impl Iterator for QuadFlattener {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.samples {
            return None;
        }
        let t = self.index as f64 * self.step;
        self.index += 1;
        Some(quadratic_point(self.start, self.control, self.end, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for QuadFlattener {}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> (Point, Point, Point) {
        (
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        )
    }

    #[test]
    fn test_sample_count_matches_step() {
        let (s, c, e) = segment();
        assert_eq!(QuadFlattener::new(s, c, e, 0.1).count(), 10);
        assert_eq!(QuadFlattener::new(s, c, e, 0.25).count(), 4);
        assert_eq!(QuadFlattener::new(s, c, e, 1.0).count(), 1);
    }

    #[test]
    fn test_first_sample_is_start() {
        let (s, c, e) = segment();
        let first = QuadFlattener::new(s, c, e, 0.1).next().unwrap();
        assert_eq!(first, s);
    }

    #[test]
    fn test_endpoint_excluded() {
        let (s, c, e) = segment();
        for p in QuadFlattener::new(s, c, e, 0.1) {
            assert!(p.x < e.x);
        }
    }

    #[test]
    fn test_curve_apex() {
        // At t = 0.5 the quadratic passes halfway to the control point
        let (s, c, e) = segment();
        let apex = quadratic_point(s, c, e, 0.5);
        assert!((apex.x - 10.0).abs() < 1e-9);
        assert!((apex.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_restart_from_clone() {
        let (s, c, e) = segment();
        let fresh = QuadFlattener::new(s, c, e, 0.1);
        let mut partial = fresh.clone();
        partial.next();
        partial.next();
        assert_eq!(partial.count(), 8);
        // The pre-iteration clone still sweeps the full range
        assert_eq!(fresh.count(), 10);
    }

    #[test]
    fn test_samples_advance_monotonically() {
        let (s, c, e) = segment();
        let xs: Vec<f64> = QuadFlattener::new(s, c, e, 0.1).map(|p| p.x).collect();
        for pair in xs.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_degenerate_step_falls_back_to_default() {
        let (s, c, e) = segment();
        assert_eq!(QuadFlattener::new(s, c, e, 0.0).count(), 10);
        assert_eq!(QuadFlattener::new(s, c, e, -1.0).count(), 10);
        assert_eq!(QuadFlattener::new(s, c, e, f64::NAN).count(), 10);
    }
}
