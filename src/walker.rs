//! Contour reconstruction: classify point pairs into path operations
//!
//! A TrueType-style contour is a closed loop of on-curve anchors and
//! off-curve quadratic control points. Two consecutive control points imply
//! an on-curve anchor exactly halfway between them. The walker makes one
//! cyclic pass over the contour, synthesizing those implied anchors and
//! emitting one move, the line/curve operations, and one close per contour.

use crate::outline::{Outline, Point, PointTag};
use crate::renderer::path::{GlyphPath, PathSegment};

/// Observer for reconstruction steps
///
/// Replaces the process-wide debug stream of older glyph dumpers with an
/// injected collaborator: reconstruction itself stays pure, and callers that
/// want insight pass a tracer per call.
pub trait ContourTracer {
    /// A contour walk is starting at `start` over `npts` points
    fn contour_start(&mut self, npts: usize, start: Point) {
        let _ = (npts, start);
    }

    /// An implied on-curve anchor was synthesized between two control points
    fn midpoint_inserted(&mut self, a: Point, b: Point, mid: Point) {
        let _ = (a, b, mid);
    }

    /// A segment was emitted
    fn segment(&mut self, segment: &PathSegment) {
        let _ = segment;
    }
}

/// Tracer that records nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTracer;

impl ContourTracer for NullTracer {}

/// Tracer that forwards every step to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl ContourTracer for LogTracer {
    fn contour_start(&mut self, npts: usize, start: Point) {
        log::debug!("contour: {npts} points, starting at ({}, {})", start.x, start.y);
    }

    fn midpoint_inserted(&mut self, a: Point, b: Point, mid: Point) {
        log::debug!(
            "implied anchor ({}, {}) between control points ({}, {}) and ({}, {})",
            mid.x,
            mid.y,
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    fn segment(&mut self, segment: &PathSegment) {
        log::debug!("segment: {segment:?}");
    }
}

/// Reconstruct the path of a single contour
///
/// `points` and `tags` are one contour's parallel slices, already placed in
/// output coordinates. An empty contour yields no segments; any other
/// contour yields exactly one `MoveTo`, at most one drawing operation per
/// point, and one trailing `Close`.
pub fn walk_contour(
    points: &[Point],
    tags: &[PointTag],
    tracer: &mut dyn ContourTracer,
) -> Vec<PathSegment> {
    debug_assert_eq!(points.len(), tags.len());
    let npts = points.len();
    if npts == 0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(npts + 2);
    let start = start_anchor(points, tags);
    tracer.contour_start(npts, start);
    segments.push(PathSegment::MoveTo(start));

    for j in 0..npts {
        let i0 = j;
        let i1 = (j + 1) % npts;
        let i2 = (j + 2) % npts;

        // Two consecutive control points imply an anchor halfway between
        // them; it becomes this step's effective current point. The
        // synthesis itself draws nothing.
        let current_on = if !tags[i0].is_on_curve() && !tags[i1].is_on_curve() {
            let mid = Point::midpoint(points[i0], points[i1]);
            tracer.midpoint_inserted(points[i0], points[i1], mid);
            true
        } else {
            tags[i0].is_on_curve()
        };

        if !current_on {
            // Control point already consumed as the previous step's curve
            // target; the pair was handled there.
            continue;
        }

        let next = points[i1];
        let segment = match (tags[i1].is_on_curve(), tags[i2].is_on_curve()) {
            (true, _) => PathSegment::LineTo(next),
            (false, true) => PathSegment::QuadTo {
                control: next,
                end: points[i2],
            },
            (false, false) => {
                let end = Point::midpoint(next, points[i2]);
                tracer.midpoint_inserted(next, points[i2], end);
                PathSegment::QuadTo { control: next, end }
            }
        };
        tracer.segment(&segment);
        segments.push(segment);
    }

    // The close operation draws the final edge itself; a trailing line back
    // to the start anchor would be emitted twice.
    if let Some(&PathSegment::LineTo(p)) = segments.last() {
        if p == start {
            segments.pop();
        }
    }

    segments.push(PathSegment::Close);
    segments
}

/// Reconstruct every contour of a placed outline, in order
pub fn walk_outline(outline: &Outline, tracer: &mut dyn ContourTracer) -> GlyphPath {
    let mut segments = Vec::new();
    for (points, tags) in outline.contours() {
        segments.extend(walk_contour(points, tags, tracer));
    }
    GlyphPath { segments }
}

/// The contour's initial move target
///
/// A contour may open with an off-curve point. The walk is cyclic, so the
/// path still closes over that control point at the wrap boundary; the move
/// target is the first anchor the walk actually draws from: the second
/// point when it is on-curve, otherwise the implied anchor halfway between
/// the first two control points.
fn start_anchor(points: &[Point], tags: &[PointTag]) -> Point {
    if tags[0].is_on_curve() {
        return points[0];
    }
    let second = 1 % points.len();
    if tags[second].is_on_curve() {
        points[second]
    } else {
        Point::midpoint(points[0], points[second])
    }
}
