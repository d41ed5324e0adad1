//! Outline data model: points, on/off-curve tags, contour boundaries
//!
//! An [`Outline`] is the raw contour representation handed in by the
//! font-parsing layer: an ordered point sequence, a parallel tag sequence
//! marking each point as on-curve or off-curve, and the index of each
//! contour's last point. It is constructed once per glyph, validated up
//! front, and read-only afterwards.

use crate::error::OutlineError;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic midpoint of two points
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

/// Classification of an outline point
///
/// TrueType-style outlines tag each point with a bit: set means the path
/// passes through the point (an anchor), clear means the point only shapes
/// the curve between its neighboring anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTag {
    /// An anchor the path passes through
    OnCurve,
    /// A quadratic control point, not visited by the path
    Control,
}

impl PointTag {
    /// Classify from a raw FreeType-style tag byte (bit 0 = on-curve).
    /// No other bits affect path shape.
    pub fn from_tag_byte(tag: u8) -> Self {
        if tag & 1 != 0 {
            PointTag::OnCurve
        } else {
            PointTag::Control
        }
    }

    pub fn is_on_curve(self) -> bool {
        matches!(self, PointTag::OnCurve)
    }
}

/// A glyph outline: points, parallel tags, and contour end indices
///
/// Contour `i` spans the points `previous_end + 1 ..= ends[i]` (starting at
/// index 0 for the first contour). The constructor rejects inputs where the
/// index arithmetic would read out of bounds; whether the contours actually
/// partition the whole point sequence remains the caller's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
    tags: Vec<PointTag>,
    contour_ends: Vec<usize>,
}

impl Outline {
    /// Build an outline, failing fast on a broken input contract
    pub fn new(
        points: Vec<Point>,
        tags: Vec<PointTag>,
        contour_ends: Vec<usize>,
    ) -> Result<Self, OutlineError> {
        if points.len() != tags.len() {
            return Err(OutlineError::TagCountMismatch {
                points: points.len(),
                tags: tags.len(),
            });
        }
        let mut previous: Option<usize> = None;
        for (index, &end) in contour_ends.iter().enumerate() {
            if end >= points.len() {
                return Err(OutlineError::ContourEndOutOfBounds {
                    index,
                    end,
                    point_count: points.len(),
                });
            }
            if let Some(previous) = previous {
                if end <= previous {
                    return Err(OutlineError::UnorderedContourEnds {
                        index,
                        end,
                        previous,
                    });
                }
            }
            previous = Some(end);
        }
        Ok(Self {
            points,
            tags,
            contour_ends,
        })
    }

    /// Build an outline from raw FreeType-style tag bytes
    pub fn from_tag_bytes(
        points: Vec<Point>,
        tag_bytes: &[u8],
        contour_ends: Vec<usize>,
    ) -> Result<Self, OutlineError> {
        let tags = tag_bytes
            .iter()
            .map(|&b| PointTag::from_tag_byte(b))
            .collect();
        Self::new(points, tags, contour_ends)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn tags(&self) -> &[PointTag] {
        &self.tags
    }

    pub fn contour_ends(&self) -> &[usize] {
        &self.contour_ends
    }

    /// True when there is nothing to reconstruct (no points or no contours)
    pub fn is_degenerate(&self) -> bool {
        self.points.is_empty() || self.contour_ends.is_empty()
    }

    /// Iterate the point/tag slice pair of each contour
    pub fn contours(&self) -> impl Iterator<Item = (&[Point], &[PointTag])> {
        let mut start = 0usize;
        self.contour_ends.iter().map(move |&end| {
            let range = start..=end;
            start = end + 1;
            (&self.points[range.clone()], &self.tags[range])
        })
    }

    /// Map every point through `f`, keeping tags and contour boundaries
    pub(crate) fn map_points(&self, f: impl Fn(Point) -> Point) -> Outline {
        Outline {
            points: self.points.iter().copied().map(f).collect(),
            tags: self.tags.clone(),
            contour_ends: self.contour_ends.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let mid = Point::midpoint(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(mid, Point::new(5.0, 0.0));
    }

    #[test]
    fn test_midpoint_fractional() {
        let mid = Point::midpoint(Point::new(0.0, 0.0), Point::new(5.0, 2.0));
        assert_eq!(mid, Point::new(2.5, 1.0));
    }

    #[test]
    fn test_tag_byte_classification() {
        assert_eq!(PointTag::from_tag_byte(1), PointTag::OnCurve);
        assert_eq!(PointTag::from_tag_byte(0), PointTag::Control);
        // Only bit 0 matters; FreeType uses higher bits for other purposes
        assert_eq!(PointTag::from_tag_byte(0b11), PointTag::OnCurve);
        assert_eq!(PointTag::from_tag_byte(0b10), PointTag::Control);
    }

    #[test]
    fn test_valid_outline() {
        let outline = Outline::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![PointTag::OnCurve, PointTag::OnCurve],
            vec![1],
        )
        .unwrap();
        assert!(!outline.is_degenerate());
        assert_eq!(outline.contours().count(), 1);
    }

    #[test]
    fn test_tag_count_mismatch() {
        let err = Outline::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![PointTag::OnCurve],
            vec![1],
        )
        .unwrap_err();
        assert_eq!(err, OutlineError::TagCountMismatch { points: 2, tags: 1 });
    }

    #[test]
    fn test_contour_end_out_of_bounds() {
        let err = Outline::new(
            vec![Point::new(0.0, 0.0)],
            vec![PointTag::OnCurve],
            vec![3],
        )
        .unwrap_err();
        assert_eq!(
            err,
            OutlineError::ContourEndOutOfBounds {
                index: 0,
                end: 3,
                point_count: 1
            }
        );
    }

    #[test]
    fn test_unordered_contour_ends() {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        let tags = vec![PointTag::OnCurve; 4];
        let err = Outline::new(points, tags, vec![2, 1]).unwrap_err();
        assert_eq!(
            err,
            OutlineError::UnorderedContourEnds {
                index: 1,
                end: 1,
                previous: 2
            }
        );
    }

    #[test]
    fn test_contour_slicing() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();
        let tags = vec![PointTag::OnCurve; 5];
        let outline = Outline::new(points, tags, vec![2, 4]).unwrap();

        let contours: Vec<_> = outline.contours().collect();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].0.len(), 3);
        assert_eq!(contours[1].0.len(), 2);
        assert_eq!(contours[1].0[0], Point::new(3.0, 0.0));
    }

    #[test]
    fn test_degenerate_outlines() {
        let empty = Outline::new(vec![], vec![], vec![]).unwrap();
        assert!(empty.is_degenerate());

        let no_contours = Outline::new(
            vec![Point::new(0.0, 0.0)],
            vec![PointTag::OnCurve],
            vec![],
        )
        .unwrap();
        assert!(no_contours.is_degenerate());
    }

    #[test]
    fn test_from_tag_bytes() {
        let outline = Outline::from_tag_bytes(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            &[1, 0],
            vec![1],
        )
        .unwrap();
        assert_eq!(outline.tags(), &[PointTag::OnCurve, PointTag::Control]);
    }
}
