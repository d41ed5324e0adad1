//! Error types for outline construction

use thiserror::Error;

/// Precondition violations in the outline data handed over by the
/// font-parsing layer.
///
/// These indicate a broken input contract, not a malformed glyph: a glyph
/// with zero points or zero contours is valid and renders as a placeholder
/// comment instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// The tag sequence must parallel the point sequence one-to-one.
    #[error("outline has {points} points but {tags} tags")]
    TagCountMismatch { points: usize, tags: usize },

    /// A contour end index points past the end of the point sequence.
    #[error("contour {index} ends at point {end}, but the outline has only {point_count} points")]
    ContourEndOutOfBounds {
        index: usize,
        end: usize,
        point_count: usize,
    },

    /// Contour end indices must be strictly increasing so that each contour
    /// resolves to a non-empty, non-overlapping point range.
    #[error("contour end indices must be strictly increasing: contour {index} ends at {end}, previous contour ended at {previous}")]
    UnorderedContourEnds {
        index: usize,
        end: usize,
        previous: usize,
    },
}
