//! Named landmark subsets read by the classifier.
//!
//! Subset sizes are fixed by the array types, so a constructed
//! `LandmarkSet` always satisfies the layout contract.

use thiserror::Error;

use crate::shared::constants::{
    EYEBROW_LEN, JAW_OUTLINE_LEN, JAW_OUTLINE_START, LANDMARK_COUNT, LEFT_EYEBROW_START,
    RIGHT_EYEBROW_START,
};
use crate::shared::point::Point2D;

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} landmark points, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    jaw_outline: [Point2D; JAW_OUTLINE_LEN],
    left_eyebrow: [Point2D; EYEBROW_LEN],
    right_eyebrow: [Point2D; EYEBROW_LEN],
}

impl LandmarkSet {
    pub fn new(
        jaw_outline: [Point2D; JAW_OUTLINE_LEN],
        left_eyebrow: [Point2D; EYEBROW_LEN],
        right_eyebrow: [Point2D; EYEBROW_LEN],
    ) -> Self {
        Self {
            jaw_outline,
            left_eyebrow,
            right_eyebrow,
        }
    }

    /// Picks the named subsets out of a full 68-point detector result.
    pub fn from_points(points: &[Point2D]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongPointCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self {
            jaw_outline: subset(points, JAW_OUTLINE_START),
            left_eyebrow: subset(points, LEFT_EYEBROW_START),
            right_eyebrow: subset(points, RIGHT_EYEBROW_START),
        })
    }

    /// Ordered left to right: index 0 by the left ear, 16 by the right.
    pub fn jaw_outline(&self) -> &[Point2D; JAW_OUTLINE_LEN] {
        &self.jaw_outline
    }

    pub fn left_eyebrow(&self) -> &[Point2D; EYEBROW_LEN] {
        &self.left_eyebrow
    }

    pub fn right_eyebrow(&self) -> &[Point2D; EYEBROW_LEN] {
        &self.right_eyebrow
    }
}

fn subset<const N: usize>(points: &[Point2D], start: usize) -> [Point2D; N] {
    std::array::from_fn(|i| points[start + i])
}
