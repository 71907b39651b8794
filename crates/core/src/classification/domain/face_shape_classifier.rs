//! Ordered comparison rules mapping measurements to a shape label.
//!
//! Rules are evaluated top to bottom and the first match wins. Comparisons
//! are strict and the all-equal rule uses exact float equality.

use serde::Serialize;

use crate::landmarks::domain::landmark_set::LandmarkSet;

use super::face_measurements::{measure, FaceMeasurements};
use super::shape_label::ShapeLabel;

/// Measurements together with the label they produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShapeAnalysis {
    pub measurements: FaceMeasurements,
    pub label: ShapeLabel,
}

#[allow(clippy::float_cmp)]
pub fn classify(m: &FaceMeasurements) -> ShapeLabel {
    let forehead = m.forehead_width;
    let cheekbone = m.cheekbone_width;
    let jawline = m.jawline_length_from_center;

    if cheekbone > forehead && forehead > jawline {
        ShapeLabel::DiamondRoundOval
    } else if jawline > cheekbone && cheekbone > forehead {
        ShapeLabel::Triangle
    } else if forehead > cheekbone && forehead > jawline {
        ShapeLabel::Heart
    } else if jawline == cheekbone && cheekbone == forehead {
        ShapeLabel::SquareOblong
    } else {
        ShapeLabel::Unrecognized
    }
}

/// Measures one face and classifies it.
pub fn analyze(landmarks: &LandmarkSet) -> ShapeAnalysis {
    let measurements = measure(landmarks);
    let label = classify(&measurements);
    log::debug!(
        "forehead={:.2} cheekbone={:.2} jawline={:.2} -> {:?}",
        measurements.forehead_width,
        measurements.cheekbone_width,
        measurements.jawline_length_from_center,
        label
    );
    ShapeAnalysis {
        measurements,
        label,
    }
}
