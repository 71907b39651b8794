use crate::shared::face_box::FaceBox;

use super::landmark_set::LandmarkSet;

/// One face reported by the detector for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedFace {
    pub bbox: Option<FaceBox>,
    pub landmarks: LandmarkSet,
}

/// All faces the detector reported for one frame, in detector order.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    pub index: usize,
    pub faces: Vec<DetectedFace>,
}

impl LandmarkFrame {
    pub fn new(index: usize, faces: Vec<DetectedFace>) -> Self {
        Self { index, faces }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
