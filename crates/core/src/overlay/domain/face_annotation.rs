use serde::Serialize;

use crate::classification::domain::face_shape_classifier::ShapeAnalysis;
use crate::shared::constants::{
    OVERLAY_BOX_COLOR, OVERLAY_FONT_SIZE, OVERLAY_LINE_WIDTH, OVERLAY_TEXT_COLOR,
};
use crate::shared::face_box::FaceBox;

/// Styling for the labelled box drawn around a face.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawOptions {
    pub line_width: u32,
    pub box_color: String,
    pub text_color: String,
    pub font_size: u32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            line_width: OVERLAY_LINE_WIDTH,
            box_color: OVERLAY_BOX_COLOR.to_string(),
            text_color: OVERLAY_TEXT_COLOR.to_string(),
            font_size: OVERLAY_FONT_SIZE,
        }
    }
}

/// Everything the renderer needs to label one face in one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaceAnnotation {
    pub frame_index: usize,
    pub face_index: usize,
    #[serde(rename = "box")]
    pub bbox: Option<FaceBox>,
    #[serde(flatten)]
    pub analysis: ShapeAnalysis,
    pub draw_options: DrawOptions,
}

impl FaceAnnotation {
    /// Result-panel text for this face.
    pub fn caption(&self) -> String {
        format!("Face Shape: {}", self.analysis.label)
    }
}
