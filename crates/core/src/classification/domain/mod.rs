pub mod face_measurements;
pub mod face_shape_classifier;
pub mod shape_label;
