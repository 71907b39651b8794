pub mod annotation_sink;
pub mod face_annotation;
