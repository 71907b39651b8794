pub mod json_annotation_sink;
pub mod text_annotation_sink;
