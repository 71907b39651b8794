pub mod analyze_faces_use_case;
pub mod pipeline_logger;
