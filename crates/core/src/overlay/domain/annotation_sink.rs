use super::face_annotation::FaceAnnotation;

/// Receives per-face results for display.
///
/// Called once per face in detector order, then `end_frame` once per frame
/// (including frames without faces).
pub trait AnnotationSink: Send {
    fn annotate(&mut self, annotation: &FaceAnnotation) -> Result<(), Box<dyn std::error::Error>>;

    fn end_frame(&mut self, _frame_index: usize) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    /// Flushes buffered output. Called once after the last frame.
    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
