use std::io::Write;

use crate::overlay::domain::annotation_sink::AnnotationSink;
use crate::overlay::domain::face_annotation::FaceAnnotation;

/// Writes each annotation as a single-line JSON object (JSON Lines).
pub struct JsonAnnotationSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonAnnotationSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> AnnotationSink for JsonAnnotationSink<W> {
    fn annotate(&mut self, annotation: &FaceAnnotation) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.out, annotation)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.out.flush()?;
        Ok(())
    }
}
