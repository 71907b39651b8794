use std::io::Write;

use crate::overlay::domain::annotation_sink::AnnotationSink;
use crate::overlay::domain::face_annotation::FaceAnnotation;

/// Writes one `frame N: Face Shape: <label>` line per face, followed by the
/// label's anchor point when the detector supplied a box.
pub struct TextAnnotationSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TextAnnotationSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> AnnotationSink for TextAnnotationSink<W> {
    fn annotate(&mut self, annotation: &FaceAnnotation) -> Result<(), Box<dyn std::error::Error>> {
        write!(
            self.out,
            "frame {}: {}",
            annotation.frame_index,
            annotation.caption()
        )?;
        if let Some(anchor) = annotation.bbox.map(|b| b.label_anchor()) {
            write!(self.out, " @ ({:.0}, {:.0})", anchor.x, anchor.y)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.out.flush()?;
        Ok(())
    }
}
