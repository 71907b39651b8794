use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::classification::domain::face_shape_classifier::analyze;
use crate::classification::domain::shape_label::ShapeLabel;
use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::overlay::domain::annotation_sink::AnnotationSink;
use crate::overlay::domain::face_annotation::{DrawOptions, FaceAnnotation};
use crate::pipeline::pipeline_logger::PipelineLogger;

/// Totals for one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisSummary {
    pub frames: usize,
    pub faces: usize,
    pub label_counts: HashMap<ShapeLabel, usize>,
}

/// Per-frame face shape pipeline: read landmarks → measure → classify → annotate.
///
/// Every face is analyzed on its own; no state carries over between faces
/// or frames. An optional interval paces the loop like a live detector.
pub struct AnalyzeFacesUseCase {
    source: Box<dyn LandmarkSource>,
    sink: Box<dyn AnnotationSink>,
    logger: Box<dyn PipelineLogger>,
    draw_options: DrawOptions,
    frame_interval: Option<Duration>,
}

impl AnalyzeFacesUseCase {
    pub fn new(
        source: Box<dyn LandmarkSource>,
        sink: Box<dyn AnnotationSink>,
        logger: Box<dyn PipelineLogger>,
        draw_options: DrawOptions,
        frame_interval: Option<Duration>,
    ) -> Self {
        Self {
            source,
            sink,
            logger,
            draw_options,
            frame_interval,
        }
    }

    pub fn execute(&mut self) -> Result<AnalysisSummary, Box<dyn std::error::Error>> {
        let total = self.source.total_frames();
        let mut summary = AnalysisSummary::default();

        for (n, frame) in self.source.frames().enumerate() {
            if n > 0 {
                if let Some(interval) = self.frame_interval {
                    std::thread::sleep(interval);
                }
            }
            let frame = frame?;

            let start = Instant::now();
            let annotations: Vec<FaceAnnotation> = frame
                .faces
                .iter()
                .enumerate()
                .map(|(face_index, face)| FaceAnnotation {
                    frame_index: frame.index,
                    face_index,
                    bbox: face.bbox,
                    analysis: analyze(&face.landmarks),
                    draw_options: self.draw_options.clone(),
                })
                .collect();
            self.logger
                .timing("analyze", start.elapsed().as_secs_f64() * 1000.0);

            for annotation in &annotations {
                let label = annotation.analysis.label;
                if !label.is_recognized() {
                    log::warn!(
                        "frame {} face {}: no shape rule matched",
                        annotation.frame_index,
                        annotation.face_index
                    );
                }
                self.sink.annotate(annotation)?;
                self.logger.label(label);
                *summary.label_counts.entry(label).or_default() += 1;
            }
            self.sink.end_frame(frame.index)?;

            summary.frames += 1;
            summary.faces += annotations.len();
            self.logger.progress(summary.frames, total);
        }

        self.sink.finish()?;
        self.logger.info(&format!(
            "Analyzed {} faces across {} frames",
            summary.faces, summary.frames
        ));
        self.logger.summary();
        Ok(summary)
    }
}
