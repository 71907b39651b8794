use std::collections::HashMap;
use std::time::Instant;

use crate::classification::domain::shape_label::ShapeLabel;

/// Observer for analysis pipeline events.
///
/// Keeps the use case independent of where progress and statistics end up
/// (log output, a UI, or nowhere in tests).
pub trait PipelineLogger: Send {
    /// Report frame-level progress. `total` is `None` for open-ended sources.
    fn progress(&mut self, current: usize, total: Option<usize>);

    /// Record how long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record the label produced for one face.
    fn label(&mut self, label: ShapeLabel);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: Option<usize>) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn label(&mut self, _label: ShapeLabel) {}
    fn info(&mut self, _message: &str) {}
}

/// Logs throttled progress through the `log` facade and keeps per-stage
/// timings and label tallies for a closing summary.
pub struct StdoutPipelineLogger {
    throttle_frames: usize,
    timings: HashMap<String, Vec<f64>>,
    label_counts: HashMap<ShapeLabel, usize>,
    start_time: Instant,
    frames_seen: usize,
    messages: Vec<String>,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: HashMap::new(),
            label_counts: HashMap::new(),
            start_time: Instant::now(),
            frames_seen: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.label_counts.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let faces: usize = self.label_counts.values().sum();
        let mut lines = vec![format!(
            "Analysis summary ({} frames, {faces} faces, {:.1}s total):",
            self.frames_seen,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:6.3}ms  total {total_ms:7.1}ms"
            ));
        }

        for label in ShapeLabel::ALL {
            if let Some(count) = self.label_counts.get(label) {
                let name = if label.is_recognized() {
                    label.as_str()
                } else {
                    "(unrecognized)"
                };
                lines.push(format!("  {name}: {count}"));
            }
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn label_count(&self, label: ShapeLabel) -> usize {
        self.label_counts.get(&label).copied().unwrap_or(0)
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: Option<usize>) {
        self.frames_seen = current;
        match total {
            Some(total) if total > 0 => {
                if current % self.throttle_frames == 0 || current == total {
                    let pct = current as f64 / total as f64 * 100.0;
                    log::info!("Analyzing: {current}/{total} frames ({pct:.1}%)");
                }
            }
            _ => {
                if current % self.throttle_frames == 0 {
                    log::info!("Analyzing: {current} frames");
                }
            }
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn label(&mut self, label: ShapeLabel) {
        *self.label_counts.entry(label).or_default() += 1;
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
