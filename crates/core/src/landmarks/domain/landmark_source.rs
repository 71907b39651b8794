use super::detected_face::LandmarkFrame;

/// Supplies per-frame landmark detections.
///
/// Implementations wrap a live detector or recorded detector output; the
/// pipeline only sees [`LandmarkFrame`]s.
pub trait LandmarkSource: Send {
    /// Number of frames, when known up front.
    fn total_frames(&self) -> Option<usize>;

    /// Returns an iterator over frames in capture order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<LandmarkFrame, Box<dyn std::error::Error>>> + '_>;
}
