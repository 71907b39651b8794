//! 68-point landmark layout and overlay defaults.
//!
//! Indices follow the iBUG 68-point scheme used by the upstream landmark
//! detector. Jaw indices are relative to the jaw outline subset.

pub const LANDMARK_COUNT: usize = 68;

pub const JAW_OUTLINE_LEN: usize = 17;
pub const EYEBROW_LEN: usize = 5;

/// First index of each named subset within the full 68-point list.
pub const JAW_OUTLINE_START: usize = 0;
pub const LEFT_EYEBROW_START: usize = 17;
pub const RIGHT_EYEBROW_START: usize = 22;

/// Jaw outline end near the left ear.
pub const JAW_LEFT_END: usize = 0;
/// Jaw outline end near the right ear.
pub const JAW_RIGHT_END: usize = JAW_OUTLINE_LEN - 1;
/// Chin point: `floor(17 / 2)`.
pub const JAW_CENTER: usize = JAW_OUTLINE_LEN / 2;

/// Endpoints of the horizontal cross-segment used to find cheekbone width.
pub const CHEEK_CROSS_LEFT: usize = 1;
pub const CHEEK_CROSS_RIGHT: usize = 15;

/// First jaw point of the path summed into the jawline length (runs to `JAW_CENTER`).
pub const JAWLINE_PATH_START: usize = 2;

/// Overlay box styling used when annotating a face.
pub const OVERLAY_LINE_WIDTH: u32 = 2;
pub const OVERLAY_BOX_COLOR: &str = "#FF0000";
pub const OVERLAY_TEXT_COLOR: &str = "#FF0000";
pub const OVERLAY_FONT_SIZE: u32 = 12;

/// Frame cadence of a live detection loop.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;
