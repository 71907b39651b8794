pub mod detected_face;
pub mod landmark_set;
pub mod landmark_source;

#[cfg(test)]
pub(crate) mod fixtures;
