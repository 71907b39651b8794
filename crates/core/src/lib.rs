//! Face shape classification from 68-point facial landmarks.
//!
//! Landmarks come from an external detector through a [`LandmarkSource`];
//! each face is measured and classified independently, and the result is
//! pushed to an [`AnnotationSink`] for display.
//!
//! [`LandmarkSource`]: landmarks::domain::landmark_source::LandmarkSource
//! [`AnnotationSink`]: overlay::domain::annotation_sink::AnnotationSink

pub mod classification;
pub mod geometry;
pub mod landmarks;
pub mod overlay;
pub mod pipeline;
pub mod shared;
