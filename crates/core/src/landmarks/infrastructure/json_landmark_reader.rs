//! Replays recorded detector output stored as JSON.
//!
//! Document layout: an array of frames, each `{"faces": [...]}`, where a
//! face is `{"box": {x, y, width, height}, "landmarks": [{x, y}; 68]}`.
//! `box` is optional. The frame index is the position in the array.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::landmarks::domain::detected_face::{DetectedFace, LandmarkFrame};
use crate::landmarks::domain::landmark_set::{LandmarkError, LandmarkSet};
use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::shared::face_box::FaceBox;
use crate::shared::point::Point2D;

#[derive(Debug, Error)]
pub enum LandmarkReaderError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed landmark JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("frame {frame}, face {face}: {source}")]
    InvalidFace {
        frame: usize,
        face: usize,
        #[source]
        source: LandmarkError,
    },
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(default)]
    faces: Vec<RawFace>,
}

#[derive(Debug, Deserialize)]
struct RawFace {
    #[serde(rename = "box", default)]
    bbox: Option<FaceBox>,
    landmarks: Vec<Point2D>,
}

pub struct JsonLandmarkReader {
    frames: Vec<RawFrame>,
}

impl JsonLandmarkReader {
    pub fn open(path: &Path) -> Result<Self, LandmarkReaderError> {
        let file = File::open(path).map_err(|source| LandmarkReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} recorded frames from {}",
            reader.frames.len(),
            path.display()
        );
        Ok(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LandmarkReaderError> {
        let frames: Vec<RawFrame> = serde_json::from_reader(reader)?;
        Ok(Self { frames })
    }
}

impl LandmarkSource for JsonLandmarkReader {
    fn total_frames(&self) -> Option<usize> {
        Some(self.frames.len())
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<LandmarkFrame, Box<dyn std::error::Error>>> + '_> {
        Box::new(self.frames.iter().enumerate().map(
            |(index, raw)| -> Result<LandmarkFrame, Box<dyn std::error::Error>> {
                Ok(convert_frame(index, raw)?)
            },
        ))
    }
}

fn convert_frame(index: usize, raw: &RawFrame) -> Result<LandmarkFrame, LandmarkReaderError> {
    let faces = raw
        .faces
        .iter()
        .enumerate()
        .map(|(face, raw_face)| {
            let landmarks = LandmarkSet::from_points(&raw_face.landmarks).map_err(|source| {
                LandmarkReaderError::InvalidFace {
                    frame: index,
                    face,
                    source,
                }
            })?;
            Ok(DetectedFace {
                bbox: raw_face.bbox,
                landmarks,
            })
        })
        .collect::<Result<Vec<_>, LandmarkReaderError>>()?;
    Ok(LandmarkFrame::new(index, faces))
}
