//! Facial landmark types and the detector boundary.
//!
//! The landmark detector itself is an external collaborator. This module
//! defines the data it produces (`LandmarkSet`), the narrow capability
//! interface the pipeline consumes it through (`FaceLandmarker`), and a
//! file-backed implementation (`TraceLandmarker`) that replays a recorded
//! per-frame landmark dump so the pipeline can run without a camera or a
//! neural runtime.

use crate::{Error, Result};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// A single facial keypoint in normalized coordinates
///
/// `x` and `y` are fractions of the frame width/height in `[0, 1]`; `z` is a
/// relative depth estimate in a small range around zero, more negative when
/// the point is nearer the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One frame's worth of detected facial landmarks, in detector order
///
/// Produced once per frame and replaced by the next frame's detection. The
/// overlay core only ever reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Wrap a detector output sequence
    #[must_use]
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Number of landmarks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fetch the landmark at `index`
    ///
    /// # Errors
    ///
    /// Returns `Error::LandmarkOutOfRange` if the detector produced a shorter
    /// sequence than the configuration expects. This indicates a
    /// detector/configuration mismatch and is not recoverable per-frame.
    pub fn get(&self, index: usize) -> Result<Landmark> {
        self.points
            .get(index)
            .copied()
            .ok_or(Error::LandmarkOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Relative depth estimate at `index`
    ///
    /// # Errors
    ///
    /// Returns `Error::LandmarkOutOfRange` for an invalid index.
    pub fn depth_at(&self, index: usize) -> Result<f64> {
        Ok(f64::from(self.get(index)?.z))
    }
}

/// Narrow capability interface over the external landmark detector
///
/// Returns at most one landmark set per frame (the single most confident
/// face); `None` means no face was found and the frame passes through the
/// pipeline unmodified.
pub trait FaceLandmarker {
    /// Detect facial landmarks in a frame
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying detector fails in a way that is not
    /// simply "no face present".
    fn detect(&mut self, frame: &RgbImage) -> Result<Option<LandmarkSet>>;
}

/// Detector stand-in that never finds a face
pub struct NoopLandmarker;

impl FaceLandmarker for NoopLandmarker {
    fn detect(&mut self, _frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        Ok(None)
    }
}

/// Serialized landmark trace: one entry per frame, `null` for face-less frames
#[derive(Debug, Serialize, Deserialize)]
struct TraceFile {
    frames: Vec<Option<TraceFrame>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TraceFrame {
    points: Vec<[f32; 3]>,
}

/// Replays a recorded per-frame landmark dump as a `FaceLandmarker`
///
/// The trace is a YAML file produced by running a real detector offline; each
/// `detect` call consumes the next frame entry. Once the trace is exhausted
/// every subsequent frame is treated as face-less.
pub struct TraceLandmarker {
    frames: VecDeque<Option<LandmarkSet>>,
}

impl TraceLandmarker {
    /// Load a landmark trace from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::info!("Loading landmark trace: {}", path.as_ref().display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a landmark trace from YAML text
    ///
    /// # Errors
    ///
    /// Returns `Error::TraceError` if the text is not a valid trace.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let trace: TraceFile = serde_yaml::from_str(content)
            .map_err(|e| Error::TraceError(format!("Failed to parse trace: {e}")))?;

        let frames = trace
            .frames
            .into_iter()
            .map(|frame| {
                frame.map(|f| {
                    LandmarkSet::new(f.points.iter().map(|&[x, y, z]| Landmark::new(x, y, z)).collect())
                })
            })
            .collect();

        Ok(Self { frames })
    }

    /// Build a trace directly from landmark sets
    #[must_use]
    pub fn from_frames(frames: Vec<Option<LandmarkSet>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Number of frame entries remaining in the trace
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FaceLandmarker for TraceLandmarker {
    fn detect(&mut self, _frame: &RgbImage) -> Result<Option<LandmarkSet>> {
        Ok(self.frames.pop_front().flatten())
    }
}
