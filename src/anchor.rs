//! Anchor extraction: configured landmarks to pixel-space points.

use crate::filter_config::FilterSpec;
use crate::landmarks::LandmarkSet;
use crate::Result;
use nalgebra::Point2;

/// The three pixel-space points a sprite placement is derived from
///
/// `left` and `right` give the alignment axis (width and roll), `anchor` the
/// placement origin. Recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTriple {
    pub left: Point2<f64>,
    pub right: Point2<f64>,
    pub anchor: Point2<f64>,
}

/// Read the three configured landmarks and scale them to pixel space
///
/// Coordinates are scaled exactly by the frame dimensions; no rounding
/// happens at this stage.
///
/// # Errors
///
/// Returns `Error::LandmarkOutOfRange` if the landmark set is shorter than a
/// configured index. This is a fatal detector/configuration mismatch, not a
/// per-frame anomaly.
pub fn extract_anchors(
    landmarks: &LandmarkSet,
    frame_width: u32,
    frame_height: u32,
    spec: &FilterSpec,
) -> Result<AnchorTriple> {
    let to_pixels = |index: usize| -> Result<Point2<f64>> {
        let lm = landmarks.get(index)?;
        Ok(Point2::new(
            f64::from(lm.x) * f64::from(frame_width),
            f64::from(lm.y) * f64::from(frame_height),
        ))
    };

    Ok(AnchorTriple {
        left: to_pixels(spec.left)?,
        right: to_pixels(spec.right)?,
        anchor: to_pixels(spec.anchor)?,
    })
}
