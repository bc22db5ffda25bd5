//! The per-frame overlay pipeline and filter selection.

use crate::anchor::extract_anchors;
use crate::compositor::overlay_sprite;
use crate::constants::{DEPTH_REFERENCE_LANDMARK, NUM_FACE_LANDMARKS};
use crate::filter_config::FilterKind;
use crate::landmarks::LandmarkSet;
use crate::pose::{DepthMapping, Pose, PoseSolver};
use crate::smoothing::AnchorSmoother;
use crate::sprite::SpriteAsset;
use crate::{Error, Result};
use image::RgbImage;
use log::debug;
use std::collections::HashMap;

/// Owned session state for one overlay stream
///
/// Holds the smoother, the active filter, the sprite table and the pose
/// solver. All per-frame mutation flows through `process_frame` on a single
/// thread; independent pipelines never share state, so a second face or a
/// second stream is just a second instance.
pub struct OverlayPipeline {
    assets: HashMap<FilterKind, SpriteAsset>,
    smoother: Box<dyn AnchorSmoother>,
    solver: PoseSolver,
    active: FilterKind,
    depth_reference: usize,
}

impl OverlayPipeline {
    /// Build a pipeline over a full sprite table
    ///
    /// # Errors
    ///
    /// Fails fast on configuration problems: a filter whose landmark indices
    /// cannot exist in the detector's output, or a selectable filter without
    /// a sprite asset.
    pub fn new(
        assets: HashMap<FilterKind, SpriteAsset>,
        initial: FilterKind,
        smoother: Box<dyn AnchorSmoother>,
        depth: DepthMapping,
    ) -> Result<Self> {
        for kind in FilterKind::ALL {
            kind.spec().validate(NUM_FACE_LANDMARKS)?;
            if !assets.contains_key(&kind) {
                return Err(Error::ConfigError(format!(
                    "No sprite asset for selectable filter {kind}"
                )));
            }
        }

        log::info!(
            "Overlay pipeline ready: {} filters, {} smoothing, initial filter {initial}",
            assets.len(),
            smoother.name()
        );

        Ok(Self {
            assets,
            smoother,
            solver: PoseSolver::new(depth),
            active: initial,
            depth_reference: DEPTH_REFERENCE_LANDMARK,
        })
    }

    /// Use a different landmark as the depth reference
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the index cannot exist in the
    /// detector's output.
    pub fn with_depth_reference(mut self, index: usize) -> Result<Self> {
        if index >= NUM_FACE_LANDMARKS {
            return Err(Error::ConfigError(format!(
                "Depth reference index {index} exceeds detector output of {NUM_FACE_LANDMARKS} points"
            )));
        }
        self.depth_reference = index;
        Ok(self)
    }

    /// The currently active filter
    #[must_use]
    pub fn active(&self) -> FilterKind {
        self.active
    }

    /// Swap the active filter
    ///
    /// Resets the smoother when the filter actually changes, so the history
    /// never blends anchor geometry from two different filters. Re-selecting
    /// the current filter keeps the history warm.
    pub fn select(&mut self, kind: FilterKind) {
        if kind == self.active {
            return;
        }
        debug!("Switching filter {} -> {kind}", self.active);
        self.active = kind;
        self.smoother.reset();
    }

    /// Handle a selection key from the external keyboard collaborator
    ///
    /// Returns whether the key mapped to a filter.
    pub fn select_key(&mut self, key: char) -> bool {
        match FilterKind::from_key(key) {
            Some(kind) => {
                self.select(kind);
                true
            }
            None => false,
        }
    }

    /// Run the full overlay path for one frame, mutating it in place
    ///
    /// With no landmark set the frame passes through unmodified. A degenerate
    /// pose or a destination rectangle that leaves the frame skips the
    /// overlay for this frame only. Returns the pose that was composited, or
    /// `None` when nothing was drawn.
    ///
    /// # Errors
    ///
    /// Returns `Error::LandmarkOutOfRange` if the landmark set is shorter
    /// than the active filter's configured indices — a detector/configuration
    /// mismatch, not a transient condition.
    pub fn process_frame(
        &mut self,
        frame: &mut RgbImage,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<Option<Pose>> {
        let Some(landmarks) = landmarks else {
            return Ok(None);
        };

        let spec = self.active.spec();
        let (frame_width, frame_height) = frame.dimensions();

        let triple = extract_anchors(landmarks, frame_width, frame_height, &spec)?;
        self.smoother.push(triple);
        let Some(smoothed) = self.smoother.average() else {
            return Ok(None);
        };

        let z = landmarks.depth_at(self.depth_reference)?;

        let asset = self
            .assets
            .get(&self.active)
            .ok_or_else(|| Error::AssetError(format!("Missing sprite for {}", self.active)))?;

        let Some(pose) = self.solver.solve(&smoothed, z, &spec, asset.width(), asset.height())
        else {
            debug!("Degenerate pose, skipping overlay this frame");
            return Ok(None);
        };

        let sprite = asset.transform(&pose);
        if overlay_sprite(frame, &sprite, pose.origin_x, pose.origin_y) {
            Ok(Some(pose))
        } else {
            debug!(
                "Destination rectangle ({}, {}) {}x{} leaves the frame, skipping overlay",
                pose.origin_x, pose.origin_y, pose.width, pose.height
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::moving_average::MovingAverageSmoother;
    use crate::smoothing::PassthroughSmoother;
    use image::{Rgba, RgbaImage};

    fn full_asset_table() -> HashMap<FilterKind, SpriteAsset> {
        FilterKind::ALL
            .into_iter()
            .map(|kind| {
                let image = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
                (kind, SpriteAsset::from_image(image).unwrap())
            })
            .collect()
    }

    fn pipeline() -> OverlayPipeline {
        OverlayPipeline::new(
            full_asset_table(),
            FilterKind::Glasses,
            Box::new(MovingAverageSmoother::new(5)),
            DepthMapping::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_asset_is_config_error() {
        let mut assets = full_asset_table();
        assets.remove(&FilterKind::Crown);
        let result = OverlayPipeline::new(
            assets,
            FilterKind::Glasses,
            Box::new(PassthroughSmoother::new()),
            DepthMapping::default(),
        );
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_no_landmarks_passes_frame_through() {
        let mut p = pipeline();
        let mut frame = RgbImage::from_pixel(64, 64, image::Rgb([7, 7, 7]));
        let reference = frame.clone();

        let pose = p.process_frame(&mut frame, None).unwrap();
        assert!(pose.is_none());
        assert_eq!(frame, reference);
    }

    #[test]
    fn test_select_same_filter_keeps_history() {
        let mut p = pipeline();
        assert_eq!(p.active(), FilterKind::Glasses);
        p.select(FilterKind::Glasses);
        assert_eq!(p.active(), FilterKind::Glasses);
    }

    #[test]
    fn test_depth_reference_validated() {
        assert!(pipeline().with_depth_reference(10).is_ok());
        assert!(pipeline().with_depth_reference(100_000).is_err());
    }

    #[test]
    fn test_select_key_lookup() {
        let mut p = pipeline();
        assert!(p.select_key('3'));
        assert_eq!(p.active(), FilterKind::Hat);
        assert!(!p.select_key('x'));
        assert_eq!(p.active(), FilterKind::Hat);
    }
}
