//! Pose solving: a smoothed anchor triple to a 2D sprite placement.
//!
//! The solver turns the alignment axis into a roll angle and a width, applies
//! a depth correction approximating perspective foreshortening, and positions
//! the sprite relative to the anchor point according to the filter's record.

use crate::anchor::AnchorTriple;
use crate::constants::{DEPTH_SCALE_FAR, DEPTH_SCALE_NEAR, DEPTH_Z_FAR, DEPTH_Z_NEAR};
use crate::filter_config::FilterSpec;
use crate::utils::interp;
use crate::utils::safe_cast::{f64_to_i64, f64_to_u32};

/// A solved sprite placement for one frame
///
/// `width` and `height` are strictly positive by construction; degenerate
/// placements never produce a `Pose`. The origin is the top-left corner of
/// the destination rectangle and may lie outside the frame — the compositor
/// is responsible for bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Roll angle in degrees; positive when the right side of the face is
    /// raised toward the top of the frame
    pub angle_degrees: f64,
    /// Target sprite width in pixels
    pub width: u32,
    /// Target sprite height in pixels
    pub height: u32,
    /// Leftmost column of the destination rectangle
    pub origin_x: i64,
    /// Topmost row of the destination rectangle
    pub origin_y: i64,
}

/// Linear mapping from landmark depth to a placement-size multiplier
///
/// Nearer faces (more negative z) scale the sprite up, farther faces scale it
/// down. Inputs beyond either bound clamp to the corresponding endpoint;
/// out-of-range depth is expected and never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthMapping {
    pub z_near: f64,
    pub z_far: f64,
    pub scale_near: f64,
    pub scale_far: f64,
}

impl Default for DepthMapping {
    fn default() -> Self {
        Self {
            z_near: DEPTH_Z_NEAR,
            z_far: DEPTH_Z_FAR,
            scale_near: DEPTH_SCALE_NEAR,
            scale_far: DEPTH_SCALE_FAR,
        }
    }
}

impl DepthMapping {
    /// Size multiplier for a raw landmark depth value
    #[must_use]
    pub fn depth_scale(&self, z: f64) -> f64 {
        interp(z, self.z_near, self.z_far, self.scale_near, self.scale_far)
    }
}

/// Derives sprite placements from smoothed anchor triples
#[derive(Debug, Clone, Default)]
pub struct PoseSolver {
    depth: DepthMapping,
}

impl PoseSolver {
    #[must_use]
    pub fn new(depth: DepthMapping) -> Self {
        Self { depth }
    }

    /// The solver's depth mapping
    #[must_use]
    pub fn depth_mapping(&self) -> &DepthMapping {
        &self.depth
    }

    /// Solve the placement for one frame
    ///
    /// `z` is the raw depth at the reference landmark and `sprite_width` /
    /// `sprite_height` are the dimensions of the original sprite asset, whose
    /// aspect ratio is always preserved.
    ///
    /// Returns `None` when the placement is degenerate — a width or height
    /// that rounds to zero, or non-finite geometry — in which case the frame
    /// is left without an overlay.
    #[must_use]
    pub fn solve(
        &self,
        triple: &AnchorTriple,
        z: f64,
        spec: &FilterSpec,
        sprite_width: u32,
        sprite_height: u32,
    ) -> Option<Pose> {
        let axis = triple.right - triple.left;
        let width_f = (axis.norm() * spec.scale_factor * self.depth.depth_scale(z)).round();
        let width = f64_to_u32(width_f).ok()?;
        if width == 0 {
            return None;
        }

        // Aspect ratio of the original asset is preserved regardless of the
        // requested width
        let aspect = f64::from(sprite_height) / f64::from(sprite_width);
        let height = f64_to_u32((f64::from(width) * aspect).round()).ok()?;
        if height == 0 {
            return None;
        }

        let angle_degrees = -axis.y.atan2(axis.x).to_degrees();

        let origin_x = f64_to_i64((triple.anchor.x - f64::from(width) / 2.0).round()).ok()?;
        let origin_y =
            f64_to_i64((triple.anchor.y - f64::from(height) * spec.vertical_offset).round()).ok()?;

        Some(Pose {
            angle_degrees,
            width,
            height,
            origin_x,
            origin_y,
        })
    }
}
