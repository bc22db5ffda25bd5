//! Sprite assets and their per-frame geometric transform.

use crate::pose::Pose;
use crate::{Error, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use std::path::Path;

/// A decorative sprite with per-pixel alpha, fixed at load time
///
/// One asset per filter, shared across frames; compositing never mutates it.
pub struct SpriteAsset {
    image: RgbaImage,
}

impl SpriteAsset {
    /// Load a sprite from an image file, keeping its alpha channel
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if the
    /// image has a zero dimension. Sprite loading happens before the frame
    /// loop; a bad asset is a fatal startup error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::info!("Loading sprite asset: {}", path.as_ref().display());
        let image = image::open(path.as_ref())
            .map_err(|e| Error::AssetError(format!("{}: {e}", path.as_ref().display())))?
            .to_rgba8();
        Self::from_image(image)
    }

    /// Wrap an in-memory RGBA image as a sprite
    ///
    /// # Errors
    ///
    /// Returns `Error::AssetError` if either dimension is zero.
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::AssetError(format!(
                "Sprite must have non-zero dimensions, got {}x{}",
                image.width(),
                image.height()
            )));
        }
        Ok(Self { image })
    }

    /// Sprite width in pixels
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Sprite height in pixels
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Resize and rotate the sprite to match a solved pose
    ///
    /// The sprite is resized with bilinear interpolation to the pose
    /// dimensions, then rotated about its own center by the pose angle. Area
    /// exposed by the rotation is fully transparent rather than cropped or
    /// wrapped, and the canvas keeps the resized dimensions. An exact zero
    /// angle skips the rotation pass: resampling a straight-on sprite would
    /// only soften its edges.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Angle magnitudes are tiny
    pub fn transform(&self, pose: &Pose) -> RgbaImage {
        let resized = imageops::resize(&self.image, pose.width, pose.height, FilterType::Triangle);
        if pose.angle_degrees == 0.0 {
            return resized;
        }

        // Positive roll (right side of the face raised) turns the sprite
        // counter-clockwise on screen; the rotation call takes its angle
        // clockwise, hence the negation.
        let theta = (-pose.angle_degrees).to_radians() as f32;
        rotate_about_center(&resized, theta, Interpolation::Bilinear, Rgba([0, 0, 0, 0]))
    }
}
