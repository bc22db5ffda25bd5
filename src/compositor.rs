//! Alpha compositing of a transformed sprite into the frame buffer.

use image::{RgbImage, RgbaImage};

/// Whether the destination rectangle lies fully inside the frame
///
/// The upper bound is strict: a sprite flush with the bottom or right edge is
/// rejected, matching the skip-don't-clip contract.
#[must_use]
pub fn rect_in_bounds(
    origin_x: i64,
    origin_y: i64,
    width: u32,
    height: u32,
    frame_width: u32,
    frame_height: u32,
) -> bool {
    origin_x >= 0
        && origin_y >= 0
        && origin_x + i64::from(width) < i64::from(frame_width)
        && origin_y + i64::from(height) < i64::from(frame_height)
}

/// Alpha-blend `sprite` into `frame` with its top-left corner at the origin
///
/// Each destination pixel becomes `(1 - a) * dest + a * src` per channel,
/// with `a` the sprite pixel's alpha normalized to `[0, 1]`. If any part of
/// the destination rectangle would fall outside the frame the whole overlay
/// is skipped and the frame is left untouched; a partially drawn sprite at a
/// frame edge is a worse artifact than a missing one.
///
/// Returns whether the sprite was drawn.
#[allow(clippy::cast_possible_truncation)] // Blend result is within u8 range
#[allow(clippy::cast_sign_loss)] // Origins are non-negative after the bounds check
pub fn overlay_sprite(frame: &mut RgbImage, sprite: &RgbaImage, origin_x: i64, origin_y: i64) -> bool {
    let (frame_width, frame_height) = frame.dimensions();
    let (sprite_width, sprite_height) = sprite.dimensions();

    if !rect_in_bounds(origin_x, origin_y, sprite_width, sprite_height, frame_width, frame_height) {
        return false;
    }

    let ox = origin_x as u32;
    let oy = origin_y as u32;

    for y in 0..sprite_height {
        for x in 0..sprite_width {
            let src = sprite.get_pixel(x, y);
            let alpha = f32::from(src.0[3]) / 255.0;
            if alpha == 0.0 {
                continue;
            }

            let dest = frame.get_pixel_mut(ox + x, oy + y);
            for channel in 0..3 {
                let blended =
                    (1.0 - alpha) * f32::from(dest.0[channel]) + alpha * f32::from(src.0[channel]);
                dest.0[channel] = blended.round() as u8;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    fn solid_sprite(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn test_opaque_sprite_replaces_pixels() {
        let mut frame = solid_frame(20, 20, [0, 0, 0]);
        let sprite = solid_sprite(5, 5, [10, 20, 30, 255]);

        assert!(overlay_sprite(&mut frame, &sprite, 2, 3));
        assert_eq!(frame.get_pixel(2, 3).0, [10, 20, 30]);
        assert_eq!(frame.get_pixel(6, 7).0, [10, 20, 30]);
        // Just outside the rectangle
        assert_eq!(frame.get_pixel(7, 3).0, [0, 0, 0]);
        assert_eq!(frame.get_pixel(2, 8).0, [0, 0, 0]);
    }

    #[test]
    fn test_transparent_sprite_changes_nothing() {
        let mut frame = solid_frame(20, 20, [90, 90, 90]);
        let sprite = solid_sprite(5, 5, [255, 255, 255, 0]);

        assert!(overlay_sprite(&mut frame, &sprite, 2, 3));
        for pixel in frame.pixels() {
            assert_eq!(pixel.0, [90, 90, 90]);
        }
    }

    #[test]
    fn test_half_alpha_blend_value() {
        let mut frame = solid_frame(10, 10, [100, 100, 100]);
        let sprite = solid_sprite(2, 2, [200, 200, 200, 128]);

        assert!(overlay_sprite(&mut frame, &sprite, 1, 1));
        // a = 128/255; (1 - a) * 100 + a * 200 = 150.196 -> 150
        assert_eq!(frame.get_pixel(1, 1).0, [150, 150, 150]);
    }

    #[test]
    fn test_out_of_bounds_skips_entirely() {
        let reference = solid_frame(20, 20, [50, 60, 70]);
        let sprite = solid_sprite(6, 6, [255, 0, 0, 255]);

        // Past each edge, and straddling each edge
        let origins = [
            (-1, 5),
            (5, -1),
            (15, 5),  // 15 + 6 > 19
            (5, 15),
            (14, 14), // flush with the corner still violates the strict bound
            (100, 100),
        ];
        for (ox, oy) in origins {
            let mut frame = reference.clone();
            assert!(!overlay_sprite(&mut frame, &sprite, ox, oy), "({ox}, {oy}) should be skipped");
            assert_eq!(frame, reference, "frame must be untouched for ({ox}, {oy})");
        }
    }

    #[test]
    fn test_interior_bounds_accepted() {
        assert!(rect_in_bounds(0, 0, 5, 5, 10, 10));
        assert!(rect_in_bounds(4, 4, 5, 5, 10, 10));
        // Strict upper bound: origin + size == frame dimension is rejected
        assert!(!rect_in_bounds(5, 5, 5, 5, 10, 10));
    }
}
