//! Tests for sprite transformation and compositing working together

mod test_helpers;

use face_overlay::compositor::overlay_sprite;
use face_overlay::pose::Pose;
use image::RgbImage;
use test_helpers::solid_sprite;

fn pose(width: u32, height: u32, angle_degrees: f64) -> Pose {
    Pose {
        angle_degrees,
        width,
        height,
        origin_x: 0,
        origin_y: 0,
    }
}

#[test]
fn test_opaque_transform_then_composite_copies_source() {
    let asset = solid_sprite(40, 20, [12, 34, 56, 255]);
    let transformed = asset.transform(&pose(20, 10, 0.0));

    let mut frame = RgbImage::from_pixel(100, 100, image::Rgb([200, 200, 200]));
    assert!(overlay_sprite(&mut frame, &transformed, 30, 40));

    for y in 40..50 {
        for x in 30..50 {
            assert_eq!(frame.get_pixel(x, y).0, [12, 34, 56]);
        }
    }
    assert_eq!(frame.get_pixel(29, 40).0, [200, 200, 200]);
    assert_eq!(frame.get_pixel(30, 50).0, [200, 200, 200]);
}

#[test]
fn test_rotation_exposed_corners_leave_frame_untouched() {
    let asset = solid_sprite(40, 40, [255, 255, 255, 255]);
    let transformed = asset.transform(&pose(40, 40, 45.0));

    let mut frame = RgbImage::from_pixel(100, 100, image::Rgb([10, 10, 10]));
    assert!(overlay_sprite(&mut frame, &transformed, 10, 10));

    // Rotation swung the square's corners out of the canvas; the transparent
    // fill must not darken the frame beneath them
    assert_eq!(frame.get_pixel(10, 10).0, [10, 10, 10]);
    assert_eq!(frame.get_pixel(49, 10).0, [10, 10, 10]);
    assert_eq!(frame.get_pixel(10, 49).0, [10, 10, 10]);
    assert_eq!(frame.get_pixel(49, 49).0, [10, 10, 10]);
    // The rotated body still lands
    assert_eq!(frame.get_pixel(30, 30).0, [255, 255, 255]);
}

#[test]
fn test_half_transparent_sprite_blends() {
    let asset = solid_sprite(10, 10, [0, 0, 0, 128]);
    let transformed = asset.transform(&pose(10, 10, 0.0));

    let mut frame = RgbImage::from_pixel(50, 50, image::Rgb([255, 255, 255]));
    assert!(overlay_sprite(&mut frame, &transformed, 20, 20));

    // a = 128/255; (1 - a) * 255 + a * 0 = 127.0 -> 127
    assert_eq!(frame.get_pixel(25, 25).0, [127, 127, 127]);
}

#[test]
fn test_composite_skipped_when_transform_exceeds_frame() {
    let asset = solid_sprite(10, 10, [255, 0, 0, 255]);
    let transformed = asset.transform(&pose(60, 60, 0.0));

    let mut frame = RgbImage::from_pixel(50, 50, image::Rgb([1, 2, 3]));
    let reference = frame.clone();
    assert!(!overlay_sprite(&mut frame, &transformed, 0, 0));
    assert_eq!(frame, reference);
}
