//! Full application loop: frames from disk, trace replay, composited output

mod test_helpers;

use face_overlay::app::{AppOptions, ImageDirSource, OverlayApp};
use face_overlay::filter_config::FilterKind;
use face_overlay::landmarks::TraceLandmarker;
use face_overlay::pipeline::OverlayPipeline;
use face_overlay::pose::DepthMapping;
use face_overlay::smoothing::moving_average::MovingAverageSmoother;
use image::RgbImage;
use test_helpers::{landmark_set_with, solid_asset_table, temp_dir};

fn centered_face() -> face_overlay::landmarks::LandmarkSet {
    landmark_set_with(&[
        (130, [0.4375, 0.5, 0.0]),
        (359, [0.5625, 0.5, 0.0]),
        (6, [0.5, 0.5, 0.0]),
    ])
}

#[test]
fn test_trace_driven_run_overlays_face_frames_only() {
    let frames_dir = temp_dir("app_frames");
    let out_dir = temp_dir("app_out");

    for i in 0..3 {
        RgbImage::from_pixel(640, 480, image::Rgb([20, 20, 20]))
            .save(frames_dir.join(format!("{i:03}.png")))
            .unwrap();
    }

    // Face on frames 0 and 2, nothing on frame 1
    let detector = TraceLandmarker::from_frames(vec![
        Some(centered_face()),
        None,
        Some(centered_face()),
    ]);

    let pipeline = OverlayPipeline::new(
        solid_asset_table(10, 10, [255, 0, 0, 255]),
        FilterKind::Glasses,
        Box::new(MovingAverageSmoother::new(5)),
        DepthMapping::default(),
    )
    .unwrap();

    let mut app = OverlayApp::new(
        pipeline,
        Box::new(ImageDirSource::new(&frames_dir).unwrap()),
        Box::new(detector),
        AppOptions {
            output_dir: out_dir.clone(),
            flip_horizontal: false,
            log_fps: false,
        },
    )
    .unwrap();

    let stats = app.run().unwrap();
    assert_eq!(stats.frames, 3);
    assert_eq!(stats.overlays, 2);

    // Overlaid frame carries sprite pixels at the face center
    let composited = image::open(out_dir.join("frame_00000.png")).unwrap().to_rgb8();
    assert_eq!(composited.get_pixel(320, 240).0, [255, 0, 0]);

    // The face-less frame passed through untouched
    let passthrough = image::open(out_dir.join("frame_00001.png")).unwrap().to_rgb8();
    assert!(passthrough.pixels().all(|p| p.0 == [20, 20, 20]));

    std::fs::remove_dir_all(&frames_dir).ok();
    std::fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn test_flip_mirrors_frame_before_compositing() {
    let frames_dir = temp_dir("app_flip_frames");
    let out_dir = temp_dir("app_flip_out");

    // Left half dark, right half light
    let mut frame = RgbImage::from_pixel(64, 32, image::Rgb([0, 0, 0]));
    for y in 0..32 {
        for x in 32..64 {
            frame.put_pixel(x, y, image::Rgb([250, 250, 250]));
        }
    }
    frame.save(frames_dir.join("000.png")).unwrap();

    let pipeline = OverlayPipeline::new(
        solid_asset_table(10, 10, [255, 0, 0, 255]),
        FilterKind::Glasses,
        Box::new(MovingAverageSmoother::new(5)),
        DepthMapping::default(),
    )
    .unwrap();

    let mut app = OverlayApp::new(
        pipeline,
        Box::new(ImageDirSource::new(&frames_dir).unwrap()),
        Box::new(face_overlay::landmarks::NoopLandmarker),
        AppOptions {
            output_dir: out_dir.clone(),
            flip_horizontal: true,
            log_fps: false,
        },
    )
    .unwrap();

    app.run().unwrap();

    let out = image::open(out_dir.join("frame_00000.png")).unwrap().to_rgb8();
    assert_eq!(out.get_pixel(0, 0).0, [250, 250, 250]);
    assert_eq!(out.get_pixel(63, 0).0, [0, 0, 0]);

    std::fs::remove_dir_all(&frames_dir).ok();
    std::fs::remove_dir_all(&out_dir).ok();
}
