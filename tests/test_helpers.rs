//! Helper functions and utilities for tests

#![allow(dead_code)]

use face_overlay::constants::NUM_FACE_LANDMARKS;
use face_overlay::filter_config::FilterKind;
use face_overlay::landmarks::{Landmark, LandmarkSet};
use face_overlay::sprite::SpriteAsset;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;

/// Create a full-size landmark set with every point at the origin
pub fn zeroed_landmark_set() -> LandmarkSet {
    LandmarkSet::new(vec![Landmark::default(); NUM_FACE_LANDMARKS])
}

/// Create a full-size landmark set with specific points overridden
///
/// Entries are `(index, [x, y, z])` in normalized coordinates.
pub fn landmark_set_with(points: &[(usize, [f32; 3])]) -> LandmarkSet {
    let mut all = vec![Landmark::default(); NUM_FACE_LANDMARKS];
    for &(index, [x, y, z]) in points {
        all[index] = Landmark::new(x, y, z);
    }
    LandmarkSet::new(all)
}

/// Create a single-color sprite asset with uniform alpha
pub fn solid_sprite(width: u32, height: u32, rgba: [u8; 4]) -> SpriteAsset {
    SpriteAsset::from_image(RgbaImage::from_pixel(width, height, Rgba(rgba))).unwrap()
}

/// Sprite table assigning the same solid sprite to every selectable filter
pub fn solid_asset_table(width: u32, height: u32, rgba: [u8; 4]) -> HashMap<FilterKind, SpriteAsset> {
    FilterKind::ALL
        .into_iter()
        .map(|kind| (kind, solid_sprite(width, height, rgba)))
        .collect()
}

/// Per-test temporary directory, removed by the caller
pub fn temp_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("face_overlay_test_{tag}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
