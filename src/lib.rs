//! Face-anchored sprite overlay library for real-time video.
//!
//! This library keeps a decorative sprite (glasses, mustache, hat, crown)
//! aligned to a moving face across video frames. It consumes the output of an
//! external facial landmark detector and handles everything from there:
//!
//! 1. Anchor extraction — three configured landmarks to pixel-space points
//! 2. Temporal smoothing — averaging recent anchors to suppress jitter
//! 3. Pose solving — roll angle, depth-corrected size and placement origin
//! 4. Sprite transformation — bilinear resize and rotation with transparency
//! 5. Alpha compositing — bounds-checked blending into the frame buffer
//!
//! The detector itself is a black box behind the
//! [`FaceLandmarker`](landmarks::FaceLandmarker) trait, so the pipeline runs
//! against synthetic fixtures, a recorded landmark trace, or a live detector
//! alike. A frame with no face — or any transient per-frame anomaly — simply
//! passes through without an overlay; the loop never halts on a bad frame.
//!
//! # Examples
//!
//! ```no_run
//! use face_overlay::config::Config;
//! use face_overlay::filter_config::FilterKind;
//! use face_overlay::pipeline::OverlayPipeline;
//!
//! # fn main() -> face_overlay::Result<()> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let mut pipeline = OverlayPipeline::new(
//!     config.load_assets()?,
//!     FilterKind::Glasses,
//!     config.create_smoother()?,
//!     config.depth.mapping(),
//! )?;
//!
//! // Per frame: detect landmarks externally, then composite in place
//! let mut frame = image::RgbImage::new(640, 480);
//! let landmarks = None; // detector found no face this frame
//! pipeline.process_frame(&mut frame, landmarks)?;
//!
//! // A key-press collaborator switches filters between frames
//! pipeline.select_key('3');
//! # Ok(())
//! # }
//! ```

/// Facial landmark types and the detector boundary
pub mod landmarks;

/// Anchor extraction from configured landmarks
pub mod anchor;

/// Temporal smoothing of anchor triples
pub mod smoothing;

/// Pose solving from smoothed anchors
pub mod pose;

/// Sprite assets and geometric transformation
pub mod sprite;

/// Alpha compositing into the frame buffer
pub mod compositor;

/// Selectable filters and their alignment records
pub mod filter_config;

/// The per-frame overlay pipeline
pub mod pipeline;

/// Application frame loop
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

/// Utility functions
pub mod utils;

pub use error::{Error, Result};
