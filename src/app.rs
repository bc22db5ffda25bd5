//! Application frame loop: source, detector, pipeline, sink.

use crate::landmarks::FaceLandmarker;
use crate::pipeline::OverlayPipeline;
use crate::{constants::FPS_LOG_INTERVAL_SECS, Error, Result};
use image::{imageops, RgbImage};
use log::{debug, info};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Per-frame image supplier
///
/// Frame acquisition is an external concern; the loop only needs something
/// that hands over the next frame until the stream ends.
pub trait FrameSource {
    /// Produce the next frame, or `None` at end of stream
    ///
    /// # Errors
    ///
    /// Returns an error if a frame exists but cannot be read or decoded.
    fn next_frame(&mut self) -> Result<Option<RgbImage>>;
}

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Frame source backed by a directory of image files, in name order
pub struct ImageDirSource {
    paths: VecDeque<PathBuf>,
}

impl ImageDirSource {
    /// Scan a directory for frames
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or contains no image
    /// files.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| FRAME_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            })
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(Error::InvalidInput(format!(
                "No frames found in {}",
                dir.as_ref().display()
            )));
        }

        info!("Found {} frames in {}", paths.len(), dir.as_ref().display());
        Ok(Self { paths: paths.into() })
    }
}

impl FrameSource for ImageDirSource {
    fn next_frame(&mut self) -> Result<Option<RgbImage>> {
        match self.paths.pop_front() {
            Some(path) => {
                debug!("Reading frame {}", path.display());
                Ok(Some(image::open(path)?.to_rgb8()))
            }
            None => Ok(None),
        }
    }
}

/// Options controlling the frame loop
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Directory composited frames are written into
    pub output_dir: PathBuf,
    /// Mirror each frame horizontally before processing
    pub flip_horizontal: bool,
    /// Log frame throughput once per second
    pub log_fps: bool,
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames pulled from the source
    pub frames: usize,
    /// Frames that received a sprite overlay
    pub overlays: usize,
}

/// Drives frames from a source through the overlay pipeline to disk
///
/// Strictly sequential: each frame is fully processed and written before the
/// next is read, which keeps the smoothing history coherent.
pub struct OverlayApp {
    pipeline: OverlayPipeline,
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceLandmarker>,
    options: AppOptions,
}

impl OverlayApp {
    /// Assemble the loop and create the output directory
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created.
    pub fn new(
        pipeline: OverlayPipeline,
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceLandmarker>,
        options: AppOptions,
    ) -> Result<Self> {
        std::fs::create_dir_all(&options.output_dir)?;
        Ok(Self {
            pipeline,
            source,
            detector,
            options,
        })
    }

    /// Access the pipeline, e.g. to switch the active filter between frames
    pub fn pipeline_mut(&mut self) -> &mut OverlayPipeline {
        &mut self.pipeline
    }

    /// Process every frame the source yields
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable frames, unwritable output, or a
    /// detector/configuration mismatch. Transient per-frame conditions (no
    /// face, degenerate pose, overlay out of bounds) never stop the loop.
    #[allow(clippy::cast_precision_loss)] // Frame counts are small
    pub fn run(&mut self) -> Result<FrameStats> {
        info!("Starting overlay loop, writing to {}", self.options.output_dir.display());

        let mut stats = FrameStats::default();
        let start_time = Instant::now();
        let mut last_fps_log = Instant::now();

        while let Some(mut frame) = self.source.next_frame()? {
            if self.options.flip_horizontal {
                imageops::flip_horizontal_in_place(&mut frame);
            }

            let landmarks = self.detector.detect(&frame)?;
            if self.pipeline.process_frame(&mut frame, landmarks.as_ref())?.is_some() {
                stats.overlays += 1;
            }

            let out_path = self
                .options
                .output_dir
                .join(format!("frame_{:05}.png", stats.frames));
            frame.save(&out_path)?;
            stats.frames += 1;

            if self.options.log_fps
                && last_fps_log.elapsed() >= Duration::from_secs(FPS_LOG_INTERVAL_SECS)
            {
                let fps = stats.frames as f64 / start_time.elapsed().as_secs_f64();
                info!("Processed {} frames ({fps:.1} FPS)", stats.frames);
                last_fps_log = Instant::now();
            }
        }

        info!(
            "Finished: {} frames, {} overlays drawn",
            stats.frames, stats.overlays
        );
        Ok(stats)
    }
}
