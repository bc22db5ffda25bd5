//! Configuration management for the face overlay application

use crate::constants::{
    DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_SMOOTHING_WINDOW, DEPTH_REFERENCE_LANDMARK, DEPTH_SCALE_FAR,
    DEPTH_SCALE_NEAR, DEPTH_Z_FAR, DEPTH_Z_NEAR, NUM_FACE_LANDMARKS,
};
use crate::filter_config::FilterKind;
use crate::pose::DepthMapping;
use crate::smoothing::{exponential::ExponentialSmoother, moving_average::MovingAverageSmoother, AnchorSmoother, PassthroughSmoother};
use crate::sprite::SpriteAsset;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sprite asset paths
    pub sprites: SpriteConfig,

    /// Anchor smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Depth-to-scale mapping configuration
    pub depth: DepthConfig,

    /// Frame handling configuration
    pub display: DisplayConfig,
}

/// Sprite asset paths, one per selectable filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// Path to the glasses sprite (RGBA)
    pub glasses: PathBuf,

    /// Path to the mustache sprite (RGBA)
    pub mustache: PathBuf,

    /// Path to the hat sprite (RGBA)
    pub hat: PathBuf,

    /// Path to the crown sprite (RGBA)
    pub crown: PathBuf,
}

/// Anchor smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Default smoother type
    pub smoother: String,

    /// Moving average window size (frames)
    pub window: usize,

    /// Exponential smoother alpha value
    pub exponential_alpha: f64,
}

/// Depth-to-scale mapping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthConfig {
    /// Landmark whose depth estimate drives the scaling
    pub reference_index: usize,

    /// Depth at which the sprite reaches its largest scale
    pub z_near: f64,

    /// Depth at which the sprite reaches its smallest scale
    pub z_far: f64,

    /// Size multiplier at `z_near`
    pub scale_near: f64,

    /// Size multiplier at `z_far`
    pub scale_far: f64,
}

/// Frame handling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mirror each input frame horizontally before processing
    pub flip_horizontal: bool,

    /// Log frame throughput once per second
    pub log_fps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprites: SpriteConfig::default(),
            smoothing: SmoothingConfig::default(),
            depth: DepthConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            glasses: PathBuf::from("assets/glasses.png"),
            mustache: PathBuf::from("assets/mustache.png"),
            hat: PathBuf::from("assets/hat.png"),
            crown: PathBuf::from("assets/crown.png"),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smoother: "moving_average".to_string(),
            window: DEFAULT_SMOOTHING_WINDOW,
            exponential_alpha: DEFAULT_EXPONENTIAL_ALPHA,
        }
    }
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            reference_index: DEPTH_REFERENCE_LANDMARK,
            z_near: DEPTH_Z_NEAR,
            z_far: DEPTH_Z_FAR,
            scale_near: DEPTH_SCALE_NEAR,
            scale_far: DEPTH_SCALE_FAR,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            log_fps: true,
        }
    }
}

impl SpriteConfig {
    /// Sprite path for a selectable filter
    #[must_use]
    pub fn path_for(&self, kind: FilterKind) -> &Path {
        match kind {
            FilterKind::Glasses => &self.glasses,
            FilterKind::Mustache => &self.mustache,
            FilterKind::Hat => &self.hat,
            FilterKind::Crown => &self.crown,
        }
    }
}

impl DepthConfig {
    /// Convert to the solver's depth mapping
    #[must_use]
    pub fn mapping(&self) -> DepthMapping {
        DepthMapping {
            z_near: self.z_near,
            z_far: self.z_far,
            scale_near: self.scale_near,
            scale_far: self.scale_far,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create an anchor smoother from configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::SmoothingError` for an unknown smoother name.
    pub fn create_smoother(&self) -> Result<Box<dyn AnchorSmoother>> {
        match self.smoothing.smoother.as_str() {
            "moving_average" | "movingaverage" => {
                Ok(Box::new(MovingAverageSmoother::new(self.smoothing.window)))
            }
            "exponential" => Ok(Box::new(ExponentialSmoother::new(
                self.smoothing.exponential_alpha,
            ))),
            "none" | "passthrough" => Ok(Box::new(PassthroughSmoother::new())),
            name => Err(Error::SmoothingError(format!("Unknown smoother type: {name}"))),
        }
    }

    /// Load every selectable filter's sprite asset
    ///
    /// # Errors
    ///
    /// Returns an error if any sprite file is missing or undecodable.
    pub fn load_assets(&self) -> Result<HashMap<FilterKind, SpriteAsset>> {
        FilterKind::ALL
            .into_iter()
            .map(|kind| Ok((kind, SpriteAsset::from_path(self.sprites.path_for(kind))?)))
            .collect()
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }
        if !(self.smoothing.exponential_alpha > 0.0 && self.smoothing.exponential_alpha <= 1.0) {
            return Err(Error::ConfigError(
                "Exponential alpha must be in (0, 1]".to_string(),
            ));
        }

        if self.depth.z_near >= self.depth.z_far {
            return Err(Error::ConfigError(
                "Depth z_near must be less than z_far".to_string(),
            ));
        }
        if self.depth.scale_near <= 0.0 || self.depth.scale_far <= 0.0 {
            return Err(Error::ConfigError(
                "Depth scale bounds must be positive".to_string(),
            ));
        }
        if self.depth.reference_index >= NUM_FACE_LANDMARKS {
            return Err(Error::ConfigError(format!(
                "Depth reference index {} exceeds detector output of {NUM_FACE_LANDMARKS} points",
                self.depth.reference_index
            )));
        }

        for kind in FilterKind::ALL {
            let path = self.sprites.path_for(kind);
            if !path.exists() {
                return Err(Error::ConfigError(format!(
                    "Sprite for {kind} not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Overlay Configuration

# Sprite assets (RGBA images, one per selectable filter)
sprites:
  glasses: "assets/glasses.png"
  mustache: "assets/mustache.png"
  hat: "assets/hat.png"
  crown: "assets/crown.png"

# Anchor smoothing
smoothing:
  smoother: "moving_average"
  window: 5
  exponential_alpha: 0.5

# Depth-to-scale mapping
depth:
  reference_index: 6
  z_near: -0.15
  z_far: 0.15
  scale_near: 1.2
  scale_far: 0.8

# Frame handling
display:
  flip_horizontal: true
  log_fps: true
"#;
