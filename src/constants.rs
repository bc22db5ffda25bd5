//! Constants used throughout the application

/// Number of facial landmarks produced by the mesh detector
pub const NUM_FACE_LANDMARKS: usize = 468;

/// Outer corner of the left eye
pub const LEFT_EYE_OUTER: usize = 130;

/// Outer corner of the right eye
pub const RIGHT_EYE_OUTER: usize = 359;

/// Bridge of the nose, between the eyes
pub const NOSE_BRIDGE: usize = 6;

/// Left cheek, beside the nostril
pub const LEFT_CHEEK: usize = 205;

/// Right cheek, beside the nostril
pub const RIGHT_CHEEK: usize = 425;

/// Center of the upper lip
pub const UPPER_LIP: usize = 164;

/// Top of the forehead at the hairline
pub const FOREHEAD_TOP: usize = 10;

/// Landmark whose depth estimate drives perspective scaling
pub const DEPTH_REFERENCE_LANDMARK: usize = NOSE_BRIDGE;

/// Depth mapping input range (relative landmark depth, nearer is more negative)
pub const DEPTH_Z_NEAR: f64 = -0.15;
pub const DEPTH_Z_FAR: f64 = 0.15;

/// Depth mapping output range (size multiplier, nearer face draws larger)
pub const DEPTH_SCALE_NEAR: f64 = 1.2;
pub const DEPTH_SCALE_FAR: f64 = 0.8;

/// Default anchor smoothing window (frames)
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Default exponential smoother alpha
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;

/// Interval between FPS log lines
pub const FPS_LOG_INTERVAL_SECS: u64 = 1;
