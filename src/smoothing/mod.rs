//! Temporal smoothing of anchor triples.
//!
//! Raw per-frame detections jitter by a pixel or two even on a still face,
//! which reads as sprite shake. Smoothing trades a few frames of lag for
//! rejecting that single-frame noise.

/// Moving average smoother over a bounded history window
pub mod moving_average;

/// Exponential smoother for responsive low-lag smoothing
pub mod exponential;

use crate::anchor::AnchorTriple;
use crate::constants::{DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_SMOOTHING_WINDOW};
use crate::Result;

/// Trait for all anchor smoothers
pub trait AnchorSmoother: Send + Sync {
    /// Record this frame's anchor triple
    fn push(&mut self, triple: AnchorTriple);

    /// Current smoothed estimate, or `None` if nothing has been pushed
    fn average(&self) -> Option<AnchorTriple>;

    /// Discard all smoothing state
    ///
    /// Called when the active filter changes, so history never blends anchor
    /// geometry from two different filters.
    fn reset(&mut self);

    /// Get smoother name
    fn name(&self) -> &str;
}

/// No-op smoother that returns the last pushed triple unchanged
#[derive(Default)]
pub struct PassthroughSmoother {
    last: Option<AnchorTriple>,
}

impl PassthroughSmoother {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnchorSmoother for PassthroughSmoother {
    fn push(&mut self, triple: AnchorTriple) {
        self.last = Some(triple);
    }

    fn average(&self) -> Option<AnchorTriple> {
        self.last
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "PassthroughSmoother"
    }
}

/// Create an anchor smoother by type name
///
/// # Errors
///
/// Returns `Error::SmoothingError` for an unknown smoother name.
pub fn create_smoother(smoother_type: &str) -> Result<Box<dyn AnchorSmoother>> {
    match smoother_type.to_lowercase().as_str() {
        "none" | "passthrough" => Ok(Box::new(PassthroughSmoother::new())),
        "moving_average" | "movingaverage" => Ok(Box::new(moving_average::MovingAverageSmoother::new(
            DEFAULT_SMOOTHING_WINDOW,
        ))),
        "exponential" => Ok(Box::new(exponential::ExponentialSmoother::new(
            DEFAULT_EXPONENTIAL_ALPHA,
        ))),
        _ => Err(crate::Error::SmoothingError(format!(
            "Unknown smoother type: {smoother_type}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn triple(x: f64, y: f64) -> AnchorTriple {
        AnchorTriple {
            left: Point2::new(x, y),
            right: Point2::new(x + 10.0, y),
            anchor: Point2::new(x + 5.0, y + 5.0),
        }
    }

    #[test]
    fn test_passthrough() {
        let mut smoother = PassthroughSmoother::new();
        assert!(smoother.average().is_none());

        smoother.push(triple(1.0, 2.0));
        smoother.push(triple(9.0, 9.0));
        assert_eq!(smoother.average(), Some(triple(9.0, 9.0)));

        smoother.reset();
        assert!(smoother.average().is_none());
    }

    #[test]
    fn test_create_smoother() {
        assert!(create_smoother("none").is_ok());
        assert!(create_smoother("moving_average").is_ok());
        assert!(create_smoother("Exponential").is_ok());
        assert!(create_smoother("kalman").is_err());
    }
}
