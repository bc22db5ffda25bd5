use super::AnchorSmoother;
use crate::anchor::AnchorTriple;
use nalgebra::Point2;

/// Exponential smoother
///
/// Blends each new triple into a running estimate with weight `alpha`, so
/// recent frames dominate without keeping a history buffer. Lower alpha means
/// heavier smoothing.
pub struct ExponentialSmoother {
    alpha: f64,
    state: Option<AnchorTriple>,
}

impl ExponentialSmoother {
    /// # Panics
    ///
    /// Panics if `alpha` is outside `(0, 1]`.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, state: None }
    }

    fn blend_point(&self, new: Point2<f64>, last: Point2<f64>) -> Point2<f64> {
        Point2::new(
            self.alpha * new.x + (1.0 - self.alpha) * last.x,
            self.alpha * new.y + (1.0 - self.alpha) * last.y,
        )
    }
}

impl AnchorSmoother for ExponentialSmoother {
    fn push(&mut self, triple: AnchorTriple) {
        let smoothed = match self.state {
            Some(last) => AnchorTriple {
                left: self.blend_point(triple.left, last.left),
                right: self.blend_point(triple.right, last.right),
                anchor: self.blend_point(triple.anchor, last.anchor),
            },
            None => triple,
        };
        self.state = Some(smoothed);
    }

    fn average(&self) -> Option<AnchorTriple> {
        self.state
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn name(&self) -> &str {
        "ExponentialSmoother"
    }
}
