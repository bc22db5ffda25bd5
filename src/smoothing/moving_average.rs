use super::AnchorSmoother;
use crate::anchor::AnchorTriple;
use nalgebra::Point2;
use std::collections::VecDeque;

/// Moving average smoother
///
/// Holds the most recent `window_size` anchor triples and averages each of
/// the three points independently across them. The oldest entry is evicted
/// once the window is full.
pub struct MovingAverageSmoother {
    window_size: usize,
    history: VecDeque<AnchorTriple>,
}

impl MovingAverageSmoother {
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
            history: VecDeque::with_capacity(window_size.max(1)),
        }
    }

    /// Number of triples currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no triples are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl AnchorSmoother for MovingAverageSmoother {
    fn push(&mut self, triple: AnchorTriple) {
        if self.history.len() >= self.window_size {
            self.history.pop_front();
        }
        self.history.push_back(triple);
    }

    #[allow(clippy::cast_precision_loss)] // Window sizes are tiny
    fn average(&self) -> Option<AnchorTriple> {
        if self.history.is_empty() {
            return None;
        }

        let n = self.history.len() as f64;
        let mut left = (0.0, 0.0);
        let mut right = (0.0, 0.0);
        let mut anchor = (0.0, 0.0);
        for t in &self.history {
            left = (left.0 + t.left.x, left.1 + t.left.y);
            right = (right.0 + t.right.x, right.1 + t.right.y);
            anchor = (anchor.0 + t.anchor.x, anchor.1 + t.anchor.y);
        }

        Some(AnchorTriple {
            left: Point2::new(left.0 / n, left.1 / n),
            right: Point2::new(right.0 / n, right.1 / n),
            anchor: Point2::new(anchor.0 / n, anchor.1 / n),
        })
    }

    fn reset(&mut self) {
        self.history.clear();
    }

    fn name(&self) -> &str {
        "MovingAverageSmoother"
    }
}
