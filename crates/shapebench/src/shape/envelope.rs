//! Axis-aligned envelopes (bounding boxes).

use nalgebra::Vector2;
use serde::Serialize;

/// Closed box `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariants:
/// - `min <= max` componentwise for envelopes built from valid shapes.
/// - `union` is associative and commutative, so folding order never matters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Envelope {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Envelope {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest envelope containing both.
    #[inline]
    pub fn union(&self, other: &Envelope) -> Envelope {
        Envelope {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `(right - left) * (bottom - top)`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}
