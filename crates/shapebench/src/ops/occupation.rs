//! Occupation: union envelope of all shapes plus the set of colors used.
//!
//! The fold is a commutative monoid on `Occupancy`: `Occupancy::default()` (no
//! envelope, no colors) is the identity and absorbs nothing, so empty chunks can
//! be merged anywhere without bending the `min`/`max` fold.

use std::collections::BTreeSet;

use super::{decode_at, Operation};
use crate::repr::Encoding;
use crate::shape::{Envelope, Shape, ShapeError};

/// Partial or final occupation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Occupancy {
    /// `None` until the first shape is added.
    pub envelope: Option<Envelope>,
    /// Sorted, duplicates collapsed.
    pub colors: BTreeSet<String>,
}

impl Occupancy {
    pub fn add(&mut self, shape: &Shape) {
        let b = shape.bounds();
        self.envelope = Some(match self.envelope {
            Some(e) => e.union(&b),
            None => b,
        });
        if !self.colors.contains(shape.color()) {
            self.colors.insert(shape.color().to_string());
        }
    }

    pub fn merge(mut self, other: Occupancy) -> Occupancy {
        self.envelope = match (self.envelope, other.envelope) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        };
        self.colors.extend(other.colors);
        self
    }

    /// Envelope area; `0` for an empty collection.
    pub fn area(&self) -> f64 {
        self.envelope.map_or(0.0, |e| e.area())
    }
}

/// Canonical occupation over decoded shapes.
pub fn occupation(shapes: &[Shape]) -> Occupancy {
    let mut acc = Occupancy::default();
    for s in shapes {
        acc.add(s);
    }
    acc
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupation;

impl<E: Encoding> Operation<E> for Occupation {
    type Partial = Occupancy;
    type Output = Occupancy;

    fn name(&self) -> &'static str {
        "occupation"
    }

    fn run_chunk(&self, chunk: &[E], offset: usize) -> Result<Occupancy, ShapeError> {
        let mut acc = Occupancy::default();
        for (i, encoded) in chunk.iter().enumerate() {
            acc.add(&decode_at(encoded, offset + i)?);
        }
        Ok(acc)
    }

    fn merge(&self, partials: Vec<Occupancy>) -> Occupancy {
        partials
            .into_iter()
            .fold(Occupancy::default(), Occupancy::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Rectangle};
    use nalgebra::vector;

    #[test]
    fn empty_input_occupies_nothing() {
        let occ = occupation(&[]);
        assert_eq!(occ.envelope, None);
        assert_eq!(occ.area(), 0.0);
        assert!(occ.colors.is_empty());
    }

    #[test]
    fn single_rectangle() {
        let occ = occupation(&[Rectangle::new(0.0, 0.0, "a", 20.0, 10.0).into()]);
        assert_eq!(occ.area(), 200.0);
    }

    #[test]
    fn disjoint_rectangles_use_envelope_not_sum() {
        let occ = occupation(&[
            Rectangle::new(0.0, 0.0, "a", 10.0, 10.0).into(),
            Rectangle::new(20.0, 20.0, "a", 10.0, 10.0).into(),
        ]);
        let env = occ.envelope.unwrap();
        assert_eq!(env.min, vector![0.0, 0.0]);
        assert_eq!(env.max, vector![30.0, 30.0]);
        assert_eq!(occ.area(), 900.0);
        assert_eq!(occ.colors.len(), 1);
    }

    #[test]
    fn circles_extend_by_radius() {
        let occ = occupation(&[
            Circle::new(0.0, 0.0, "red", 1.0).into(),
            Rectangle::new(2.0, 2.0, "blue", 1.0, 1.0).into(),
            Circle::new(0.0, 0.0, "red", 0.5).into(),
        ]);
        let env = occ.envelope.unwrap();
        assert_eq!(env.min, vector![-1.0, -1.0]);
        assert_eq!(env.max, vector![3.0, 3.0]);
        assert_eq!(occ.area(), 16.0);
        let colors: Vec<_> = occ.colors.iter().map(String::as_str).collect();
        assert_eq!(colors, ["blue", "red"]);
    }

    #[test]
    fn empty_partials_are_identity() {
        let full = occupation(&[
            Rectangle::new(-5.0, 1.0, "a", 1.0, 1.0).into(),
            Circle::new(4.0, 4.0, "b", 2.0).into(),
        ]);
        let merged = Occupancy::default()
            .merge(full.clone())
            .merge(Occupancy::default());
        assert_eq!(merged, full);
    }
}
