//! Circle → enclosing rectangle normalization (position-preserving map).

use super::{decode_at, Operation};
use crate::repr::Encoding;
use crate::shape::{Circle, Rectangle, Shape, ShapeError};

/// Minimal axis-aligned rectangle enclosing `c`; color is kept.
#[inline]
pub fn circle_to_rectangle(c: &Circle) -> Rectangle {
    let side = 2.0 * c.radius;
    Rectangle::new(c.x - c.radius, c.y - c.radius, c.color.clone(), side, side)
}

#[inline]
pub fn mutate_shape(shape: Shape) -> Shape {
    match shape {
        Shape::Circle(c) => Shape::Rectangle(circle_to_rectangle(&c)),
        rect @ Shape::Rectangle(_) => rect,
    }
}

/// Canonical mutation: same length, same order, rectangles untouched.
pub fn mutate(shapes: &[Shape]) -> Vec<Shape> {
    shapes.iter().cloned().map(mutate_shape).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mutate;

impl<E: Encoding> Operation<E> for Mutate {
    type Partial = Vec<E>;
    type Output = Vec<E>;

    fn name(&self) -> &'static str {
        "mutate"
    }

    fn run_chunk(&self, chunk: &[E], offset: usize) -> Result<Vec<E>, ShapeError> {
        let mut out = Vec::with_capacity(chunk.len());
        for (i, encoded) in chunk.iter().enumerate() {
            match decode_at(encoded, offset + i)? {
                Shape::Circle(c) => out.push(E::encode(&Shape::Rectangle(circle_to_rectangle(&c)))),
                Shape::Rectangle(_) => out.push(encoded.clone()),
            }
        }
        Ok(out)
    }

    fn merge(&self, partials: Vec<Vec<E>>) -> Vec<E> {
        partials.into_iter().flatten().collect()
    }
}
