//! Stable selection by variant tag.

use super::{decode_at, Operation};
use crate::repr::Encoding;
use crate::shape::{Shape, ShapeError, ShapeKind};

/// Keep the shapes whose tag equals `kind`, in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Filter {
    pub kind: ShapeKind,
}

impl Filter {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub fn accepts(&self, shape: &Shape) -> bool {
        shape.kind() == self.kind
    }
}

/// Canonical filter. A kind absent from the input gives an empty result.
pub fn filter(shapes: &[Shape], kind: ShapeKind) -> Vec<Shape> {
    let f = Filter::new(kind);
    shapes.iter().filter(|s| f.accepts(s)).cloned().collect()
}

impl<E: Encoding> Operation<E> for Filter {
    type Partial = Vec<E>;
    type Output = Vec<E>;

    fn name(&self) -> &'static str {
        "filter"
    }

    /// Every shape is decoded (and validated) even if rejected; kept shapes are the
    /// caller's encoded values, not re-encodings.
    fn run_chunk(&self, chunk: &[E], offset: usize) -> Result<Vec<E>, ShapeError> {
        let mut kept = Vec::new();
        for (i, encoded) in chunk.iter().enumerate() {
            let shape = decode_at(encoded, offset + i)?;
            if self.accepts(&shape) {
                kept.push(encoded.clone());
            }
        }
        Ok(kept)
    }

    fn merge(&self, partials: Vec<Vec<E>>) -> Vec<E> {
        partials.into_iter().flatten().collect()
    }
}
