//! Canonical shape model.
//!
//! Purpose
//! - One closed tagged union (`Shape`) that every operation is written against.
//!   The wire layouts in `crate::repr` map onto it losslessly.
//!
//! Invariants
//! - `radius > 0` for circles, `width > 0` and `height > 0` for rectangles, all values
//!   finite. Decoders call `Shape::validate` so the operations never see a bad shape.
//! - `color` is an opaque token compared by equality only.

mod envelope;
mod error;
mod types;

pub use envelope::Envelope;
pub use error::{ParseKindError, ShapeError};
pub use types::{Circle, Rectangle, Shape, ShapeKind};

#[cfg(test)]
mod tests;
