//! Primitive batch operations: Filter, Mutate, Occupation.
//!
//! Each operation exists twice, sharing one per-shape rule:
//! - a plain function over canonical `&[Shape]` (`filter`, `mutate`, `occupation`),
//! - an `Operation` impl that processes one chunk of encoded shapes and merges the
//!   per-chunk partials. `crate::exec` decides how many chunks there are.
//!
//! Nothing in here is concurrent; parallelism lives only in `crate::exec`.

mod filter;
mod mutate;
mod occupation;

pub use filter::{filter, Filter};
pub use mutate::{circle_to_rectangle, mutate, mutate_shape, Mutate};
pub use occupation::{occupation, Occupancy, Occupation};

use crate::repr::Encoding;
use crate::shape::{Shape, ShapeError};

/// Chunk-wise form of a batch operation over layout `E`.
///
/// Contract:
/// - `run_chunk` on an empty chunk returns the merge identity.
/// - `merge` receives partials in chunk order (input order), never completion order.
/// - Merging the partials of any contiguous split equals running one chunk over the
///   whole input.
pub trait Operation<E: Encoding>: Sync {
    type Partial: Send;
    type Output;

    fn name(&self) -> &'static str;

    /// Process `chunk`, whose first element sits at `offset` in the full input.
    fn run_chunk(&self, chunk: &[E], offset: usize) -> Result<Self::Partial, ShapeError>;

    fn merge(&self, partials: Vec<Self::Partial>) -> Self::Output;
}

#[inline]
pub(crate) fn decode_at<E: Encoding>(encoded: &E, index: usize) -> Result<Shape, ShapeError> {
    encoded.decode().map_err(|e| e.at(index))
}
