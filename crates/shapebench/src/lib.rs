//! Batch geometry over 2D shapes, parametric in data layout and parallelism.
//!
//! Layers (leaves first)
//! - `shape`: canonical `Shape` (Circle | Rectangle), per-shape bounds, validation.
//! - `repr`: three wire layouts (Flat, Composed, Generic) with total encode and
//!   checked decode against the canonical type.
//! - `ops`: Filter, Mutate (circle → enclosing rectangle), Occupation (envelope area
//!   plus color set). Written once against `Shape`.
//! - `exec`: pipelined vs. N-way chunked execution with ordered merge and timing.
//! - `api`: one entry point per (operation, layout), returning timed results.
//!
//! Supporting modules: `document` (`{ "shapes": [...] }` JSON files) and `random`
//! (seeded shape collections for benchmarks).
//!
//! API Policy
//! - The engine keeps no state between calls. Every entry point is a pure function
//!   of its inputs apart from the measured elapsed time.

pub mod api;
pub mod document;
pub mod exec;
pub mod ops;
pub mod random;
pub mod repr;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use exec::{EngineError, ExecCfg, Strategy, Timed};
pub use repr::{ComposedShape, Encoding, FlatShape, GenericShape, Representation};
pub use shape::{Circle, Envelope, Rectangle, Shape, ShapeError, ShapeKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{
        composed_filter, composed_mutation, composed_occupation, flat_filter, flat_mutation,
        flat_occupation, generic_filter, generic_mutation, generic_occupation, FilterResult,
        MutationResult, OccupationResult,
    };
    pub use crate::document::ShapeDocument;
    pub use crate::exec::{EngineError, ExecCfg, Strategy};
    pub use crate::repr::{ComposedShape, Encoding, FlatShape, GenericShape, Representation};
    pub use crate::shape::{Circle, Envelope, Rectangle, Shape, ShapeError, ShapeKind};
}
