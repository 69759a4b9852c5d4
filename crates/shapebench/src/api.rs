//! Engine entry points: one per (operation, layout).
//!
//! Each entry point takes a collection in one wire layout plus `ExecCfg` and returns a
//! timed result whose shapes stay in that same layout. Decoding to canonical shapes
//! happens inside the engine and is never exposed.
//!
//! | Operation  | Flat                | Composed                | Generic                |
//! |------------|---------------------|-------------------------|------------------------|
//! | Filter     | [`flat_filter`]     | [`composed_filter`]     | [`generic_filter`]     |
//! | Mutate     | [`flat_mutation`]   | [`composed_mutation`]   | [`generic_mutation`]   |
//! | Occupation | [`flat_occupation`] | [`composed_occupation`] | [`generic_occupation`] |

use serde::Serialize;

use crate::exec::{execute, EngineError, ExecCfg};
use crate::ops::{Filter, Mutate, Occupation};
use crate::repr::{ComposedShape, Encoding, FlatShape, GenericShape};
use crate::shape::{Envelope, ShapeKind};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult<E> {
    pub filtered: Vec<E>,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult<E> {
    pub values: Vec<E>,
    pub elapsed_ms: f64,
}

/// `occupation` is the envelope area (0 for an empty input), not a sum of areas.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationResult {
    pub occupation: f64,
    pub elapsed_ms: f64,
    /// `None` for an empty input.
    pub region: Option<Envelope>,
    /// Sorted distinct colors.
    pub colors: Vec<String>,
}

/// Filter by kind in any layout.
pub fn filter<E: Encoding>(
    shapes: &[E],
    kind: ShapeKind,
    cfg: ExecCfg,
) -> Result<FilterResult<E>, EngineError> {
    let timed = execute(&Filter::new(kind), shapes, cfg)?;
    Ok(FilterResult {
        filtered: timed.value,
        elapsed_ms: timed.elapsed_ms,
    })
}

/// Circle → rectangle mutation in any layout.
pub fn mutation<E: Encoding>(shapes: &[E], cfg: ExecCfg) -> Result<MutationResult<E>, EngineError> {
    let timed = execute(&Mutate, shapes, cfg)?;
    Ok(MutationResult {
        values: timed.value,
        elapsed_ms: timed.elapsed_ms,
    })
}

/// Occupation in any layout.
pub fn occupation<E: Encoding>(shapes: &[E], cfg: ExecCfg) -> Result<OccupationResult, EngineError> {
    let timed = execute(&Occupation, shapes, cfg)?;
    let occ = timed.value;
    Ok(OccupationResult {
        occupation: occ.area(),
        elapsed_ms: timed.elapsed_ms,
        region: occ.envelope,
        colors: occ.colors.into_iter().collect(),
    })
}

pub fn flat_filter(
    shapes: &[FlatShape],
    kind: ShapeKind,
    cfg: ExecCfg,
) -> Result<FilterResult<FlatShape>, EngineError> {
    filter(shapes, kind, cfg)
}

pub fn flat_mutation(
    shapes: &[FlatShape],
    cfg: ExecCfg,
) -> Result<MutationResult<FlatShape>, EngineError> {
    mutation(shapes, cfg)
}

pub fn flat_occupation(shapes: &[FlatShape], cfg: ExecCfg) -> Result<OccupationResult, EngineError> {
    occupation(shapes, cfg)
}

pub fn composed_filter(
    shapes: &[ComposedShape],
    kind: ShapeKind,
    cfg: ExecCfg,
) -> Result<FilterResult<ComposedShape>, EngineError> {
    filter(shapes, kind, cfg)
}

pub fn composed_mutation(
    shapes: &[ComposedShape],
    cfg: ExecCfg,
) -> Result<MutationResult<ComposedShape>, EngineError> {
    mutation(shapes, cfg)
}

pub fn composed_occupation(
    shapes: &[ComposedShape],
    cfg: ExecCfg,
) -> Result<OccupationResult, EngineError> {
    occupation(shapes, cfg)
}

pub fn generic_filter(
    shapes: &[GenericShape],
    kind: ShapeKind,
    cfg: ExecCfg,
) -> Result<FilterResult<GenericShape>, EngineError> {
    filter(shapes, kind, cfg)
}

pub fn generic_mutation(
    shapes: &[GenericShape],
    cfg: ExecCfg,
) -> Result<MutationResult<GenericShape>, EngineError> {
    mutation(shapes, cfg)
}

pub fn generic_occupation(
    shapes: &[GenericShape],
    cfg: ExecCfg,
) -> Result<OccupationResult, EngineError> {
    occupation(shapes, cfg)
}
