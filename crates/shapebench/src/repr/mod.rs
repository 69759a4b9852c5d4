//! Wire layouts for shape collections (Flat, Composed, Generic).
//!
//! Purpose
//! - Three structurally different but equivalent JSON layouts, kept so the same
//!   workload can be benchmarked under each. All three are externally tagged:
//!   `{"Circle": {...}}` / `{"Rectangle": {...}}`.
//!
//! Layouts
//! - Flat: common and specific fields side by side under the tag.
//! - Composed: common fields nested under `base`, specific fields beside it.
//! - Generic: common fields at the top, specific fields nested under `child`.
//!
//! Decoding
//! - Unknown tags and malformed payloads deserialize into an `Unrecognized` slot that
//!   keeps the raw JSON. `decode` turns that slot into `UnrecognizedVariant` (unknown
//!   tag) or `InvalidShapeField` (known tag, bad payload), so a layout mismatch is
//!   always a hard error and never a silent filter.
//! - `decode` validates the data-model invariants (`Shape::validate`).

mod composed;
mod flat;
mod generic;

pub use composed::{ComposedBase, ComposedCircle, ComposedRectangle, ComposedShape};
pub use flat::{FlatCircle, FlatRectangle, FlatShape};
pub use generic::{CircleChild, GenericBody, GenericShape, RectangleChild};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::shape::{Shape, ShapeError, ShapeKind};

/// Layout selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    Flat,
    Composed,
    Generic,
}

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::Flat,
        Representation::Composed,
        Representation::Generic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Representation::Flat => "flat",
            Representation::Composed => "composed",
            Representation::Generic => "generic",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown layout name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRepresentationError {
    pub input: String,
}

impl fmt::Display for ParseRepresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown representation `{}` (expected flat, composed or generic)",
            self.input
        )
    }
}

impl std::error::Error for ParseRepresentationError {}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    /// Accepts the historical names too: `simple` for Flat, `object` for Composed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "simple" => Ok(Representation::Flat),
            "composed" | "object" => Ok(Representation::Composed),
            "generic" => Ok(Representation::Generic),
            _ => Err(ParseRepresentationError {
                input: s.to_string(),
            }),
        }
    }
}

/// Bidirectional mapping between one wire layout and the canonical `Shape`.
///
/// Laws:
/// - `E::encode(&s).decode() == Ok(s)` for every valid `s`.
/// - `encode` never fails and never inspects another layout.
pub trait Encoding:
    Clone + fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    const REPR: Representation;

    fn encode(shape: &Shape) -> Self;

    /// Decode and validate. Errors carry no index; callers attach one.
    fn decode(&self) -> Result<Shape, ShapeError>;
}

/// Convert a collection between layouts, failing on the first bad shape.
pub fn transcode<A: Encoding, B: Encoding>(shapes: &[A]) -> Result<Vec<B>, ShapeError> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, s)| s.decode().map(|shape| B::encode(&shape)).map_err(|e| e.at(i)))
        .collect()
}

/// Decode a whole collection into canonical shapes.
pub fn decode_all<E: Encoding>(shapes: &[E]) -> Result<Vec<Shape>, ShapeError> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, s)| s.decode().map_err(|e| e.at(i)))
        .collect()
}

/// Encode canonical shapes into one layout.
pub fn encode_all<E: Encoding>(shapes: &[Shape]) -> Vec<E> {
    shapes.iter().map(E::encode).collect()
}

/// Classify a raw value that matched no known layout variant.
pub(crate) fn unrecognized(value: &Value) -> ShapeError {
    let tag = match value {
        Value::Object(map) if map.len() == 1 => map.keys().next().cloned(),
        _ => None,
    };
    match tag {
        Some(tag) => match ShapeKind::from_tag(&tag) {
            Some(kind) => ShapeError::invalid(
                "payload",
                format!("malformed {} payload for this layout", kind.tag()),
            ),
            None => ShapeError::unrecognized(tag),
        },
        None => ShapeError::unrecognized(format!("<{}>", json_kind(value))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
