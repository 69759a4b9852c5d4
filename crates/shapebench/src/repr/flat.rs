//! Flat layout: the tag is the only structure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{unrecognized, Encoding, Representation};
use crate::shape::{Circle, Rectangle, Shape, ShapeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatCircle {
    pub x: f64,
    pub y: f64,
    pub color: String,

    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatRectangle {
    pub x: f64,
    pub y: f64,
    pub color: String,

    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FlatShape {
    Circle(FlatCircle),
    Rectangle(FlatRectangle),
    /// Anything else, kept verbatim so decode can report it.
    #[serde(untagged)]
    Unrecognized(Value),
}

impl Encoding for FlatShape {
    const REPR: Representation = Representation::Flat;

    fn encode(shape: &Shape) -> Self {
        match shape {
            Shape::Circle(c) => FlatShape::Circle(FlatCircle {
                x: c.x,
                y: c.y,
                color: c.color.clone(),
                radius: c.radius,
            }),
            Shape::Rectangle(r) => FlatShape::Rectangle(FlatRectangle {
                x: r.x,
                y: r.y,
                color: r.color.clone(),
                width: r.width,
                height: r.height,
            }),
        }
    }

    fn decode(&self) -> Result<Shape, ShapeError> {
        let shape = match self {
            FlatShape::Circle(c) => Shape::Circle(Circle::new(c.x, c.y, c.color.clone(), c.radius)),
            FlatShape::Rectangle(r) => Shape::Rectangle(Rectangle::new(
                r.x,
                r.y,
                r.color.clone(),
                r.width,
                r.height,
            )),
            FlatShape::Unrecognized(v) => return Err(unrecognized(v)),
        };
        shape.validate()?;
        Ok(shape)
    }
}
