//! Composed layout: a nested `base` group plus specific fields as siblings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{unrecognized, Encoding, Representation};
use crate::shape::{Circle, Rectangle, Shape, ShapeError};

/// Common attributes shared by every variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposedBase {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposedCircle {
    pub base: ComposedBase,

    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposedRectangle {
    pub base: ComposedBase,

    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ComposedShape {
    Circle(ComposedCircle),
    Rectangle(ComposedRectangle),
    #[serde(untagged)]
    Unrecognized(Value),
}

impl Encoding for ComposedShape {
    const REPR: Representation = Representation::Composed;

    fn encode(shape: &Shape) -> Self {
        match shape {
            Shape::Circle(c) => ComposedShape::Circle(ComposedCircle {
                base: ComposedBase {
                    x: c.x,
                    y: c.y,
                    color: c.color.clone(),
                },
                radius: c.radius,
            }),
            Shape::Rectangle(r) => ComposedShape::Rectangle(ComposedRectangle {
                base: ComposedBase {
                    x: r.x,
                    y: r.y,
                    color: r.color.clone(),
                },
                width: r.width,
                height: r.height,
            }),
        }
    }

    fn decode(&self) -> Result<Shape, ShapeError> {
        let shape = match self {
            ComposedShape::Circle(ComposedCircle { base, radius }) => {
                Shape::Circle(Circle::new(base.x, base.y, base.color.clone(), *radius))
            }
            ComposedShape::Rectangle(ComposedRectangle {
                base,
                width,
                height,
            }) => Shape::Rectangle(Rectangle::new(
                base.x,
                base.y,
                base.color.clone(),
                *width,
                *height,
            )),
            ComposedShape::Unrecognized(v) => return Err(unrecognized(v)),
        };
        shape.validate()?;
        Ok(shape)
    }
}
