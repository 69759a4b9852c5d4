//! Generic layout: common fields hoisted, specific fields under `child`.
//!
//! `GenericBody<C>` carries no bound on `C`; the common fields never depend on
//! the variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{unrecognized, Encoding, Representation};
use crate::shape::{Circle, Rectangle, Shape, ShapeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericBody<C> {
    pub x: f64,
    pub y: f64,
    pub color: String,

    pub child: C,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleChild {
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectangleChild {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GenericShape {
    Circle(GenericBody<CircleChild>),
    Rectangle(GenericBody<RectangleChild>),
    #[serde(untagged)]
    Unrecognized(Value),
}

impl Encoding for GenericShape {
    const REPR: Representation = Representation::Generic;

    fn encode(shape: &Shape) -> Self {
        match shape {
            Shape::Circle(c) => GenericShape::Circle(GenericBody {
                x: c.x,
                y: c.y,
                color: c.color.clone(),
                child: CircleChild { radius: c.radius },
            }),
            Shape::Rectangle(r) => GenericShape::Rectangle(GenericBody {
                x: r.x,
                y: r.y,
                color: r.color.clone(),
                child: RectangleChild {
                    width: r.width,
                    height: r.height,
                },
            }),
        }
    }

    fn decode(&self) -> Result<Shape, ShapeError> {
        let shape = match self {
            GenericShape::Circle(b) => {
                Shape::Circle(Circle::new(b.x, b.y, b.color.clone(), b.child.radius))
            }
            GenericShape::Rectangle(b) => Shape::Rectangle(Rectangle::new(
                b.x,
                b.y,
                b.color.clone(),
                b.child.width,
                b.child.height,
            )),
            GenericShape::Unrecognized(v) => return Err(unrecognized(v)),
        };
        shape.validate()?;
        Ok(shape)
    }
}
