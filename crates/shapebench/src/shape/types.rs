//! Circle, Rectangle and the `Shape` union.

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

use super::envelope::Envelope;
use super::error::{ParseKindError, ShapeError};

/// Circle centered at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub radius: f64,
}

/// Axis-aligned rectangle with top-left corner `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub width: f64,
    pub height: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, color: impl Into<String>, radius: f64) -> Self {
        Self {
            x,
            y,
            color: color.into(),
            radius,
        }
    }
}

impl Rectangle {
    pub fn new(x: f64, y: f64, color: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            color: color.into(),
            width,
            height,
        }
    }
}

/// Variant discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    /// Wire tag (`"Circle"` / `"Rectangle"`).
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }

    /// Exact wire tag lookup; tags are case-sensitive on the wire.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => f.write_str("circle"),
            ShapeKind::Rectangle => f.write_str("rectangle"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}

/// Canonical shape: exactly one variant is active.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    #[inline]
    pub fn color(&self) -> &str {
        match self {
            Shape::Circle(c) => &c.color,
            Shape::Rectangle(r) => &r.color,
        }
    }

    /// Own bounding box: `[x-r, x+r] × [y-r, y+r]` or `[x, x+w] × [y, y+h]`.
    #[inline]
    pub fn bounds(&self) -> Envelope {
        match self {
            Shape::Circle(c) => Envelope::new(
                Vector2::new(c.x - c.radius, c.y - c.radius),
                Vector2::new(c.x + c.radius, c.y + c.radius),
            ),
            Shape::Rectangle(r) => Envelope::new(
                Vector2::new(r.x, r.y),
                Vector2::new(r.x + r.width, r.y + r.height),
            ),
        }
    }

    /// Check the data-model invariants.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Circle(c) => {
                finite("x", c.x)?;
                finite("y", c.y)?;
                positive("radius", c.radius)
            }
            Shape::Rectangle(r) => {
                finite("x", r.x)?;
                finite("y", r.y)?;
                positive("width", r.width)?;
                positive("height", r.height)
            }
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

fn finite(field: &'static str, v: f64) -> Result<(), ShapeError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::invalid(field, format!("must be finite, got {v}")))
    }
}

fn positive(field: &'static str, v: f64) -> Result<(), ShapeError> {
    finite(field, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::invalid(field, format!("must be > 0, got {v}")))
    }
}
