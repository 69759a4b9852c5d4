//! Seeded random shape collections for benchmarks and fixtures.
//!
//! Model
//! - Kinds uniform over {Circle, Rectangle}; positions uniform over a
//!   `width × height` canvas; radius and side lengths uniform over half-open
//!   ranges; colors uniform over a palette.
//! - Defaults reproduce the desktop app's fixture generator: 1000 shapes on a
//!   900×450 canvas, radius in [10, 50), sides in [20, 100), six colors.
//! - Same `(cfg, seed)` → same shapes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::shape::{Circle, Rectangle, Shape};

pub const PALETTE: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

#[derive(Debug)]
pub enum GenError {
    InvalidParams { reason: String },
}

impl GenError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GenError {}

/// Generator configuration.
#[derive(Clone, Debug)]
pub struct GenCfg {
    pub count: usize,
    /// Canvas extent for `x`.
    pub width: f64,
    /// Canvas extent for `y`.
    pub height: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Range for both rectangle sides.
    pub side_min: f64,
    pub side_max: f64,
    pub palette: Vec<String>,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            width: 900.0,
            height: 450.0,
            radius_min: 10.0,
            radius_max: 50.0,
            side_min: 20.0,
            side_max: 100.0,
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl GenCfg {
    fn validate(&self) -> Result<(), GenError> {
        let all = [
            self.width,
            self.height,
            self.radius_min,
            self.radius_max,
            self.side_min,
            self.side_max,
        ];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(GenError::invalid("all bounds must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GenError::invalid("canvas must have positive extent"));
        }
        if self.radius_min <= 0.0 || self.radius_min >= self.radius_max {
            return Err(GenError::invalid("need 0 < radius_min < radius_max"));
        }
        if self.side_min <= 0.0 || self.side_min >= self.side_max {
            return Err(GenError::invalid("need 0 < side_min < side_max"));
        }
        if self.palette.is_empty() {
            return Err(GenError::invalid("palette must not be empty"));
        }
        Ok(())
    }
}

/// Draw `cfg.count` shapes deterministically from `seed`.
pub fn generate(cfg: &GenCfg, seed: u64) -> Result<Vec<Shape>, GenError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let shapes = (0..cfg.count)
        .map(|_| {
            let circle = rng.gen_bool(0.5);
            let x = rng.gen_range(0.0..cfg.width);
            let y = rng.gen_range(0.0..cfg.height);
            let color = cfg.palette[rng.gen_range(0..cfg.palette.len())].clone();
            if circle {
                let radius = rng.gen_range(cfg.radius_min..cfg.radius_max);
                Shape::Circle(Circle::new(x, y, color, radius))
            } else {
                let w = rng.gen_range(cfg.side_min..cfg.side_max);
                let h = rng.gen_range(cfg.side_min..cfg.side_max);
                Shape::Rectangle(Rectangle::new(x, y, color, w, h))
            }
        })
        .collect();
    Ok(shapes)
}
