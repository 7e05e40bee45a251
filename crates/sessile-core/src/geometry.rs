use std::collections::HashSet;

use crate::consts::EPSILON;
use crate::error::{FitStage, MeasureError};

/// Integer pixel coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned box with inclusive pixel extents, so `width = max_x - min_x + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingRect {
    /// Bounding box of a point set, `None` when empty.
    pub fn of(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    /// One past the lowest row, i.e. `y + height`.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Infinite 2-D line: direction `(vx, vy)` through `(x0, y0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub vx: f64,
    pub vy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Line {
    pub fn new(vx: f64, vy: f64, x0: f64, y0: f64) -> Self {
        Self { vx, vy, x0, y0 }
    }

    /// Fit a line minimizing the sum of squared perpendicular distances (L2).
    ///
    /// The direction is the principal axis of the point scatter, normalized,
    /// with `vx >= 0`. At least two distinct points are required.
    pub fn fit(points: &[Point2D], stage: FitStage) -> Result<Self, MeasureError> {
        let distinct = points.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            return Err(MeasureError::InsufficientPoints {
                stage,
                found: distinct,
                required: 2,
            });
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x as f64).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y as f64).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for p in points {
            let dx = p.x as f64 - mean_x;
            let dy = p.y as f64 - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        let t = 0.5 * (2.0 * sxy).atan2(sxx - syy);
        Ok(Self {
            vx: t.cos(),
            vy: t.sin(),
            x0: mean_x,
            y0: mean_y,
        })
    }

    pub fn is_vertical(&self) -> bool {
        self.vx.abs() < EPSILON
    }

    pub fn direction_norm(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// dy/dx, `None` for a vertical line.
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.vy / self.vx)
        }
    }

    /// The line's y at `x`, `None` for a vertical line.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.slope().map(|m| m * (x - self.x0) + self.y0)
    }

    /// Point at signed distance `t` (in direction units) from the anchor.
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        (self.x0 + self.vx * t, self.y0 + self.vy * t)
    }
}
