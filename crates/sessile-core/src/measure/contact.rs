use tracing::debug;

use crate::contour::Contour;
use crate::error::{FitStage, MeasureError};
use crate::geometry::{Line, Point2D};
use crate::params::ParameterSet;

use super::baseline::{sort_by_x, Baseline};

/// Baseline y per integer column, truncated, over `[start_x, start_x + len)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaselineProfile {
    start_x: i32,
    ys: Vec<i32>,
}

impl BaselineProfile {
    /// Sample `line` at every column from `from_x` to `to_x` inclusive.
    /// An inverted range gives an empty profile.
    pub fn sample(line: &Line, from_x: i32, to_x: i32) -> Result<Self, MeasureError> {
        let slope = line.slope().ok_or_else(|| {
            MeasureError::DegenerateGeometry("baseline is vertical".to_string())
        })?;
        let ys = (from_x..=to_x)
            .map(|x| (slope * (x as f64 - line.x0) + line.y0) as i32)
            .collect();
        Ok(Self { start_x: from_x, ys })
    }

    pub fn y_at(&self, x: i32) -> Option<i32> {
        let offset = usize::try_from(x.checked_sub(self.start_x)?).ok()?;
        self.ys.get(offset).copied()
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }
}

/// Points on or above the baseline whose height over it lies strictly
/// between `finish` and `start`.
pub fn points_in_band(sorted: &[Point2D], profile: &BaselineProfile, start: i32, finish: i32) -> Vec<Point2D> {
    sorted
        .iter()
        .copied()
        .filter(|p| {
            profile.y_at(p.x).is_some_and(|base_y| {
                let offset = base_y - p.y;
                offset >= 0 && finish < offset && offset < start
            })
        })
        .collect()
}

/// Keep points whose y never drops below the largest y kept so far.
pub fn monotonic_descent(points: &[Point2D]) -> Vec<Point2D> {
    let mut kept = Vec::with_capacity(points.len());
    let mut running: Option<i32> = None;
    for &p in points {
        if running.map_or(true, |max_y| p.y >= max_y) {
            kept.push(p);
            running = Some(p.y);
        }
    }
    kept
}

/// Accumulate points until an x gap wider than `jump` shows up once at least
/// `min_points` have been collected. Earlier gaps are crossed.
pub fn continuous_run(points: &[Point2D], jump: i32, min_points: usize) -> Vec<Point2D> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut run: Vec<Point2D> = Vec::with_capacity(points.len());
    let mut prev_x = first.x;
    for &p in points {
        let gap = p.x - prev_x;
        if gap > jump {
            if run.len() >= min_points {
                break;
            }
            debug!(gap, accepted = run.len(), "Crossing gap before enough contact points");
        }
        run.push(p);
        prev_x = p.x;
    }
    run
}

/// Contour points that describe the droplet flank right next to the surface.
///
/// Only the part of the contour right of the surface start is considered,
/// sampled against the baseline between the apex column and the rightmost
/// extreme point.
pub fn extract_contact_points(
    contour: &Contour,
    apex: Point2D,
    baseline: &Baseline,
    params: &ParameterSet,
) -> Result<Vec<Point2D>, MeasureError> {
    let profile = BaselineProfile::sample(&baseline.line, apex.x, baseline.most_right_point.x)?;

    let sorted = sort_by_x(&contour.points);
    let split = sorted.partition_point(|p| p.x < baseline.surface_start.x);
    let right_side = &sorted[split..];

    let band = points_in_band(
        right_side,
        &profile,
        params.height_threshold_start,
        params.height_threshold_finish,
    );
    let descending = monotonic_descent(&band);
    let run = continuous_run(&descending, params.jump_threshold, params.min_points_to_find);

    debug!(
        right_side = right_side.len(),
        band = band.len(),
        descending = descending.len(),
        run = run.len(),
        "Contact points filtered"
    );
    Ok(run)
}

/// Fit the contact line once enough contact points were kept.
pub fn fit_contact_line(points: &[Point2D], params: &ParameterSet) -> Result<Line, MeasureError> {
    let required = params.min_points_to_find.max(2);
    if points.len() < required {
        return Err(MeasureError::InsufficientPoints {
            stage: FitStage::ContactLine,
            found: points.len(),
            required,
        });
    }
    Line::fit(points, FitStage::ContactLine)
}
