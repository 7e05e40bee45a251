use tracing::{debug, warn};

use crate::contour::Contour;
use crate::error::{FitStage, MeasureError};
use crate::geometry::{Line, Point2D};
use crate::params::{Heuristics, ParameterSet};

/// Where the droplet meets the surface, below the apex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceStart {
    pub point: Point2D,
    /// True when no contour point qualified and the bounding box was used.
    pub used_fallback: bool,
}

/// Fitted surface line together with the points that support it.
#[derive(Clone, Debug, PartialEq)]
pub struct Baseline {
    /// L2 fit through the two extremes and the surface start.
    pub line: Line,
    pub surface_start: Point2D,
    /// Mean of the leftmost contour points, truncated to pixels.
    pub most_left_point: Point2D,
    /// Mean of the rightmost contour points, truncated to pixels.
    pub most_right_point: Point2D,
    /// Copied from [`SurfaceStart::used_fallback`].
    pub used_fallback: bool,
}

/// Search below the apex for the point where the droplet meets the surface.
///
/// Candidates lie within `surface_search_range` columns of the apex and more
/// than `surface_min_distance` rows below it; the one closest in x wins, the
/// first found on ties. Without candidates the bottom-left corner of the
/// bounding box, `(x, y + height)`, is used instead.
pub fn find_surface_start(
    contour: &Contour,
    apex: Point2D,
    heuristics: &Heuristics,
) -> Result<SurfaceStart, MeasureError> {
    let mut best: Option<(Point2D, i32)> = None;
    for &p in &contour.points {
        let dx = (p.x - apex.x).abs();
        if dx > heuristics.surface_search_range || p.y <= apex.y + heuristics.surface_min_distance {
            continue;
        }
        if best.map_or(true, |(_, best_dx)| dx < best_dx) {
            best = Some((p, dx));
        }
    }

    if let Some((point, _)) = best {
        debug!(x = point.x, y = point.y, "Surface start found");
        return Ok(SurfaceStart {
            point,
            used_fallback: false,
        });
    }

    let rect = contour.bounding_rect().ok_or(MeasureError::InsufficientPoints {
        stage: FitStage::Baseline,
        found: 0,
        required: 2,
    })?;
    let point = Point2D::new(rect.x, rect.bottom());
    warn!(
        x = point.x,
        y = point.y,
        "No valid surface start point, using bounding box fallback"
    );

    if point.y <= apex.y + heuristics.surface_min_distance {
        return Err(MeasureError::DegenerateGeometry(format!(
            "surface start {point} is not more than {} px below apex {apex}",
            heuristics.surface_min_distance
        )));
    }

    Ok(SurfaceStart {
        point,
        used_fallback: true,
    })
}

/// Contour points ordered by x, then y.
pub fn sort_by_x(points: &[Point2D]) -> Vec<Point2D> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| (p.x, p.y));
    sorted
}

/// Mean of the `take` first and `take` last points of an x-sorted list,
/// truncated to integers. `None` for an empty list.
pub fn extreme_points(sorted: &[Point2D], take: usize) -> Option<(Point2D, Point2D)> {
    if sorted.is_empty() {
        return None;
    }
    let take = take.clamp(1, sorted.len());
    let left = mean_point(&sorted[..take]);
    let right = mean_point(&sorted[sorted.len() - take..]);
    Some((left, right))
}

fn mean_point(points: &[Point2D]) -> Point2D {
    let n = points.len() as i64;
    let sx: i64 = points.iter().map(|p| p.x as i64).sum();
    let sy: i64 = points.iter().map(|p| p.y as i64).sum();
    Point2D::new((sx / n) as i32, (sy / n) as i32)
}

/// Fit the surface line through the averaged extremes and the surface start.
pub fn fit_baseline(
    contour: &Contour,
    surface_start: SurfaceStart,
    params: &ParameterSet,
) -> Result<Baseline, MeasureError> {
    let sorted = sort_by_x(&contour.points);
    let (most_left_point, most_right_point) =
        extreme_points(&sorted, params.points_to_take).ok_or(MeasureError::InsufficientPoints {
            stage: FitStage::Baseline,
            found: 0,
            required: 2,
        })?;

    let support = [most_left_point, surface_start.point, most_right_point];
    let line = Line::fit(&support, FitStage::Baseline)?;
    if line.is_vertical() {
        return Err(MeasureError::DegenerateGeometry(
            "baseline is vertical".to_string(),
        ));
    }

    debug!(
        left = %most_left_point,
        start = %surface_start.point,
        right = %most_right_point,
        slope = line.vy / line.vx,
        "Baseline fitted"
    );

    Ok(Baseline {
        line,
        surface_start: surface_start.point,
        most_left_point,
        most_right_point,
        used_fallback: surface_start.used_fallback,
    })
}

/// Surface start search followed by the baseline fit.
pub fn estimate_baseline(
    contour: &Contour,
    apex: Point2D,
    params: &ParameterSet,
    heuristics: &Heuristics,
) -> Result<Baseline, MeasureError> {
    let start = find_surface_start(contour, apex, heuristics)?;
    fit_baseline(contour, start, params)
}
