use approx::assert_abs_diff_eq;

use sessile_core::contour::Contour;
use sessile_core::error::{FitStage, MeasureError};
use sessile_core::geometry::{Line, Point2D};
use sessile_core::measure::{estimate_baseline, find_surface_start, fit_baseline, SurfaceStart};
use sessile_core::params::{Heuristics, ParameterSet};

fn contour(raw: &[(i32, i32)]) -> Contour {
    Contour::new(raw.iter().map(|&p| p.into()).collect())
}

// ---------------------------------------------------------------------------
// Surface start
// ---------------------------------------------------------------------------

#[test]
fn test_surface_start_prefers_closest_column() {
    let c = contour(&[(100, 20), (98, 35), (101, 40), (130, 60), (70, 60)]);
    let start = find_surface_start(&c, Point2D::new(100, 20), &Heuristics::default()).unwrap();
    assert_eq!(start.point, Point2D::new(101, 40));
    assert!(!start.used_fallback);
}

#[test]
fn test_surface_start_first_wins_on_tie() {
    let c = contour(&[(100, 20), (97, 50), (103, 45)]);
    let start = find_surface_start(&c, Point2D::new(100, 20), &Heuristics::default()).unwrap();
    assert_eq!(start.point, Point2D::new(97, 50));
}

#[test]
fn test_surface_start_ignores_points_too_close_to_apex() {
    // (100, 30) is exactly 10 rows down, which is not enough.
    let c = contour(&[(100, 20), (100, 30), (104, 31)]);
    let start = find_surface_start(&c, Point2D::new(100, 20), &Heuristics::default()).unwrap();
    assert_eq!(start.point, Point2D::new(104, 31));
}

#[test]
fn test_surface_start_falls_back_to_bounding_box() {
    // Nothing within 6 columns of the apex below it.
    let c = contour(&[(100, 20), (60, 50), (140, 50), (120, 70)]);
    let start = find_surface_start(&c, Point2D::new(100, 20), &Heuristics::default()).unwrap();
    assert!(start.used_fallback);
    assert_eq!(start.point, Point2D::new(60, 71));
}

#[test]
fn test_fallback_too_close_to_apex_is_degenerate() {
    let c = contour(&[(0, 0), (20, 0), (40, 2)]);
    let err = find_surface_start(&c, Point2D::new(0, 0), &Heuristics::default()).unwrap_err();
    assert!(matches!(err, MeasureError::DegenerateGeometry(_)));
}

// ---------------------------------------------------------------------------
// Baseline fit
// ---------------------------------------------------------------------------

#[test]
fn test_single_distinct_point_is_insufficient() {
    let c = contour(&[(5, 5), (5, 5), (5, 5)]);
    let start = SurfaceStart {
        point: Point2D::new(5, 5),
        used_fallback: false,
    };
    let err = fit_baseline(&c, start, &ParameterSet::default()).unwrap_err();
    assert_eq!(
        err,
        MeasureError::InsufficientPoints {
            stage: FitStage::Baseline,
            found: 1,
            required: 2,
        }
    );
}

#[test]
fn test_vertical_baseline_is_degenerate() {
    let c = Contour::new((0..=100).map(|y| Point2D::new(50, y)).collect());
    let err = estimate_baseline(&c, Point2D::new(50, 0), &ParameterSet::default(), &Heuristics::default())
        .unwrap_err();
    assert!(matches!(err, MeasureError::DegenerateGeometry(_)));
}

#[test]
fn test_flat_droplet_baseline_is_horizontal() {
    // Outline of a box droplet sitting on y = 60.
    let mut raw = Vec::new();
    for x in 0..=100 {
        raw.push((x, 20));
    }
    for y in 21..=60 {
        raw.push((100, y));
    }
    for x in (0..100).rev() {
        raw.push((x, 60));
    }
    for y in (21..60).rev() {
        raw.push((0, y));
    }
    let c = contour(&raw);
    let params = ParameterSet {
        points_to_take: 1,
        ..ParameterSet::default()
    };

    let baseline = estimate_baseline(&c, Point2D::new(0, 20), &params, &Heuristics::default()).unwrap();
    // The bottom edge is traversed before the left side, so the corner wins.
    assert_eq!(baseline.surface_start, Point2D::new(0, 60));
    assert_eq!(baseline.most_left_point, Point2D::new(0, 20));
    assert_eq!(baseline.most_right_point, Point2D::new(100, 60));
    assert!(!baseline.line.is_vertical());
}

// ---------------------------------------------------------------------------
// Line fit
// ---------------------------------------------------------------------------

#[test]
fn test_line_fit_recovers_slope() {
    let pts: Vec<Point2D> = (0..20).map(|x| Point2D::new(x, 2 * x + 3)).collect();
    let line = Line::fit(&pts, FitStage::ContactLine).unwrap();
    assert_abs_diff_eq!(line.slope().unwrap(), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line.y_at(10.0).unwrap(), 23.0, epsilon = 1e-9);
    assert_abs_diff_eq!(line.direction_norm(), 1.0, epsilon = 1e-12);
    assert!(line.vx >= 0.0);
}

#[test]
fn test_line_fit_horizontal() {
    let pts = [Point2D::new(0, 7), Point2D::new(10, 7), Point2D::new(4, 7)];
    let line = Line::fit(&pts, FitStage::Baseline).unwrap();
    assert_abs_diff_eq!(line.vy, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.y0, 7.0, epsilon = 1e-12);
}
