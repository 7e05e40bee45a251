mod common;

use sessile_core::error::{FitStage, MeasureError};
use sessile_core::measure::{measure, measure_contour, measure_edges};
use sessile_core::params::{ContourApproximation, Heuristics, ParameterSet};
use sessile_core::raster::Raster;

use ndarray::Array2;

fn narrow_band() -> ParameterSet {
    ParameterSet {
        points_to_take: 5,
        height_threshold_start: 15,
        height_threshold_finish: 3,
        ..ParameterSet::default()
    }
}

// ---------------------------------------------------------------------------
// From edge maps
// ---------------------------------------------------------------------------

#[test]
fn test_hemisphere_is_near_ninety_degrees() {
    let r = 150.0;
    let (w, h) = (360, 340);
    let edges = common::cap_edge_map(w, h, w / 2, 170, r, 90.0);

    let m = measure_edges(&edges, &narrow_band(), &Heuristics::default()).unwrap();
    assert!((m.angle_deg - 90.0).abs() < 6.0, "angle {}", m.angle_deg);
    assert!(!m.diagnostics.used_fallback);
    assert!(m.diagnostics.contact_points.len() >= 4);
}

#[test]
fn test_flattened_droplet_is_shallow() {
    let edges = common::cap_edge_map(420, 200, 210, 60, 1000.0, 10.0);

    let m = measure_edges(&edges, &ParameterSet::default(), &Heuristics::default()).unwrap();
    assert!((0.0..=10.0).contains(&m.angle_deg), "angle {}", m.angle_deg);
}

#[test]
fn test_contour_modes_on_same_edge_map() {
    let edges = common::cap_edge_map(360, 340, 180, 170, 150.0, 90.0);
    let params = ParameterSet::default();
    let simple = Heuristics {
        contour_approximation: ContourApproximation::Simple,
        ..Heuristics::default()
    };

    let dense = measure_edges(&edges, &params, &Heuristics::default()).unwrap();
    assert!((75.0..80.0).contains(&dense.angle_deg), "angle {}", dense.angle_deg);
    assert!(!dense.diagnostics.used_fallback);

    // Run end points only: nothing sits under the apex, so the surface start
    // comes from the bounding box and the reading drops.
    let sparse = measure_edges(&edges, &params, &simple).unwrap();
    assert!((66.0..71.0).contains(&sparse.angle_deg), "angle {}", sparse.angle_deg);
    assert!(sparse.diagnostics.used_fallback);
    assert!(sparse.angle_deg < dense.angle_deg);
}

#[test]
fn test_small_hemisphere_reads_low_with_default_band() {
    let edges = common::cap_edge_map(160, 140, 80, 70, 50.0, 90.0);

    let m = measure_edges(&edges, &ParameterSet::default(), &Heuristics::default()).unwrap();
    assert!((42.0..52.0).contains(&m.angle_deg), "angle {}", m.angle_deg);
    let narrow = measure_edges(&edges, &narrow_band(), &Heuristics::default()).unwrap();
    assert!((73.0..82.0).contains(&narrow.angle_deg), "angle {}", narrow.angle_deg);
}

#[test]
fn test_hemisphere_apex_is_topmost_point() {
    let edges = common::cap_edge_map(360, 340, 180, 170, 150.0, 90.0);

    let m = measure_edges(&edges, &narrow_band(), &Heuristics::default()).unwrap();
    let apex = m.diagnostics.apex.unwrap();
    assert_eq!(apex.y, 20);
    assert!((apex.x - 180).abs() <= 20);
}

#[test]
fn test_too_few_contact_points_reports_stage() {
    let edges = common::cap_edge_map(360, 340, 180, 170, 150.0, 90.0);
    let params = ParameterSet {
        min_points_to_find: 10_000,
        ..narrow_band()
    };

    let failure = measure_edges(&edges, &params, &Heuristics::default()).unwrap_err();
    assert!(matches!(
        failure.error,
        MeasureError::InsufficientPoints {
            stage: FitStage::ContactLine,
            required: 10_000,
            ..
        }
    ));
    // Everything up to the contact line is still there for the overlay.
    assert!(failure.diagnostics.apex.is_some());
    assert!(failure.diagnostics.baseline.is_some());
    assert!(failure.diagnostics.contact_line.is_none());
}

#[test]
fn test_empty_edge_map_is_not_detected() {
    let edges = sessile_core::raster::EdgeMap::new(Array2::from_elem((100, 100), false));
    let failure = measure_edges(&edges, &ParameterSet::default(), &Heuristics::default()).unwrap_err();
    assert_eq!(failure.error, MeasureError::DropletNotDetected);
    assert!(failure.diagnostics.contour.is_none());
}

#[test]
fn test_empty_contour_has_no_apex() {
    let failure = measure_contour(
        &Default::default(),
        &ParameterSet::default(),
        &Heuristics::default(),
    )
    .unwrap_err();
    assert!(matches!(
        failure.error,
        MeasureError::InsufficientPoints { stage: FitStage::Apex, .. }
    ));
}

// ---------------------------------------------------------------------------
// From rasters
// ---------------------------------------------------------------------------

#[test]
fn test_blank_raster_is_not_detected() {
    let raster = Raster::Gray(Array2::from_elem((120, 160), 128u8));
    let failure = measure(&raster, &ParameterSet::default()).unwrap_err();
    assert_eq!(failure.error, MeasureError::DropletNotDetected);
}

#[test]
fn test_dark_hemisphere_is_measured() {
    let raster = common::cap_raster(400, 320, 200, 200, 120.0, 90.0);

    let m = measure(&raster, &ParameterSet::default()).unwrap();
    assert!((65.0..85.0).contains(&m.angle_deg), "angle {}", m.angle_deg);
    let apex = m.diagnostics.apex.unwrap();
    assert!((apex.y - 80).abs() <= 3, "apex {apex}");
    assert!((apex.x - 200).abs() <= 20, "apex {apex}");
    assert!(m.diagnostics.contact_points.len() >= 2);
}

#[test]
fn test_dark_cap_reads_below_hemisphere() {
    let hemisphere = common::cap_raster(400, 320, 200, 200, 120.0, 90.0);
    let cap = common::cap_raster(400, 320, 200, 200, 120.0, 60.0);
    let params = ParameterSet::default();

    let low = measure(&cap, &params).unwrap();
    assert!((35.0..50.0).contains(&low.angle_deg), "angle {}", low.angle_deg);
    assert!(low.angle_deg < measure(&hemisphere, &params).unwrap().angle_deg);
}

#[test]
fn test_raster_failure_keeps_stage_and_diagnostics() {
    let raster = common::cap_raster(400, 320, 200, 200, 120.0, 90.0);
    let params = ParameterSet {
        min_points_to_find: 10_000,
        ..ParameterSet::default()
    };

    let failure = measure(&raster, &params).unwrap_err();
    assert!(
        matches!(
            failure.error,
            MeasureError::InsufficientPoints {
                stage: FitStage::ContactLine,
                required: 10_000,
                ..
            }
        ),
        "{failure}"
    );
    assert!(failure.diagnostics.contour.is_some());
    assert!(failure.diagnostics.baseline.is_some());
}

#[test]
fn test_measure_is_idempotent() {
    let raster = common::cap_raster(300, 240, 150, 160, 80.0, 70.0);
    let params = ParameterSet::default();

    let first = measure(&raster, &params);
    let second = measure(&raster, &params);
    assert_eq!(first, second);
}
