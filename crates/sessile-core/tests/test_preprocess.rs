mod common;

use ndarray::{Array2, Array3};

use sessile_core::params::{Heuristics, ParameterSet};
use sessile_core::preprocess::canny::canny;
use sessile_core::preprocess::grayscale::to_gray;
use sessile_core::preprocess::morphology::{ellipse_kernel, morphological_closing};
use sessile_core::preprocess::preprocess;
use sessile_core::raster::Raster;

#[test]
fn test_uniform_image_has_no_edges() {
    let raster = Raster::Gray(Array2::from_elem((64, 80), 100u8));
    let edges = preprocess(&raster, &ParameterSet::default(), &Heuristics::default());
    assert_eq!(edges.width(), 80);
    assert_eq!(edges.height(), 64);
    assert_eq!(edges.edge_count(), 0);
}

#[test]
fn test_cap_produces_edges_near_outline() {
    let raster = common::cap_raster(300, 240, 150, 160, 80.0, 90.0);
    let edges = preprocess(&raster, &ParameterSet::default(), &Heuristics::default());
    assert_eq!(edges.width(), 300);
    assert_eq!(edges.height(), 240);
    assert!(edges.edge_count() > 0);
    // Far corner of the background stays clean.
    assert!(!edges.data[[5, 5]]);
}

#[test]
fn test_rgb_grayscale_weights() {
    let mut data = Array3::<u8>::zeros((1, 3, 3));
    data[[0, 0, 0]] = 255;
    data[[0, 1, 1]] = 255;
    data[[0, 2, 2]] = 255;
    let gray = to_gray(&Raster::rgb(data).unwrap());
    assert_eq!(gray[[0, 0]], 76);
    assert_eq!(gray[[0, 1]], 150);
    assert_eq!(gray[[0, 2]], 29);
}

#[test]
fn test_rgb_rejects_wrong_channel_count() {
    assert!(Raster::rgb(Array3::<u8>::zeros((4, 4, 4))).is_err());
}

#[test]
fn test_canny_finds_vertical_step() {
    let img = Array2::from_shape_fn((20, 20), |(_, c)| if c < 10 { 20u8 } else { 220u8 });
    let edges = canny(&img, 50, 150);
    let cols: Vec<usize> = (0..20).filter(|&c| edges[[10, c]]).collect();
    assert!(!cols.is_empty());
    assert!(cols.iter().all(|&c| (8..=11).contains(&c)), "{cols:?}");
}

#[test]
fn test_canny_swapped_thresholds_match() {
    let img = Array2::from_shape_fn((20, 20), |(r, c)| ((r * 7 + c * 13) % 256) as u8);
    assert_eq!(canny(&img, 150, 50), canny(&img, 50, 150));
}

#[test]
fn test_closing_fills_pinhole() {
    let mut mask = Array2::from_shape_fn((21, 21), |(r, c)| (7..=13).contains(&r) && (7..=13).contains(&c));
    mask[[10, 10]] = false;
    let closed = morphological_closing(&mask, &ellipse_kernel(5), 2);
    assert!(closed[[10, 10]]);
    assert!(!closed[[0, 0]]);
    assert!(!closed[[10, 1]]);
}
