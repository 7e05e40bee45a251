use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BLUR_KERNEL_SIZE, DEFAULT_CLAHE_TILE_GRID, DEFAULT_CLOSING_ITERATIONS,
    DEFAULT_CLOSING_KERNEL_SIZE, DEFAULT_MIN_CONTOUR_AREA, DEFAULT_SURFACE_MIN_DISTANCE,
    DEFAULT_SURFACE_SEARCH_RANGE,
};

/// How traced boundary points are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourApproximation {
    /// Every boundary pixel. Default: the band and the surface-start search
    /// both need the dense run of points along the flanks.
    #[default]
    None,
    /// Horizontal, vertical and diagonal runs collapse to their end points.
    /// On smooth caps this usually leaves no point below the apex column and
    /// the surface start falls back to the bounding box corner.
    Simple,
}

/// Fixed tuning constants of the pipeline.
///
/// The defaults were tuned for one photography setup (side view, eye level,
/// uniform background). They are kept separate from [`super::ParameterSet`]
/// because they are rarely touched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Minimum enclosed area (px²) for a droplet candidate.
    #[serde(default = "default_min_contour_area")]
    pub min_contour_area: f64,
    /// Horizontal tolerance around the apex when searching for the surface start.
    #[serde(default = "default_surface_search_range")]
    pub surface_search_range: i32,
    /// Minimum drop (px) from the apex to the surface start.
    #[serde(default = "default_surface_min_distance")]
    pub surface_min_distance: i32,
    /// CLAHE tiles per axis.
    #[serde(default = "default_clahe_tile_grid")]
    pub clahe_tile_grid: usize,
    /// Gaussian blur kernel size.
    #[serde(default = "default_blur_kernel_size")]
    pub blur_kernel_size: usize,
    /// Elliptical closing element size.
    #[serde(default = "default_closing_kernel_size")]
    pub closing_kernel_size: usize,
    /// Closing iterations.
    #[serde(default = "default_closing_iterations")]
    pub closing_iterations: usize,
    /// Point density of the traced boundary.
    #[serde(default)]
    pub contour_approximation: ContourApproximation,
}

fn default_min_contour_area() -> f64 {
    DEFAULT_MIN_CONTOUR_AREA
}
fn default_surface_search_range() -> i32 {
    DEFAULT_SURFACE_SEARCH_RANGE
}
fn default_surface_min_distance() -> i32 {
    DEFAULT_SURFACE_MIN_DISTANCE
}
fn default_clahe_tile_grid() -> usize {
    DEFAULT_CLAHE_TILE_GRID
}
fn default_blur_kernel_size() -> usize {
    DEFAULT_BLUR_KERNEL_SIZE
}
fn default_closing_kernel_size() -> usize {
    DEFAULT_CLOSING_KERNEL_SIZE
}
fn default_closing_iterations() -> usize {
    DEFAULT_CLOSING_ITERATIONS
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            min_contour_area: DEFAULT_MIN_CONTOUR_AREA,
            surface_search_range: DEFAULT_SURFACE_SEARCH_RANGE,
            surface_min_distance: DEFAULT_SURFACE_MIN_DISTANCE,
            clahe_tile_grid: DEFAULT_CLAHE_TILE_GRID,
            blur_kernel_size: DEFAULT_BLUR_KERNEL_SIZE,
            closing_kernel_size: DEFAULT_CLOSING_KERNEL_SIZE,
            closing_iterations: DEFAULT_CLOSING_ITERATIONS,
            contour_approximation: ContourApproximation::default(),
        }
    }
}
