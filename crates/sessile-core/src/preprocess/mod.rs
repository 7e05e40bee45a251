pub mod canny;
pub mod clahe;
pub mod gaussian_blur;
pub mod grayscale;
pub mod morphology;

use tracing::debug;

use crate::params::{Heuristics, ParameterSet};
use crate::raster::{EdgeMap, Raster};

use canny::canny;
use clahe::clahe;
use gaussian_blur::gaussian_blur_u8;
use grayscale::to_gray;
use morphology::{ellipse_kernel, morphological_closing};

/// Turn a photograph into a binary edge map of the same size.
///
/// Pipeline: grayscale -> CLAHE -> Gaussian blur -> Canny -> elliptical closing.
pub fn preprocess(raster: &Raster, params: &ParameterSet, heuristics: &Heuristics) -> EdgeMap {
    // Step 1: Luma.
    let gray = to_gray(raster);

    // Step 2: Local contrast normalization against uneven lighting.
    let enhanced = clahe(&gray, params.clip_limit, heuristics.clahe_tile_grid);

    // Step 3: Suppress pixel noise before differentiating.
    let blurred = gaussian_blur_u8(&enhanced, heuristics.blur_kernel_size);

    // Step 4: Edges.
    let edges = canny(&blurred, params.threshold1, params.threshold2);

    // Step 5: Bridge small gaps left by reflections or weak contrast.
    let kernel = ellipse_kernel(heuristics.closing_kernel_size);
    let closed = morphological_closing(&edges, &kernel, heuristics.closing_iterations);

    let edge_map = EdgeMap::new(closed);
    debug!(
        width = edge_map.width(),
        height = edge_map.height(),
        edge_pixels = edge_map.edge_count(),
        "Edge map ready"
    );
    edge_map
}
