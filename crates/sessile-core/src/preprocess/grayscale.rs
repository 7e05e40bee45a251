use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::raster::Raster;

/// Convert a raster to 8-bit luma (ITU-R BT.601). Gray input is copied as is.
pub fn to_gray(raster: &Raster) -> Array2<u8> {
    match raster {
        Raster::Gray(data) => data.clone(),
        Raster::Rgb(data) => {
            let (h, w, _) = data.dim();
            Array2::from_shape_fn((h, w), |(row, col)| {
                let r = data[[row, col, 0]] as f32;
                let g = data[[row, col, 1]] as f32;
                let b = data[[row, col, 2]] as f32;
                (LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b)
                    .round()
                    .clamp(0.0, 255.0) as u8
            })
        }
    }
}
