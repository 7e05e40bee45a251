use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Sigma implied by a kernel size when none is given: `0.3*((k-1)*0.5 - 1) + 0.8`.
pub fn sigma_for_kernel(size: usize) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Blur an 8-bit image with a `size x size` Gaussian kernel (separable).
///
/// Borders replicate the edge pixel. Results are rounded back to 8 bits.
pub fn gaussian_blur_u8(gray: &Array2<u8>, size: usize) -> Array2<u8> {
    let size = if size % 2 == 0 { size + 1 } else { size };
    let kernel = make_gaussian_kernel(size, sigma_for_kernel(size));
    let data = gray.mapv(|v| v as f32);
    let row_pass = convolve(&data, &kernel, Axis::Row);
    convolve(&row_pass, &kernel, Axis::Col).mapv(|v| v.round().clamp(0.0, 255.0) as u8)
}

fn make_gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    let radius = size / 2;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Col,
}

fn convolve(data: &Array2<f32>, kernel: &[f32], axis: Axis) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;

    let row_values = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let offset = ki as isize - radius;
                    let v = match axis {
                        Axis::Row => {
                            let c = (col as isize + offset).clamp(0, w as isize - 1) as usize;
                            data[[row, c]]
                        }
                        Axis::Col => {
                            let r = (row as isize + offset).clamp(0, h as isize - 1) as usize;
                            data[[r, col]]
                        }
                    };
                    sum += v * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_values).collect()
    } else {
        (0..h).map(row_values).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
