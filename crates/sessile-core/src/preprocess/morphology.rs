use ndarray::Array2;

/// Elliptical structuring element inscribed in a `size x size` square.
pub fn ellipse_kernel(size: usize) -> Array2<bool> {
    let size = size.max(1);
    let r = (size / 2) as i32;
    let c = r;
    let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };

    let mut kernel = Array2::from_elem((size, size), false);
    for i in 0..size {
        let dy = i as i32 - r;
        if dy.abs() > r {
            continue;
        }
        let dx = (c as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as i32;
        let j1 = (c - dx).max(0) as usize;
        let j2 = ((c + dx + 1) as usize).min(size);
        for j in j1..j2 {
            kernel[[i, j]] = true;
        }
    }
    kernel
}

/// Morphological closing: `iterations` dilations followed by as many erosions.
///
/// Bridges gaps narrower than the element without growing the shape.
/// Pixels outside the image never affect the result.
pub fn morphological_closing(
    mask: &Array2<bool>,
    kernel: &Array2<bool>,
    iterations: usize,
) -> Array2<bool> {
    let offsets = kernel_offsets(kernel);
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = dilate(&current, &offsets);
    }
    for _ in 0..iterations {
        current = erode(&current, &offsets);
    }
    current
}

fn kernel_offsets(kernel: &Array2<bool>) -> Vec<(isize, isize)> {
    let (kh, kw) = kernel.dim();
    let (ar, ac) = ((kh / 2) as isize, (kw / 2) as isize);
    kernel
        .indexed_iter()
        .filter(|&(_, &on)| on)
        .map(|((r, c), _)| (r as isize - ar, c as isize - ac))
        .collect()
}

/// Binary dilation: true if ANY in-bounds pixel under the element is true.
fn dilate(mask: &Array2<bool>, offsets: &[(isize, isize)]) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        offsets.iter().any(|&(dr, dc)| {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            nr >= 0 && nr < h as isize && nc >= 0 && nc < w as isize && mask[[nr as usize, nc as usize]]
        })
    })
}

/// Binary erosion: true only if ALL in-bounds pixels under the element are true.
fn erode(mask: &Array2<bool>, offsets: &[(isize, isize)]) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        offsets.iter().all(|&(dr, dc)| {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            nr < 0 || nr >= h as isize || nc < 0 || nc >= w as isize || mask[[nr as usize, nc as usize]]
        })
    })
}
