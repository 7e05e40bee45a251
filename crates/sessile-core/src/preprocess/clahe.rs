use ndarray::Array2;

use crate::consts::GRAY_LEVELS;

/// Contrast Limited Adaptive Histogram Equalization.
///
/// The image is split into a `grid x grid` set of tiles. Each tile gets its own
/// equalization table built from a histogram clipped at
/// `max(1, clip_limit * tile_area / 256)`, with the clipped excess spread over
/// all bins. Output pixels blend the tables of the four nearest tile centres
/// bilinearly, so tile seams do not show. A non-positive `clip_limit`
/// disables clipping (plain adaptive equalization).
pub fn clahe(gray: &Array2<u8>, clip_limit: f64, grid: usize) -> Array2<u8> {
    let (h, w) = gray.dim();
    if h == 0 || w == 0 {
        return gray.clone();
    }

    let grid_y = grid.clamp(1, h);
    let grid_x = grid.clamp(1, w);

    let mut luts = Vec::with_capacity(grid_y * grid_x);
    for ty in 0..grid_y {
        let (r0, r1) = (ty * h / grid_y, (ty + 1) * h / grid_y);
        for tx in 0..grid_x {
            let (c0, c1) = (tx * w / grid_x, (tx + 1) * w / grid_x);
            luts.push(tile_lut(gray, r0, r1, c0, c1, clip_limit));
        }
    }

    let tile_h = h as f64 / grid_y as f64;
    let tile_w = w as f64 / grid_x as f64;

    Array2::from_shape_fn((h, w), |(row, col)| {
        let (ty1, ty2, ya) = neighbours(row, tile_h, grid_y);
        let (tx1, tx2, xa) = neighbours(col, tile_w, grid_x);
        let v = gray[[row, col]] as usize;

        let top = (1.0 - xa) * luts[ty1 * grid_x + tx1][v] as f64
            + xa * luts[ty1 * grid_x + tx2][v] as f64;
        let bottom = (1.0 - xa) * luts[ty2 * grid_x + tx1][v] as f64
            + xa * luts[ty2 * grid_x + tx2][v] as f64;
        ((1.0 - ya) * top + ya * bottom).round().clamp(0.0, 255.0) as u8
    })
}

/// Indices of the two tile centres around `pos` and the weight of the second.
fn neighbours(pos: usize, tile_size: f64, tiles: usize) -> (usize, usize, f64) {
    let t = (pos as f64 + 0.5) / tile_size - 0.5;
    let t1 = t.floor();
    let weight = t - t1;
    let last = tiles as isize - 1;
    let i1 = (t1 as isize).clamp(0, last) as usize;
    let i2 = (t1 as isize + 1).clamp(0, last) as usize;
    (i1, i2, weight)
}

fn tile_lut(
    gray: &Array2<u8>,
    r0: usize,
    r1: usize,
    c0: usize,
    c1: usize,
    clip_limit: f64,
) -> [u8; GRAY_LEVELS] {
    let mut lut = [0u8; GRAY_LEVELS];
    let area = (r1 - r0) * (c1 - c0);
    if area == 0 {
        return lut;
    }

    let mut hist = [0usize; GRAY_LEVELS];
    for row in r0..r1 {
        for col in c0..c1 {
            hist[gray[[row, col]] as usize] += 1;
        }
    }

    if clip_limit > 0.0 {
        let limit = ((clip_limit * area as f64 / GRAY_LEVELS as f64) as usize).max(1);
        clip_histogram(&mut hist, limit);
    }

    let scale = (GRAY_LEVELS - 1) as f64 / area as f64;
    let mut sum = 0usize;
    for (slot, &count) in lut.iter_mut().zip(hist.iter()) {
        sum += count;
        *slot = (sum as f64 * scale).round().min(255.0) as u8;
    }
    lut
}

/// Clip every bin at `limit` and redistribute the excess evenly.
fn clip_histogram(hist: &mut [usize; GRAY_LEVELS], limit: usize) {
    let mut excess = 0usize;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }

    let batch = excess / GRAY_LEVELS;
    let residual = excess % GRAY_LEVELS;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (GRAY_LEVELS / residual).max(1);
        for bin in hist.iter_mut().step_by(step).take(residual) {
            *bin += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_preserves_total() {
        let mut hist = [0usize; GRAY_LEVELS];
        hist[10] = 900;
        hist[200] = 124;
        clip_histogram(&mut hist, 16);
        assert_eq!(hist.iter().sum::<usize>(), 1024);
        assert!(hist.iter().all(|&b| b <= 16 + 4));
    }

    #[test]
    fn test_neighbours_clamp_at_edges() {
        let (a, b, _) = neighbours(0, 10.0, 4);
        assert_eq!((a, b), (0, 0));
        let (a, b, _) = neighbours(39, 10.0, 4);
        assert_eq!((a, b), (3, 3));
    }
}
