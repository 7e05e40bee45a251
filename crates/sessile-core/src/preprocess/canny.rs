use ndarray::Array2;

/// tan(22.5°), boundary between horizontal and diagonal gradient sectors.
const TAN_22_5: f64 = 0.414_213_562_373_095;
/// tan(67.5°), boundary between diagonal and vertical gradient sectors.
const TAN_67_5: f64 = 2.414_213_562_373_095;

/// Canny edge detector on an 8-bit image.
///
/// Sobel 3x3 gradients (replicated borders), L1 magnitude `|gx| + |gy|`,
/// non-maximum suppression over four direction sectors, then hysteresis:
/// pixels above `high` seed edges that grow through 8-connected pixels above
/// `low`. Thresholds given in the wrong order are swapped.
pub fn canny(gray: &Array2<u8>, low: u32, high: u32) -> Array2<bool> {
    let (h, w) = gray.dim();
    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let (low, high) = (low as i32, high as i32);

    let mut edges = Array2::from_elem((h, w), false);
    if h == 0 || w == 0 {
        return edges;
    }

    let (gx, gy) = sobel(gray);
    let magnitude = Array2::from_shape_fn((h, w), |(r, c)| gx[[r, c]].abs() + gy[[r, c]].abs());

    let mag_at = |r: isize, c: isize| -> i32 {
        if r < 0 || c < 0 || r >= h as isize || c >= w as isize {
            0
        } else {
            magnitude[[r as usize, c as usize]]
        }
    };

    // Non-maximum suppression; 1 = weak candidate, 2 = strong.
    let mut class = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let m = magnitude[[row, col]];
            if m <= low {
                continue;
            }
            let (r, c) = (row as isize, col as isize);
            let ax = gx[[row, col]].abs() as f64;
            let ay = gy[[row, col]].abs() as f64;

            let is_max = if ay < ax * TAN_22_5 {
                m > mag_at(r, c - 1) && m >= mag_at(r, c + 1)
            } else if ay > ax * TAN_67_5 {
                m > mag_at(r - 1, c) && m >= mag_at(r + 1, c)
            } else if (gx[[row, col]] > 0) == (gy[[row, col]] > 0) {
                m > mag_at(r - 1, c - 1) && m >= mag_at(r + 1, c + 1)
            } else {
                m > mag_at(r - 1, c + 1) && m >= mag_at(r + 1, c - 1)
            };

            if is_max {
                class[[row, col]] = if m > high { 2 } else { 1 };
            }
        }
    }

    // Hysteresis: grow strong pixels through weak ones.
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for ((row, col), &v) in class.indexed_iter() {
        if v == 2 {
            edges[[row, col]] = true;
            stack.push((row, col));
        }
    }
    while let Some((row, col)) = stack.pop() {
        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if class[[nr, nc]] == 1 && !edges[[nr, nc]] {
                    edges[[nr, nc]] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }

    edges
}

/// 3x3 Sobel derivatives with replicated borders.
fn sobel(gray: &Array2<u8>) -> (Array2<i32>, Array2<i32>) {
    let (h, w) = gray.dim();
    let px = |r: isize, c: isize| -> i32 {
        let r = r.clamp(0, h as isize - 1) as usize;
        let c = c.clamp(0, w as isize - 1) as usize;
        gray[[r, c]] as i32
    };

    let mut gx = Array2::<i32>::zeros((h, w));
    let mut gy = Array2::<i32>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let (r, c) = (row as isize, col as isize);
            gx[[row, col]] = (px(r - 1, c + 1) + 2 * px(r, c + 1) + px(r + 1, c + 1))
                - (px(r - 1, c - 1) + 2 * px(r, c - 1) + px(r + 1, c - 1));
            gy[[row, col]] = (px(r + 1, c - 1) + 2 * px(r + 1, c) + px(r + 1, c + 1))
                - (px(r - 1, c - 1) + 2 * px(r - 1, c) + px(r - 1, c + 1));
        }
    }
    (gx, gy)
}
