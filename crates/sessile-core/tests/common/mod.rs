#![allow(dead_code)]

use ndarray::Array2;

use sessile_core::geometry::Point2D;
use sessile_core::raster::{EdgeMap, Raster};

/// Centre height of a circle of radius `r` whose cap above `yb` meets the
/// line `y = yb` at `theta_deg` (y down, so the centre sits below `yb` for
/// angles under 90°).
fn centre_y(yb: f64, r: f64, theta_deg: f64) -> f64 {
    yb + r * theta_deg.to_radians().cos()
}

fn inside_cap(x: f64, y: f64, cx: f64, cy: f64, yb: f64, r: f64) -> bool {
    y <= yb && (x - cx).powi(2) + (y - cy).powi(2) <= r * r
}

/// One-pixel outline of a spherical cap: cap pixels with at least one
/// 4-neighbour outside the cap.
pub fn cap_edge_map(w: usize, h: usize, cx: usize, yb: usize, r: f64, theta_deg: f64) -> EdgeMap {
    let (cxf, ybf) = (cx as f64, yb as f64);
    let cy = centre_y(ybf, r, theta_deg);
    let inside = |x: f64, y: f64| inside_cap(x, y, cxf, cy, ybf, r);

    let data = Array2::from_shape_fn((h, w), |(row, col)| {
        let (x, y) = (col as f64, row as f64);
        inside(x, y)
            && [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)]
                .iter()
                .any(|&(dx, dy)| !inside(x + dx, y + dy))
    });
    EdgeMap::new(data)
}

/// Gray photograph of a dark cap on a bright, uniform background.
pub fn cap_raster(w: usize, h: usize, cx: usize, yb: usize, r: f64, theta_deg: f64) -> Raster {
    let (cxf, ybf) = (cx as f64, yb as f64);
    let cy = centre_y(ybf, r, theta_deg);
    let data = Array2::from_shape_fn((h, w), |(row, col)| {
        if inside_cap(col as f64, row as f64, cxf, cy, ybf, r) {
            40u8
        } else {
            210u8
        }
    });
    Raster::Gray(data)
}

/// Rounded points along an ideal cap outline, left contact point over the
/// apex to the right contact point, without consecutive repeats.
pub fn cap_arc_points(cx: f64, yb: f64, r: f64, theta_deg: f64) -> Vec<Point2D> {
    let cy = centre_y(yb, r, theta_deg);
    let theta = theta_deg.to_radians();
    let n = (4.0 * r * theta) as usize + 1;
    let mut points: Vec<Point2D> = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let phi = (-90f64).to_radians() - theta + 2.0 * theta * i as f64 / n as f64;
        let p = Point2D::new((cx + r * phi.cos()).round() as i32, (cy + r * phi.sin()).round() as i32);
        if p.y as f64 > yb {
            continue;
        }
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    points
}

/// Hollow axis-aligned square outline with corners `(x0, y0)` and
/// `(x0 + side - 1, y0 + side - 1)`.
pub fn square_outline(mask: &mut Array2<bool>, x0: usize, y0: usize, side: usize) {
    for i in 0..side {
        mask[[y0, x0 + i]] = true;
        mask[[y0 + side - 1, x0 + i]] = true;
        mask[[y0 + i, x0]] = true;
        mask[[y0 + i, x0 + side - 1]] = true;
    }
}
