use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::geometry::{Line, Point2D};
use crate::measure::Diagnostics;
use crate::raster::Raster;

const CONTOUR: Rgb<u8> = Rgb([0, 255, 0]);
const CONTACT_POINTS: Rgb<u8> = Rgb([255, 255, 0]);
const BASELINE: Rgb<u8> = Rgb([0, 128, 255]);
const CONTACT_LINE: Rgb<u8> = Rgb([255, 0, 255]);
const APEX: Rgb<u8> = Rgb([255, 0, 0]);
const SURFACE_START: Rgb<u8> = Rgb([0, 0, 255]);

const MARKER_RADIUS: i32 = 4;

/// Draw whatever geometry the measurement produced on top of the input.
/// The output always has the input's dimensions.
pub fn render_overlay(raster: &Raster, diagnostics: &Diagnostics) -> RgbImage {
    let (w, h) = (raster.width(), raster.height());
    let mut img = RgbImage::from_fn(w as u32, h as u32, |x, y| Rgb(raster.rgb_at(y as usize, x as usize)));

    if let Some(contour) = &diagnostics.contour {
        for &p in &contour.points {
            put(&mut img, p.x, p.y, CONTOUR);
        }
    }
    if let Some(baseline) = &diagnostics.baseline {
        draw_infinite_line(&mut img, &baseline.line, BASELINE);
    }
    if let Some(line) = &diagnostics.contact_line {
        draw_infinite_line(&mut img, line, CONTACT_LINE);
    }
    for &p in &diagnostics.contact_points {
        put(&mut img, p.x, p.y, CONTACT_POINTS);
    }
    if let Some(apex) = diagnostics.apex {
        draw_cross(&mut img, apex, APEX);
    }
    if let Some(start) = diagnostics.surface_start {
        draw_cross(&mut img, start, SURFACE_START);
    }
    img
}

/// Render and write the overlay as PNG.
pub fn save_overlay(raster: &Raster, diagnostics: &Diagnostics, path: &Path) -> Result<()> {
    render_overlay(raster, diagnostics).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_cross(img: &mut RgbImage, at: Point2D, color: Rgb<u8>) {
    for d in -MARKER_RADIUS..=MARKER_RADIUS {
        put(img, at.x + d, at.y, color);
        put(img, at.x, at.y + d, color);
    }
}

/// Span the line across the whole image, clipped per pixel.
fn draw_infinite_line(img: &mut RgbImage, line: &Line, color: Rgb<u8>) {
    let norm = line.direction_norm();
    if norm == 0.0 {
        return;
    }
    let reach = (img.width() as f64).hypot(img.height() as f64) / norm;
    let (x0, y0) = line.point_at(-reach);
    let (x1, y1) = line.point_at(reach);
    draw_segment(img, (x0.round() as i32, y0.round() as i32), (x1.round() as i32, y1.round() as i32), color);
}

// Bresenham
fn draw_segment(img: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let (x_end, y_end) = to;
    let dx_abs = (x_end - x).abs();
    let dy_abs = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx_abs - dy_abs;

    loop {
        put(img, x, y, color);
        if x == x_end && y == y_end {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy_abs {
            err -= dy_abs;
            x += sx;
        }
        if e2 < dx_abs {
            err += dx_abs;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_endpoints_drawn() {
        let mut img = RgbImage::new(10, 10);
        draw_segment(&mut img, (1, 1), (8, 5), APEX);
        assert_eq!(*img.get_pixel(1, 1), APEX);
        assert_eq!(*img.get_pixel(8, 5), APEX);
    }

    #[test]
    fn test_out_of_bounds_points_are_clipped() {
        let mut img = RgbImage::new(4, 4);
        draw_segment(&mut img, (-5, 2), (10, 2), CONTOUR);
        assert!((0..4).all(|x| *img.get_pixel(x, 2) == CONTOUR));
    }
}
