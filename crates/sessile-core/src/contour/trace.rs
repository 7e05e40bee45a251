use ndarray::Array2;

use crate::geometry::Point2D;
use crate::params::ContourApproximation;
use crate::raster::EdgeMap;

use super::components::{label_components, outside_background};
use super::Contour;

/// Moore neighbourhood as (dx, dy), y down: E, NE, N, NW, W, SW, S, SE.
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Index into [`DIRECTIONS`] of the west neighbour.
const WEST: usize = 4;

/// Outer boundary of every outermost 8-connected edge component.
///
/// Components lying inside a hole of another component are skipped. Each
/// boundary starts at its component's first pixel in raster order; contours
/// are returned in that order as well.
pub fn find_external_contours(edges: &EdgeMap, approximation: ContourApproximation) -> Vec<Contour> {
    let mask = &edges.data;
    let (h, w) = mask.dim();
    let (labels, count) = label_components(mask);
    if count == 0 {
        return Vec::new();
    }
    let outside = outside_background(mask);

    let mut starts: Vec<Option<(usize, usize)>> = vec![None; count + 1];
    let mut external = vec![false; count + 1];

    for ((row, col), &label) in labels.indexed_iter() {
        if label == 0 {
            continue;
        }
        let label = label as usize;
        if starts[label].is_none() {
            starts[label] = Some((row, col));
        }
        if !external[label] && touches_outside(&outside, row, col, h, w) {
            external[label] = true;
        }
    }

    starts
        .iter()
        .enumerate()
        .filter(|&(label, _)| external[label])
        .filter_map(|(_, start)| *start)
        .map(|(row, col)| {
            let points = trace_boundary(mask, Point2D::new(col as i32, row as i32));
            let points = match approximation {
                ContourApproximation::None => points,
                ContourApproximation::Simple => compress_runs(&points),
            };
            Contour::new(points)
        })
        .collect()
}

fn touches_outside(outside: &Array2<bool>, row: usize, col: usize, h: usize, w: usize) -> bool {
    if row == 0 || col == 0 || row + 1 == h || col + 1 == w {
        return true;
    }
    outside[[row - 1, col]] || outside[[row + 1, col]] || outside[[row, col - 1]] || outside[[row, col + 1]]
}

/// Moore neighbour tracing with Jacob's stopping criterion.
///
/// `start` must be the first foreground pixel of its component in raster
/// order, so its west neighbour is background. Tracing stops when the walk is
/// back at `start` and about to repeat its first move.
pub fn trace_boundary(mask: &Array2<bool>, start: Point2D) -> Vec<Point2D> {
    let (h, w) = mask.dim();
    let is_fg = |p: Point2D| -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < w && (p.y as usize) < h && mask[[p.y as usize, p.x as usize]]
    };

    let mut points = vec![start];
    let mut current = start;
    let mut backtrack = WEST;
    let mut first_move: Option<Point2D> = None;

    for _ in 0..(4 * h * w + 8) {
        let mut next = None;
        for i in 1..=8 {
            let k = (backtrack + i) % 8;
            let candidate = step(current, k);
            if is_fg(candidate) {
                // The neighbour checked just before is background; it becomes
                // the backtrack position relative to the new pixel.
                let previous = step(current, (backtrack + i - 1) % 8);
                next = Some((candidate, direction_index(previous.x - candidate.x, previous.y - candidate.y)));
                break;
            }
        }

        let Some((candidate, back)) = next else {
            break;
        };

        match first_move {
            None => first_move = Some(candidate),
            Some(first) if current == start && candidate == first => break,
            Some(_) => {}
        }

        current = candidate;
        backtrack = back;
        points.push(current);
    }

    if points.len() > 1 && points.last() == Some(&start) {
        points.pop();
    }
    points
}

fn step(p: Point2D, k: usize) -> Point2D {
    let (dx, dy) = DIRECTIONS[k];
    Point2D::new(p.x + dx, p.y + dy)
}

fn direction_index(dx: i32, dy: i32) -> usize {
    DIRECTIONS
        .iter()
        .position(|&d| d == (dx, dy))
        .unwrap_or(WEST)
}

/// Keep only the points where the chain direction changes.
pub fn compress_runs(points: &[Point2D]) -> Vec<Point2D> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let compressed: Vec<Point2D> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            (cur.x - prev.x, cur.y - prev.y) != (next.x - cur.x, next.y - cur.y)
        })
        .map(|i| points[i])
        .collect();

    if compressed.is_empty() {
        points.to_vec()
    } else {
        compressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_boundary() {
        let mut mask = Array2::from_elem((3, 3), false);
        mask[[1, 1]] = true;
        assert_eq!(trace_boundary(&mask, Point2D::new(1, 1)), vec![Point2D::new(1, 1)]);
    }

    #[test]
    fn test_square_boundary_visits_each_border_pixel_once() {
        let mask = Array2::from_shape_fn((5, 5), |(r, c)| (1..=3).contains(&r) && (1..=3).contains(&c));
        let points = trace_boundary(&mask, Point2D::new(1, 1));
        assert_eq!(points.len(), 8);
        assert!(!points.contains(&Point2D::new(2, 2)));
    }

    #[test]
    fn test_compress_runs_keeps_corners() {
        let square = vec![
            Point2D::new(0, 0),
            Point2D::new(0, 1),
            Point2D::new(0, 2),
            Point2D::new(1, 2),
            Point2D::new(2, 2),
            Point2D::new(2, 1),
            Point2D::new(2, 0),
            Point2D::new(1, 0),
        ];
        let corners = compress_runs(&square);
        assert_eq!(
            corners,
            vec![Point2D::new(0, 0), Point2D::new(0, 2), Point2D::new(2, 2), Point2D::new(2, 0)]
        );
    }
}
