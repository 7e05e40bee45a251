use tracing::debug;

use crate::error::MeasureError;
use crate::params::Heuristics;

use super::Contour;

/// Pick the droplet among the extracted contours.
///
/// Candidates enclosing less than `min_contour_area`, or whose bounding box
/// starts below the vertical midpoint of the image (reflections and shadows
/// sit low in the frame), are dropped. The largest survivor wins; on equal
/// areas the earlier contour is kept.
pub fn select_droplet(
    contours: &[Contour],
    image_height: usize,
    heuristics: &Heuristics,
) -> Result<Contour, MeasureError> {
    let midpoint = (image_height / 2) as i32;
    let mut best: Option<(&Contour, f64)> = None;

    for contour in contours {
        let area = contour.area();
        if area < heuristics.min_contour_area {
            continue;
        }
        let Some(rect) = contour.bounding_rect() else {
            continue;
        };
        if rect.y > midpoint {
            debug!(area, top = rect.y, midpoint, "Skipping contour below midpoint");
            continue;
        }
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((contour, area));
        }
    }

    match best {
        Some((contour, area)) => {
            debug!(area, points = contour.len(), "Droplet contour selected");
            Ok(contour.clone())
        }
        None => Err(MeasureError::DropletNotDetected),
    }
}
