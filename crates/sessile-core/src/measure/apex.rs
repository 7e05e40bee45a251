use crate::contour::Contour;
use crate::error::{FitStage, MeasureError};
use crate::geometry::Point2D;

/// Topmost contour point (minimum y), the first one in traversal order on ties.
pub fn locate_apex(contour: &Contour) -> Result<Point2D, MeasureError> {
    contour
        .points
        .iter()
        .copied()
        .min_by_key(|p| p.y)
        .ok_or(MeasureError::InsufficientPoints {
            stage: FitStage::Apex,
            found: 0,
            required: 1,
        })
}
