use crate::consts::EPSILON;
use crate::error::MeasureError;
use crate::geometry::Line;

/// Angle in degrees between the direction vectors of two lines, in [0, 180].
pub fn contact_angle(baseline: &Line, contact: &Line) -> Result<f64, MeasureError> {
    let norms = baseline.direction_norm() * contact.direction_norm();
    if norms < EPSILON {
        return Err(MeasureError::DegenerateGeometry(
            "zero-length direction vector".to_string(),
        ));
    }
    let cos = (baseline.vx * contact.vx + baseline.vy * contact.vy) / norms;
    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}
