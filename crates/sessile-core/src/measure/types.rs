use thiserror::Error;

use crate::contour::Contour;
use crate::error::MeasureError;
use crate::geometry::{Line, Point2D};

use super::baseline::Baseline;

/// Intermediate geometry of one measurement, filled in as far as it got.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    /// Selected droplet outline.
    pub contour: Option<Contour>,
    /// Topmost outline point.
    pub apex: Option<Point2D>,
    /// Where the outline meets the surface below the apex.
    pub surface_start: Option<Point2D>,
    /// The surface start came from the bounding box corner.
    pub used_fallback: bool,
    pub baseline: Option<Baseline>,
    /// Right-flank points inside the height band, in outline order.
    pub contact_points: Vec<Point2D>,
    /// Line fitted through `contact_points`.
    pub contact_line: Option<Line>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Angle between baseline and contact line, in `[0, 180]`.
    pub angle_deg: f64,
    pub diagnostics: Diagnostics,
}

#[derive(Error, Clone, Debug, PartialEq)]
#[error("{error}")]
pub struct Failure {
    pub error: MeasureError,
    /// Geometry of the stages that completed before `error`.
    pub diagnostics: Diagnostics,
}

impl Failure {
    pub fn bare(error: MeasureError) -> Self {
        Self {
            error,
            diagnostics: Diagnostics::default(),
        }
    }
}

/// Outcome for a single image: an angle, or the reason there is none.
pub type AngleResult = std::result::Result<Measurement, Failure>;
