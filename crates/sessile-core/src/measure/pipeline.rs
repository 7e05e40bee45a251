use tracing::{debug, info};

use crate::contour::{find_external_contours, select_droplet, Contour};
use crate::error::MeasureError;
use crate::params::{Heuristics, ParameterSet};
use crate::preprocess::preprocess;
use crate::raster::{EdgeMap, Raster};

use super::angle::contact_angle;
use super::apex::locate_apex;
use super::baseline::{find_surface_start, fit_baseline};
use super::contact::{extract_contact_points, fit_contact_line};
use super::types::{AngleResult, Diagnostics, Failure, Measurement};

/// Measure the contact angle of the droplet in `raster` with default heuristics.
pub fn measure(raster: &Raster, params: &ParameterSet) -> AngleResult {
    measure_with(raster, params, &Heuristics::default())
}

pub fn measure_with(raster: &Raster, params: &ParameterSet, heuristics: &Heuristics) -> AngleResult {
    let edges = preprocess(raster, params, heuristics);
    measure_edges(&edges, params, heuristics)
}

/// Measure from an already computed edge map.
pub fn measure_edges(edges: &EdgeMap, params: &ParameterSet, heuristics: &Heuristics) -> AngleResult {
    let contours = find_external_contours(edges, heuristics.contour_approximation);
    debug!(count = contours.len(), "External contours found");

    let droplet = select_droplet(&contours, edges.height(), heuristics).map_err(Failure::bare)?;
    measure_contour(&droplet, params, heuristics)
}

/// Geometry stages on a selected droplet contour.
pub fn measure_contour(contour: &Contour, params: &ParameterSet, heuristics: &Heuristics) -> AngleResult {
    let mut diagnostics = Diagnostics {
        contour: Some(contour.clone()),
        ..Diagnostics::default()
    };
    match run_geometry(contour, params, heuristics, &mut diagnostics) {
        Ok(angle_deg) => Ok(Measurement { angle_deg, diagnostics }),
        Err(error) => {
            debug!(%error, "Measurement failed");
            Err(Failure { error, diagnostics })
        }
    }
}

fn run_geometry(
    contour: &Contour,
    params: &ParameterSet,
    heuristics: &Heuristics,
    diagnostics: &mut Diagnostics,
) -> Result<f64, MeasureError> {
    let apex = locate_apex(contour)?;
    diagnostics.apex = Some(apex);

    let start = find_surface_start(contour, apex, heuristics)?;
    diagnostics.surface_start = Some(start.point);
    diagnostics.used_fallback = start.used_fallback;

    let baseline = fit_baseline(contour, start, params)?;
    diagnostics.baseline = Some(baseline.clone());

    let points = extract_contact_points(contour, apex, &baseline, params)?;
    diagnostics.contact_points = points.clone();

    let contact_line = fit_contact_line(&points, params)?;
    diagnostics.contact_line = Some(contact_line);

    let angle = contact_angle(&baseline.line, &contact_line)?;
    info!(angle_deg = angle, apex = %apex, contact_points = points.len(), "Contact angle measured");
    Ok(angle)
}
