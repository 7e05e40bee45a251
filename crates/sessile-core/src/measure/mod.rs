pub mod angle;
pub mod apex;
pub mod baseline;
pub mod contact;
pub mod pipeline;
pub mod types;

pub use angle::contact_angle;
pub use apex::locate_apex;
pub use baseline::{estimate_baseline, find_surface_start, fit_baseline, Baseline, SurfaceStart};
pub use contact::{extract_contact_points, fit_contact_line, BaselineProfile};
pub use pipeline::{measure, measure_contour, measure_edges, measure_with};
pub use types::{AngleResult, Diagnostics, Failure, Measurement};
