pub mod batch;
pub mod consts;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod io;
pub mod measure;
pub mod params;
pub mod preprocess;
pub mod raster;
pub mod report;

pub use error::{DropletError, MeasureError, Result};
pub use measure::{measure, measure_with, AngleResult};
pub use params::{Heuristics, ParameterSet};
pub use raster::{EdgeMap, Raster};
