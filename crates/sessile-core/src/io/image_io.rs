use std::path::{Path, PathBuf};

use image::DynamicImage;
use ndarray::{Array2, Array3};
use tracing::debug;

use crate::error::{DropletError, Result};
use crate::raster::Raster;

/// Decode an image file into a raster. Colour images stay RGB, everything
/// else becomes 8-bit gray.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Image decoded");
    raster_from_dynamic(&img)
}

pub fn raster_from_dynamic(img: &DynamicImage) -> Result<Raster> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let invalid = || DropletError::InvalidDimensions { width: w, height: h };
    if w == 0 || h == 0 {
        return Err(invalid());
    }

    if img.color().has_color() {
        let data = Array3::from_shape_vec((h, w, 3), img.to_rgb8().into_raw()).map_err(|_| invalid())?;
        Ok(Raster::Rgb(data))
    } else {
        let data = Array2::from_shape_vec((h, w), img.to_luma8().into_raw()).map_err(|_| invalid())?;
        Ok(Raster::Gray(data))
    }
}

/// Files in `dir` whose extension matches one of `extensions`
/// (case-insensitive), sorted by file name.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)));
        if matches {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
