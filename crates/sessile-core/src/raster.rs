use ndarray::{Array2, Array3};

use crate::error::{DropletError, Result};

/// An 8-bit input image, either single-channel or RGB.
///
/// Gray data has shape (height, width); RGB data has shape (height, width, 3).
#[derive(Clone, Debug, PartialEq)]
pub enum Raster {
    Gray(Array2<u8>),
    Rgb(Array3<u8>),
}

impl Raster {
    pub fn gray(data: Array2<u8>) -> Self {
        Self::Gray(data)
    }

    /// Wrap an RGB array, rejecting anything that is not (h, w, 3).
    pub fn rgb(data: Array3<u8>) -> Result<Self> {
        let (h, w, channels) = data.dim();
        if channels != 3 {
            return Err(DropletError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        Ok(Self::Rgb(data))
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Gray(data) => data.ncols(),
            Self::Rgb(data) => data.dim().1,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Gray(data) => data.nrows(),
            Self::Rgb(data) => data.dim().0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// RGB sample at (row, col); gray rasters replicate the intensity.
    pub fn rgb_at(&self, row: usize, col: usize) -> [u8; 3] {
        match self {
            Self::Gray(data) => {
                let v = data[[row, col]];
                [v, v, v]
            }
            Self::Rgb(data) => [data[[row, col, 0]], data[[row, col, 1]], data[[row, col, 2]]],
        }
    }
}

/// Binary edge mask produced by preprocessing, shape (height, width).
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMap {
    pub data: Array2<bool>,
}

impl EdgeMap {
    pub fn new(data: Array2<bool>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}
