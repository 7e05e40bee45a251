use thiserror::Error;

/// Line fit that ran short of supporting points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitStage {
    Apex,
    Baseline,
    ContactLine,
}

impl std::fmt::Display for FitStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apex => write!(f, "apex"),
            Self::Baseline => write!(f, "baseline"),
            Self::ContactLine => write!(f, "contact line"),
        }
    }
}

/// Per-image measurement failure.
///
/// These are value-level outcomes: a batch records them and moves on.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum MeasureError {
    #[error("Droplet not detected")]
    DropletNotDetected,

    #[error("Insufficient points for {stage} fit: found {found}, need {required}")]
    InsufficientPoints {
        stage: FitStage,
        found: usize,
        required: usize,
    },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

#[derive(Error, Debug)]
pub enum DropletError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image load error: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, DropletError>;
