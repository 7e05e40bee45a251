/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of intensity levels in an 8-bit image.
pub const GRAY_LEVELS: usize = 256;

// ---------------------------------------------------------------------------
// Parameter defaults
// ---------------------------------------------------------------------------

/// Default CLAHE clip limit.
pub const DEFAULT_CLIP_LIMIT: f64 = 3.0;

/// Default lower Canny hysteresis threshold.
pub const DEFAULT_THRESHOLD1: u32 = 50;

/// Default upper Canny hysteresis threshold.
pub const DEFAULT_THRESHOLD2: u32 = 150;

/// Default number of extreme contour points averaged per side of the baseline.
pub const DEFAULT_POINTS_TO_TAKE: usize = 30;

/// Default largest offset above the baseline for a contact-line point (exclusive).
pub const DEFAULT_HEIGHT_THRESHOLD_START: i32 = 40;

/// Default smallest offset above the baseline for a contact-line point (exclusive).
pub const DEFAULT_HEIGHT_THRESHOLD_FINISH: i32 = 5;

/// Default largest x gap tolerated between consecutive contact-line points.
pub const DEFAULT_JUMP_THRESHOLD: i32 = 2;

/// Default number of contact-line points required before a gap ends accumulation.
pub const DEFAULT_MIN_POINTS_TO_FIND: usize = 4;

// ---------------------------------------------------------------------------
// Heuristic defaults, tuned for side-view droplet photographs taken at eye
// level against a uniform background.
// ---------------------------------------------------------------------------

/// Contours enclosing fewer square pixels than this are treated as noise.
pub const DEFAULT_MIN_CONTOUR_AREA: f64 = 500.0;

/// Horizontal tolerance around the apex x when searching for the surface start.
pub const DEFAULT_SURFACE_SEARCH_RANGE: i32 = 6;

/// The surface start must lie more than this many pixels below the apex.
pub const DEFAULT_SURFACE_MIN_DISTANCE: i32 = 10;

/// CLAHE tiles per image axis.
pub const DEFAULT_CLAHE_TILE_GRID: usize = 8;

/// Gaussian blur kernel size (odd).
pub const DEFAULT_BLUR_KERNEL_SIZE: usize = 5;

/// Elliptical closing kernel size (odd).
pub const DEFAULT_CLOSING_KERNEL_SIZE: usize = 5;

/// Number of dilations (then erosions) in the gap-bridging closing.
pub const DEFAULT_CLOSING_ITERATIONS: usize = 2;
