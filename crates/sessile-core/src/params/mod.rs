pub mod heuristics;
pub mod parse;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLIP_LIMIT, DEFAULT_HEIGHT_THRESHOLD_FINISH, DEFAULT_HEIGHT_THRESHOLD_START,
    DEFAULT_JUMP_THRESHOLD, DEFAULT_MIN_POINTS_TO_FIND, DEFAULT_POINTS_TO_TAKE, DEFAULT_THRESHOLD1,
    DEFAULT_THRESHOLD2,
};

pub use heuristics::{ContourApproximation, Heuristics};
pub use parse::ParameterLineIssue;

/// The eight tunables of a measurement.
///
/// Serialized with the upper-case names used by parameter files, so the TOML
/// form of the defaults is itself a valid parameter file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ParameterSet {
    /// CLAHE clip limit.
    #[serde(default = "default_clip_limit")]
    pub clip_limit: f64,
    /// Lower Canny hysteresis threshold.
    #[serde(default = "default_threshold1")]
    pub threshold1: u32,
    /// Upper Canny hysteresis threshold.
    #[serde(default = "default_threshold2")]
    pub threshold2: u32,
    /// Extreme contour points averaged per side for the baseline fit.
    #[serde(default = "default_points_to_take")]
    pub points_to_take: usize,
    /// Contact-line points must sit less than this far above the baseline.
    #[serde(default = "default_height_threshold_start")]
    pub height_threshold_start: i32,
    /// Contact-line points must sit more than this far above the baseline.
    #[serde(default = "default_height_threshold_finish")]
    pub height_threshold_finish: i32,
    /// Largest x gap allowed between consecutive contact-line points.
    #[serde(default = "default_jump_threshold")]
    pub jump_threshold: i32,
    /// Points that must be accepted before a gap stops accumulation.
    #[serde(default = "default_min_points_to_find")]
    pub min_points_to_find: usize,
}

fn default_clip_limit() -> f64 {
    DEFAULT_CLIP_LIMIT
}
fn default_threshold1() -> u32 {
    DEFAULT_THRESHOLD1
}
fn default_threshold2() -> u32 {
    DEFAULT_THRESHOLD2
}
fn default_points_to_take() -> usize {
    DEFAULT_POINTS_TO_TAKE
}
fn default_height_threshold_start() -> i32 {
    DEFAULT_HEIGHT_THRESHOLD_START
}
fn default_height_threshold_finish() -> i32 {
    DEFAULT_HEIGHT_THRESHOLD_FINISH
}
fn default_jump_threshold() -> i32 {
    DEFAULT_JUMP_THRESHOLD
}
fn default_min_points_to_find() -> usize {
    DEFAULT_MIN_POINTS_TO_FIND
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            clip_limit: DEFAULT_CLIP_LIMIT,
            threshold1: DEFAULT_THRESHOLD1,
            threshold2: DEFAULT_THRESHOLD2,
            points_to_take: DEFAULT_POINTS_TO_TAKE,
            height_threshold_start: DEFAULT_HEIGHT_THRESHOLD_START,
            height_threshold_finish: DEFAULT_HEIGHT_THRESHOLD_FINISH,
            jump_threshold: DEFAULT_JUMP_THRESHOLD,
            min_points_to_find: DEFAULT_MIN_POINTS_TO_FIND,
        }
    }
}

impl std::fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "clip {:.1}, canny {}/{}, take {}, band ({}, {}), jump {}, min {}",
            self.clip_limit,
            self.threshold1,
            self.threshold2,
            self.points_to_take,
            self.height_threshold_finish,
            self.height_threshold_start,
            self.jump_threshold,
            self.min_points_to_find
        )
    }
}
