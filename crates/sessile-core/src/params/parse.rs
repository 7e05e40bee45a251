use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::Result;

use super::ParameterSet;

/// A parameter-file line that was skipped. The parameter keeps its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterLineIssue {
    MissingEquals { line: usize },
    UnknownName { line: usize, name: String },
    InvalidValue { line: usize, name: String, value: String },
}

impl std::fmt::Display for ParameterLineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEquals { line } => write!(f, "line {line}: expected NAME = value"),
            Self::UnknownName { line, name } => write!(f, "line {line}: unknown parameter {name}"),
            Self::InvalidValue { line, name, value } => {
                write!(f, "line {line}: invalid value {value:?} for {name}")
            }
        }
    }
}

impl ParameterSet {
    /// Parse `NAME = value` lines on top of the defaults.
    ///
    /// `#` starts a comment and names are case-insensitive. Lines that cannot
    /// be used are returned as issues and never abort parsing.
    pub fn parse_text(text: &str) -> (Self, Vec<ParameterLineIssue>) {
        let mut params = Self::default();
        let mut issues = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let Some((name, value)) = content.split_once('=') else {
                issues.push(ParameterLineIssue::MissingEquals { line });
                continue;
            };
            let name = name.trim().to_ascii_uppercase();
            let value = value.trim();

            let applied = match name.as_str() {
                "CLIP_LIMIT" => assign(&mut params.clip_limit, value),
                "THRESHOLD1" => assign(&mut params.threshold1, value),
                "THRESHOLD2" => assign(&mut params.threshold2, value),
                "POINTS_TO_TAKE" => assign(&mut params.points_to_take, value),
                "HEIGHT_THRESHOLD_START" => assign(&mut params.height_threshold_start, value),
                "HEIGHT_THRESHOLD_FINISH" => assign(&mut params.height_threshold_finish, value),
                "JUMP_THRESHOLD" => assign(&mut params.jump_threshold, value),
                "MIN_POINTS_TO_FIND" => assign(&mut params.min_points_to_find, value),
                _ => {
                    issues.push(ParameterLineIssue::UnknownName { line, name });
                    continue;
                }
            };

            if applied {
                debug!(parameter = %name, value, "Parameter override");
            } else {
                issues.push(ParameterLineIssue::InvalidValue {
                    line,
                    name,
                    value: value.to_string(),
                });
            }
        }

        (params, issues)
    }

    /// Parse parameter text, logging every skipped line.
    pub fn from_params_text(text: &str) -> Self {
        let (params, issues) = Self::parse_text(text);
        for issue in &issues {
            warn!("Ignoring parameter entry, {issue}");
        }
        params
    }

    /// Read a parameter file. Only I/O failures are errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading parameter file");
        Ok(Self::from_params_text(&text))
    }
}

fn assign<T: FromStr>(slot: &mut T, value: &str) -> bool {
    match value.parse::<T>() {
        Ok(v) => {
            *slot = v;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_keeps_slot_on_failure() {
        let mut slot = 7usize;
        assert!(!assign(&mut slot, "-3"));
        assert_eq!(slot, 7);
        assert!(assign(&mut slot, "12"));
        assert_eq!(slot, 12);
    }

    #[test]
    fn test_comment_only_line_is_not_an_issue() {
        let (_, issues) = ParameterSet::parse_text("# THRESHOLD1 = 10\n   \n");
        assert!(issues.is_empty());
    }
}
