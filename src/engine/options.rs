use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::search::{SearchConfig, SearchDepth, MAX_FIXED_DEPTH};

/// Most worker threads accepted for the root search
const MAX_THREADS: usize = 256;

/// Error type for rejected option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No option with this name
    UnknownOption { name: String },
    /// The option needs a value
    MissingValue { name: String },
    /// The value does not parse or is out of range
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineOptions {
    pub search: SearchConfig,
}

impl EngineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one option by name. Names are trimmed and case-insensitive.
    ///
    /// - `depth` (alias `difficulty`): `1`..=`4`, or `best`
    /// - `threads`: `1`..=`256`
    /// - `node budget` (alias `nodebudget`): tree size allowed for `best`
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value
            .map(str::trim)
            .ok_or_else(|| OptionError::MissingValue {
                name: normalized.clone(),
            })?;
        let invalid = || OptionError::InvalidValue {
            name: normalized.clone(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "depth" | "difficulty" => {
                self.search.depth = if value.eq_ignore_ascii_case("best") {
                    SearchDepth::Best
                } else {
                    let depth = value
                        .parse::<u32>()
                        .ok()
                        .filter(|d| (1..=MAX_FIXED_DEPTH).contains(d))
                        .ok_or_else(invalid)?;
                    SearchDepth::Fixed(depth)
                };
            }
            "threads" => {
                self.search.threads = value
                    .parse::<usize>()
                    .ok()
                    .filter(|t| (1..=MAX_THREADS).contains(t))
                    .ok_or_else(invalid)?;
            }
            "node budget" | "nodebudget" => {
                self.search.node_budget = value
                    .parse::<u64>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(invalid)?;
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: normalized.clone(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::new();
        assert_eq!(options.search.depth, SearchDepth::Fixed(2));
        assert_eq!(options.search.threads, 1);
    }

    #[test]
    fn test_set_depth() {
        let mut options = EngineOptions::new();
        options.apply_setoption(" Depth ", Some("3")).unwrap();
        assert_eq!(options.search.depth, SearchDepth::Fixed(3));

        options.apply_setoption("difficulty", Some("BEST")).unwrap();
        assert_eq!(options.search.depth, SearchDepth::Best);
    }

    #[test]
    fn test_depth_out_of_range() {
        let mut options = EngineOptions::new();
        let err = options.apply_setoption("depth", Some("5")).unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue {
                name: "depth".to_string(),
                value: "5".to_string(),
            }
        );
        assert!(options.apply_setoption("depth", Some("0")).is_err());
        assert_eq!(options.search.depth, SearchDepth::Fixed(2));
    }

    #[test]
    fn test_threads_and_budget() {
        let mut options = EngineOptions::new();
        options.apply_setoption("threads", Some("4")).unwrap();
        options.apply_setoption("Node Budget", Some("5000")).unwrap();
        assert_eq!(options.search.threads, 4);
        assert_eq!(options.search.node_budget, 5000);
        assert!(options.apply_setoption("threads", Some("0")).is_err());
    }

    #[test]
    fn test_unknown_and_missing() {
        let mut options = EngineOptions::new();
        assert!(matches!(
            options.apply_setoption("hash", Some("16")),
            Err(OptionError::UnknownOption { .. })
        ));
        assert!(matches!(
            options.apply_setoption("depth", None),
            Err(OptionError::MissingValue { .. })
        ));
    }
}
