//! Error types for experiment decoding and output verification.

use std::fmt;

use crate::removal::{Algorithm, Ordering};

/// Raised when a caller hands the fixture an experiment index outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentError {
    /// Index is not in `0..len`
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Experiment index {} out of range (expected 0..{})",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for ExperimentError {}

/// Raised when an algorithm's output does not match what its semantics promise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Output holds a different multiset of values than expected
    ContentMismatch {
        algorithm: Algorithm,
        /// Values expected in the output but absent (with multiplicity)
        missing: Vec<i32>,
        /// Values present in the output but not expected (with multiplicity)
        unexpected: Vec<i32>,
    },

    /// Output has the right values in the wrong order
    OrderViolated {
        algorithm: Algorithm,
        ordering: Ordering,
    },
}

/// Number of values shown per side in a content mismatch message
const PREVIEW_LEN: usize = 8;

fn write_preview(f: &mut fmt::Formatter<'_>, values: &[i32]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().take(PREVIEW_LEN).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    if values.len() > PREVIEW_LEN {
        write!(f, ", ... {} more", values.len() - PREVIEW_LEN)?;
    }
    write!(f, "]")
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::ContentMismatch {
                algorithm,
                missing,
                unexpected,
            } => {
                write!(f, "{} produced the wrong values", algorithm.name())?;
                if !missing.is_empty() {
                    write!(f, " (missing: ")?;
                    write_preview(f, missing)?;
                    write!(f, ")")?;
                }
                if !unexpected.is_empty() {
                    write!(f, " (unexpected: ")?;
                    write_preview(f, unexpected)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            VerifyError::OrderViolated {
                algorithm,
                ordering,
            } => {
                write!(
                    f,
                    "{} broke its ordering guarantee ({})",
                    algorithm.name(),
                    ordering
                )
            }
        }
    }
}

impl std::error::Error for VerifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_error_display() {
        let error = ExperimentError::IndexOutOfRange { index: 36, len: 36 };
        assert_eq!(
            error.to_string(),
            "Experiment index 36 out of range (expected 0..36)"
        );
    }

    #[test]
    fn test_content_mismatch_display() {
        let error = VerifyError::ContentMismatch {
            algorithm: Algorithm::SwapPartition,
            missing: vec![1, 2],
            unexpected: vec![],
        };
        assert_eq!(
            error.to_string(),
            "swap_partition produced the wrong values (missing: [1, 2])"
        );
    }

    #[test]
    fn test_content_mismatch_preview_is_truncated() {
        let error = VerifyError::ContentMismatch {
            algorithm: Algorithm::CountingMapRebuild,
            missing: vec![],
            unexpected: (0..10).collect(),
        };
        let message = error.to_string();
        assert!(message.contains("unexpected: [0, 1, 2, 3, 4, 5, 6, 7, ... 2 more]"));
    }

    #[test]
    fn test_order_violated_display() {
        let error = VerifyError::OrderViolated {
            algorithm: Algorithm::SortSetDifference,
            ordering: Ordering::Sorted,
        };
        assert_eq!(
            error.to_string(),
            "sort_set_difference broke its ordering guarantee (sorted)"
        );
    }
}
