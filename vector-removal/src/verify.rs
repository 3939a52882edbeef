//! Reference results for checking what a removal algorithm produced.
//!
//! The reference is computed with ordered count maps so it is independent of
//! every strategy under test.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::VerifyError;
use crate::removal::{Algorithm, Ordering, Semantics};

fn counts(values: &[i32]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// What `destination` should contain after removing `source`, in destination order
pub fn expected_output(semantics: Semantics, destination: &[i32], source: &[i32]) -> Vec<i32> {
    match semantics {
        Semantics::Set => {
            let removed: BTreeSet<i32> = source.iter().copied().collect();
            destination
                .iter()
                .copied()
                .filter(|value| !removed.contains(value))
                .collect()
        }
        Semantics::Multiset => {
            let mut pending = counts(source);
            destination
                .iter()
                .copied()
                .filter(|value| match pending.get_mut(value) {
                    Some(remaining) if *remaining > 0 => {
                        *remaining -= 1;
                        false
                    }
                    _ => true,
                })
                .collect()
        }
    }
}

/// Check `output` against what `algorithm` promises for this input
pub fn check(
    algorithm: Algorithm,
    destination: &[i32],
    source: &[i32],
    output: &[i32],
) -> Result<(), VerifyError> {
    let expected = expected_output(algorithm.semantics(), destination, source);

    let mut want = counts(&expected);
    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (value, got) in counts(output) {
        let wanted = want.remove(&value).unwrap_or(0);
        if got > wanted {
            unexpected.extend(std::iter::repeat_n(value, got - wanted));
        } else if wanted > got {
            missing.extend(std::iter::repeat_n(value, wanted - got));
        }
    }
    for (value, wanted) in want {
        missing.extend(std::iter::repeat_n(value, wanted));
    }

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(VerifyError::ContentMismatch {
            algorithm,
            missing,
            unexpected,
        });
    }

    // Contents match here; survivors need only keep their destination order
    let ordering = algorithm.ordering();
    let in_order = match ordering {
        Ordering::Preserved => {
            let mut remaining = destination.iter();
            output.iter().all(|value| remaining.any(|d| d == value))
        }
        Ordering::Sorted => output.is_sorted(),
        Ordering::Unspecified => true,
    };
    if !in_order {
        return Err(VerifyError::OrderViolated {
            algorithm,
            ordering,
        });
    }

    Ok(())
}
