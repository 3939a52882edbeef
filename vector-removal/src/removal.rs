//! Six strategies for removing a batch of values from a vector.
//!
//! They do not all compute the same thing. Some treat the source as a set
//! and drop every occurrence of any value it contains; others treat it as a
//! multiset and let each source element cancel exactly one destination
//! element. They also differ in whether survivors keep their order. The
//! [`Algorithm`] enum records both properties for each strategy.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// How an algorithm interprets duplicates in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantics {
    /// Every occurrence of any value present in the source is removed
    Set,
    /// Each source element removes at most one matching destination element
    Multiset,
}

impl fmt::Display for Semantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semantics::Set => write!(f, "set"),
            Semantics::Multiset => write!(f, "multiset"),
        }
    }
}

/// Order of the survivors after removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordering {
    /// Survivors keep their original relative order
    Preserved,
    /// Survivors come out sorted ascending
    Sorted,
    /// No guarantee
    Unspecified,
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordering::Preserved => write!(f, "preserved"),
            Ordering::Sorted => write!(f, "sorted"),
            Ordering::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// The competing removal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    SwapPartition,
    EraseRemoveEach,
    RemoveShrinkingBound,
    SortSetDifference,
    FindRemoveIf,
    CountingMapRebuild,
}

impl Algorithm {
    /// All strategies, in registration order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::SwapPartition,
        Algorithm::EraseRemoveEach,
        Algorithm::RemoveShrinkingBound,
        Algorithm::SortSetDifference,
        Algorithm::FindRemoveIf,
        Algorithm::CountingMapRebuild,
    ];

    /// Stable identifier used in benchmark ids and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::SwapPartition => "swap_partition",
            Algorithm::EraseRemoveEach => "erase_remove_each",
            Algorithm::RemoveShrinkingBound => "remove_shrinking_bound",
            Algorithm::SortSetDifference => "sort_set_difference",
            Algorithm::FindRemoveIf => "find_remove_if",
            Algorithm::CountingMapRebuild => "counting_map_rebuild",
        }
    }

    /// Look up a strategy by its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.name() == name)
    }

    pub fn semantics(&self) -> Semantics {
        match self {
            Algorithm::SwapPartition | Algorithm::FindRemoveIf => Semantics::Set,
            Algorithm::EraseRemoveEach
            | Algorithm::RemoveShrinkingBound
            | Algorithm::SortSetDifference
            | Algorithm::CountingMapRebuild => Semantics::Multiset,
        }
    }

    pub fn ordering(&self) -> Ordering {
        match self {
            Algorithm::EraseRemoveEach
            | Algorithm::RemoveShrinkingBound
            | Algorithm::FindRemoveIf => Ordering::Preserved,
            Algorithm::SortSetDifference => Ordering::Sorted,
            Algorithm::SwapPartition | Algorithm::CountingMapRebuild => Ordering::Unspecified,
        }
    }

    /// Quadratic strategies are skipped on large destinations
    pub fn is_size_gated(&self) -> bool {
        matches!(
            self,
            Algorithm::EraseRemoveEach | Algorithm::RemoveShrinkingBound | Algorithm::FindRemoveIf
        )
    }

    /// Run this strategy over `destination` in place
    pub fn apply<T>(&self, destination: &mut Vec<T>, source: &[T])
    where
        T: Copy + Eq + Hash + Ord,
    {
        match self {
            Algorithm::SwapPartition => swap_partition(destination, source),
            Algorithm::EraseRemoveEach => erase_remove_each(destination, source),
            Algorithm::RemoveShrinkingBound => remove_shrinking_bound(destination, source),
            Algorithm::SortSetDifference => sort_set_difference(destination, source),
            Algorithm::FindRemoveIf => find_remove_if(destination, source),
            Algorithm::CountingMapRebuild => counting_map_rebuild(destination, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remove every value present in `source`, swapping hits to the back.
///
/// Each hit is swapped with the last element of the shrinking live region,
/// and the element swapped in is examined next. Survivors end up in an
/// unspecified order.
pub fn swap_partition<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Eq + Hash,
{
    let elems: HashSet<T> = source.iter().copied().collect();

    let mut i = 0;
    let mut target = destination.len();
    while i < target {
        if elems.contains(&destination[i]) {
            target -= 1;
            destination.swap(i, target);
        } else {
            i += 1;
        }
    }
    destination.truncate(target);
}

/// One linear remove pass per source element, each removing the first match
pub fn erase_remove_each<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Eq,
{
    for value in source {
        if let Some(position) = destination.iter().position(|e| e == value) {
            destination.remove(position);
        }
    }
}

/// Like [`erase_remove_each`], but compacts inside a shrinking window.
///
/// Each pass only scans `destination[..last]` and closes the gap by shifting
/// that window left by one, so no pass touches the tail that previous passes
/// already vacated. The vector is truncated once at the end.
pub fn remove_shrinking_bound<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Eq,
{
    let mut last = destination.len();
    for value in source {
        if let Some(position) = destination[..last].iter().position(|e| e == value) {
            destination.copy_within(position + 1..last, position);
            last -= 1;
        }
    }
    destination.truncate(last);
}

/// Sort both sides and merge, keeping destination values the source does not match.
///
/// Duplicates are matched pairwise, so a value appearing three times in the
/// destination and once in the source survives twice. Output is sorted.
pub fn sort_set_difference<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Ord,
{
    let mut source = source.to_vec();
    destination.sort_unstable();
    source.sort_unstable();

    let mut result = Vec::with_capacity(destination.len());
    let mut remaining = source.iter().peekable();
    for &value in destination.iter() {
        while remaining.next_if(|&&s| s < value).is_some() {}
        if remaining.next_if(|&&s| s == value).is_none() {
            result.push(value);
        }
    }

    *destination = result;
}

/// Keep elements not found by a linear search of `source`
pub fn find_remove_if<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Eq,
{
    destination.retain(|e| !source.contains(e));
}

/// Count destination values, subtract source values, write back what remains.
///
/// Survivors are grouped by value in the map's iteration order.
pub fn counting_map_rebuild<T>(destination: &mut Vec<T>, source: &[T])
where
    T: Copy + Eq + Hash,
{
    let mut counts: HashMap<T, isize> = HashMap::with_capacity(destination.len());

    for &value in destination.iter() {
        *counts.entry(value).or_insert(0) += 1;
    }

    for &value in source {
        *counts.entry(value).or_insert(0) -= 1;
    }

    destination.clear();
    for (value, count) in counts {
        if count < 1 {
            continue;
        }
        destination.extend(std::iter::repeat_n(value, count as usize));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<i32>) -> Vec<i32> {
        values.sort_unstable();
        values
    }

    fn run(algorithm: Algorithm, destination: &[i32], source: &[i32]) -> Vec<i32> {
        let mut destination = destination.to_vec();
        algorithm.apply(&mut destination, source);
        destination
    }

    #[test]
    fn test_set_semantics_removes_every_occurrence() {
        for algorithm in [Algorithm::SwapPartition, Algorithm::FindRemoveIf] {
            let output = run(algorithm, &[5, 3, 5, 1], &[5]);
            assert_eq!(sorted(output), vec![1, 3], "{}", algorithm);
        }
    }

    #[test]
    fn test_multiset_semantics_removes_one_per_source_element() {
        for algorithm in [
            Algorithm::EraseRemoveEach,
            Algorithm::RemoveShrinkingBound,
            Algorithm::SortSetDifference,
            Algorithm::CountingMapRebuild,
        ] {
            let output = run(algorithm, &[5, 3, 5, 1], &[5]);
            assert_eq!(sorted(output), vec![1, 3, 5], "{}", algorithm);
        }
    }

    #[test]
    fn test_order_preserving_variants_keep_order() {
        assert_eq!(run(Algorithm::EraseRemoveEach, &[5, 3, 5, 1], &[5]), vec![3, 5, 1]);
        assert_eq!(
            run(Algorithm::RemoveShrinkingBound, &[5, 3, 5, 1], &[5]),
            vec![3, 5, 1]
        );
        assert_eq!(run(Algorithm::FindRemoveIf, &[5, 3, 5, 1], &[5]), vec![3, 1]);
    }

    #[test]
    fn test_sort_set_difference_output_is_sorted() {
        assert_eq!(
            run(Algorithm::SortSetDifference, &[9, 4, 4, 7, 1, 4], &[4, 7, 8]),
            vec![1, 4, 4, 9]
        );
    }

    #[test]
    fn test_source_duplicates_remove_matching_duplicates() {
        let destination = [2, 2, 2, 6];
        let source = [2, 2];

        assert_eq!(run(Algorithm::EraseRemoveEach, &destination, &source), vec![2, 6]);
        assert_eq!(
            run(Algorithm::RemoveShrinkingBound, &destination, &source),
            vec![2, 6]
        );
        assert_eq!(
            sorted(run(Algorithm::CountingMapRebuild, &destination, &source)),
            vec![2, 6]
        );
        assert_eq!(run(Algorithm::SortSetDifference, &destination, &source), vec![2, 6]);
        assert_eq!(run(Algorithm::FindRemoveIf, &destination, &source), vec![6]);
    }

    #[test]
    fn test_source_value_absent_from_destination_is_ignored() {
        for algorithm in Algorithm::ALL {
            let output = run(algorithm, &[1, 2, 3], &[42, 2]);
            assert_eq!(sorted(output), vec![1, 3], "{}", algorithm);
        }
    }

    #[test]
    fn test_surplus_source_copies_floor_at_zero() {
        for algorithm in [
            Algorithm::EraseRemoveEach,
            Algorithm::RemoveShrinkingBound,
            Algorithm::SortSetDifference,
            Algorithm::CountingMapRebuild,
        ] {
            let output = run(algorithm, &[7, 8], &[7, 7, 7]);
            assert_eq!(output, vec![8], "{}", algorithm);
        }
    }

    #[test]
    fn test_empty_inputs_do_not_panic() {
        for algorithm in Algorithm::ALL {
            assert!(run(algorithm, &[], &[]).is_empty());
            assert!(run(algorithm, &[], &[1, 2]).is_empty());
            assert_eq!(sorted(run(algorithm, &[3, 1], &[])), vec![1, 3]);
        }
    }

    #[test]
    fn test_removing_everything() {
        for algorithm in Algorithm::ALL {
            let output = run(algorithm, &[4, 4, 9], &[9, 4, 4]);
            assert!(output.is_empty(), "{}", algorithm);
        }
    }

    #[test]
    fn test_extreme_values() {
        let destination = [i32::MIN, 0, i32::MAX, i32::MIN];
        for algorithm in Algorithm::ALL {
            let output = run(algorithm, &destination, &[i32::MAX]);
            assert_eq!(sorted(output), vec![i32::MIN, i32::MIN, 0], "{}", algorithm);
        }
    }

    #[test]
    fn test_swap_partition_examines_swapped_in_element() {
        // The last element is itself a hit once it is swapped to the front.
        let output = run(Algorithm::SwapPartition, &[1, 2, 3, 1], &[1]);
        assert_eq!(sorted(output), vec![2, 3]);
    }

    #[test]
    fn test_generic_over_value_type() {
        let mut destination: Vec<u64> = vec![10, 20, 30, 20];
        counting_map_rebuild(&mut destination, &[20]);
        destination.sort_unstable();
        assert_eq!(destination, vec![10, 20, 30]);

        let mut destination = vec!['a', 'b', 'a'];
        swap_partition(&mut destination, &['a']);
        assert_eq!(destination, vec!['b']);
    }

    #[test]
    fn test_algorithm_metadata() {
        assert_eq!(Algorithm::ALL.len(), 6);
        assert_eq!(
            Algorithm::ALL
                .iter()
                .filter(|algorithm| algorithm.is_size_gated())
                .count(),
            3
        );
        assert_eq!(Algorithm::SwapPartition.semantics(), Semantics::Set);
        assert_eq!(Algorithm::CountingMapRebuild.ordering(), Ordering::Unspecified);
        assert_eq!(Algorithm::SortSetDifference.ordering(), Ordering::Sorted);
    }

    #[test]
    fn test_from_name_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_name("bogo_remove"), None);
    }
}
