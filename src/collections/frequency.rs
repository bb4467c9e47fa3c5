//! Occurrence counting over comparable elements.
//!
//! # Algorithm
//!
//! [`most_frequent`] tallies occurrences in a hash map while tracking the
//! running maximum. Once some element's tally exceeds half of the input
//! length no other element can reach it, so the scan stops early
//! (majority early-exit). The remaining elements are never hashed.
//!
//! Elements must be `Eq + Hash + Ord`. Floating-point values are not
//! accepted directly; map them to a total-order key first.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts how many times `element` occurs in `elements`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use stalw::collections::count;
/// assert_eq!(count(&'a', &['a', 'b', 'a']), 2);
/// assert_eq!(count(&"x", &["y", "z"]), 0);
/// assert_eq!(count(&0.5, &[0.5, 1.0]), 1);
/// ```
pub fn count<T: PartialEq>(element: &T, elements: &[T]) -> usize {
    elements.iter().filter(|e| *e == element).count()
}

/// Returns the most frequently occurring element, or all elements sharing
/// the highest count, sorted ascending.
///
/// # Complexity
/// Time: O(n + k log k) for `k` distinct elements, Space: O(k)
///
/// # Returns
/// - An empty `Vec` if `elements` is empty.
///
/// # Examples
/// ```
/// use stalw::collections::most_frequent;
/// assert_eq!(most_frequent(&[1, 2, 2, 3, 3]), vec![2, 3]);
/// assert_eq!(most_frequent(&["b", "a", "b"]), vec!["b"]);
/// assert!(most_frequent::<u8>(&[]).is_empty());
/// ```
pub fn most_frequent<T: Eq + Hash + Ord + Clone>(elements: &[T]) -> Vec<T> {
    let majority = elements.len() / 2;
    let mut max_count = 0;
    let mut tally: HashMap<&T, usize> = HashMap::new();

    for element in elements {
        let n = tally.entry(element).or_insert(0);
        *n += 1;
        if *n > max_count {
            max_count = *n;
            if max_count > majority {
                break;
            }
        }
    }

    let mut result: Vec<T> = tally
        .into_iter()
        .filter(|&(_, n)| n == max_count)
        .map(|(element, _)| element.clone())
        .collect();
    result.sort_unstable();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- count ---

    #[test]
    fn test_count_basic() {
        assert_eq!(count(&2, &[1, 2, 2, 3, 2]), 3);
    }

    #[test]
    fn test_count_absent() {
        assert_eq!(count(&9, &[1, 2, 3]), 0);
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count::<i32>(&1, &[]), 0);
    }

    #[test]
    fn test_count_strings() {
        let words = vec!["to".to_string(), "be".to_string(), "to".to_string()];
        assert_eq!(count(&"to".to_string(), &words), 2);
    }

    #[test]
    fn test_count_nan_never_matches() {
        assert_eq!(count(&f64::NAN, &[f64::NAN, 1.0]), 0);
    }

    // --- most_frequent ---

    #[test]
    fn test_most_frequent_tie_sorted() {
        assert_eq!(most_frequent(&[1, 2, 2, 3, 3]), vec![2, 3]);
        assert_eq!(most_frequent(&[3, 3, 1, 2, 2]), vec![2, 3]);
    }

    #[test]
    fn test_most_frequent_single_winner() {
        assert_eq!(most_frequent(&[4, 1, 4, 2, 4, 3]), vec![4]);
    }

    #[test]
    fn test_most_frequent_all_distinct() {
        assert_eq!(most_frequent(&[5, 3, 9, 1]), vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_most_frequent_single() {
        assert_eq!(most_frequent(&[-7]), vec![-7]);
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_most_frequent_majority_early_exit() {
        // 7 reaches 3 > 5/2 at index 2; the trailing 8s are never tallied,
        // and no unseen element could tie anyway
        assert_eq!(most_frequent(&[7, 7, 7, 8, 8]), vec![7]);
    }

    #[test]
    fn test_most_frequent_even_length_no_early_exit() {
        // 2 of 4 is not a strict majority, so both stay tied
        assert_eq!(most_frequent(&[1, 1, 2, 2]), vec![1, 2]);
    }

    #[test]
    fn test_most_frequent_chars() {
        let letters: Vec<char> = "mississippi".chars().collect();
        assert_eq!(most_frequent(&letters), vec!['i', 's']);
    }
}
