//! First-wins deduplication.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of each identity key, preserving sequence order.
///
/// Later occurrences are dropped even when their non-key fields differ: the
/// declaration collected first decides which variant survives. The seen-key
/// set is local to the call, so concurrent invocations share nothing.
pub fn retain_first_by<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
  K: Eq + Hash,
  F: FnMut(&T) -> K,
{
  let mut seen = HashSet::new();
  items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_occurrence_wins() {
    let items = vec![("a", 1), ("b", 2), ("a", 3)];
    let deduped = retain_first_by(items, |(name, _)| *name);
    assert_eq!(deduped, vec![("a", 1), ("b", 2)]);
  }

  #[test]
  fn order_is_preserved() {
    let items = vec![("c", 1), ("a", 2), ("b", 3), ("a", 4), ("c", 5)];
    let deduped = retain_first_by(items, |(name, _)| *name);
    assert_eq!(deduped, vec![("c", 1), ("a", 2), ("b", 3)]);
  }

  #[test]
  fn distinct_keys_all_survive() {
    let items = vec![1, 2, 3, 4];
    let deduped = retain_first_by(items, |n| *n);
    assert_eq!(deduped, vec![1, 2, 3, 4]);
  }

  #[test]
  fn empty_input_yields_empty_output() {
    let deduped = retain_first_by(Vec::<u32>::new(), |n| *n);
    assert!(deduped.is_empty());
  }
}
