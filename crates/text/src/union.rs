use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Characters of `s` followed by the characters of `other` not already seen.
pub fn union(s: &str, other: &str, ignore_case: bool) -> String {
  let mut seen = HashSet::new();
  s.chars()
    .chain(other.chars())
    .filter(|&c| seen.insert(fold_char(c, ignore_case)))
    .collect()
}
