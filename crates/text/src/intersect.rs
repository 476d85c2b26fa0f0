use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Characters of `s` also present in `other`, each reported once in input
/// order.
pub fn intersect(s: &str, other: &str, ignore_case: bool) -> String {
  let mut pool: HashSet<char> = other.chars().map(|c| fold_char(c, ignore_case)).collect();
  s.chars().filter(|&c| pool.remove(&fold_char(c, ignore_case))).collect()
}
