use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Keeps the first occurrence of each character.
pub fn distinct(s: &str, ignore_case: bool) -> String {
  let mut seen = HashSet::new();
  s.chars().filter(|&c| seen.insert(fold_char(c, ignore_case))).collect()
}
