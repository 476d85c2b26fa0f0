use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Characters of `s` not present in `other`, duplicates preserved.
pub fn except(s: &str, other: &str, ignore_case: bool) -> String {
  let excluded: HashSet<char> = other.chars().map(|c| fold_char(c, ignore_case)).collect();
  s.chars().filter(|&c| !excluded.contains(&fold_char(c, ignore_case))).collect()
}
