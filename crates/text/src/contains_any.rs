use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Tests whether any character of `find` occurs in `s`. An empty `find` never
/// matches.
pub fn contains_any(s: &str, find: &str, ignore_case: bool) -> bool {
  if find.is_empty() {
    return false;
  }

  let wanted: HashSet<char> = find.chars().map(|c| fold_char(c, ignore_case)).collect();
  s.chars().any(|c| wanted.contains(&fold_char(c, ignore_case)))
}
