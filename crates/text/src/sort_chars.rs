use crate::char_fold::fold_char;

/// Sorts the characters of a string. The sort is stable, so a case-folding
/// sort keeps equal letters in their original case order.
pub fn sort_chars(s: &str, ignore_case: bool) -> String {
  let mut chars: Vec<char> = s.chars().collect();
  chars.sort_by_key(|&c| fold_char(c, ignore_case));
  chars.into_iter().collect()
}
