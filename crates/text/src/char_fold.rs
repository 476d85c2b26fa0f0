/// Case-fold key used by the `ignore_case` character comparisons.
pub(crate) fn fold_char(c: char, ignore_case: bool) -> char {
  if ignore_case {
    c.to_lowercase().next().unwrap_or(c)
  } else {
    c
  }
}
