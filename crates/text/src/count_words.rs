/// Counts whitespace-delimited words.
pub fn count_words(s: &str) -> usize {
  s.split_whitespace().count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_split_on_whitespace_only() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("   "), 0);
    assert_eq!(count_words("   abc   "), 1);
    assert_eq!(count_words("   This is  a  test   "), 4);
    assert_eq!(
      count_words("This is a test of the Emergency Broadcast System. This is only a test."),
      14
    );
    assert_eq!(count_words("It's the 44.7 plus another 22.456%!"), 6);
    assert_eq!(count_words("10-11 44 inch. 32.77 19!"), 5);
    assert_eq!(count_words("  abc.def "), 1);
  }
}
