/// Reverses the characters of a string.
pub fn reverse(s: &str) -> String {
  s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn characters_reverse() {
    assert_eq!(reverse("abc"), "cba");
    assert_eq!(reverse("abcdef"), "fedcba");
    assert_eq!(reverse("   "), "   ");
    assert_eq!(reverse(""), "");
    assert_eq!(reverse("æbc"), "cbæ");
  }
}
