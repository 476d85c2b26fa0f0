/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(s: &str) -> String {
  s.split_whitespace().collect::<Vec<_>>().join(" ")
}
