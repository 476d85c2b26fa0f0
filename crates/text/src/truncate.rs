use crate::word_boundaries::is_word_character;

const ELLIPSIS: &str = "...";

/// Truncates `s` to at most `max_length` characters.
///
/// With `smart_trim`, a cut that lands inside a word backs up to the start of
/// that word and drops the whitespace before it, unless no whole word fits.
/// With `append_ellipsis`, `"..."` is appended and the cut shrinks to make
/// room for it, provided `max_length` leaves any.
pub fn truncate(s: &str, max_length: usize, smart_trim: bool, append_ellipsis: bool) -> String {
  let chars: Vec<char> = s.chars().collect();
  if chars.len() <= max_length {
    return s.to_string();
  }

  let append_ellipsis = append_ellipsis && max_length > ELLIPSIS.len();
  let budget = if append_ellipsis {
    max_length - ELLIPSIS.len()
  } else {
    max_length
  };

  let mut length = budget;
  if smart_trim {
    while length > 0 && is_word_character(&chars, length) {
      length -= 1;
    }
    while length > 0 && chars[length - 1].is_whitespace() {
      length -= 1;
    }
    if length == 0 {
      length = budget;
    }
  }

  let mut truncated: String = chars[..length].iter().collect();
  if append_ellipsis {
    truncated.push_str(ELLIPSIS);
  }

  truncated
}
