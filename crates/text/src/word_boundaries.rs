/// Helper function to check whether the character at `index` belongs to a word.
///
/// Apostrophes count so contractions hold together, and a period counts when a
/// digit follows so decimal numbers are not split.
pub(crate) fn is_word_character(chars: &[char], index: usize) -> bool {
  let c = chars[index];
  c.is_alphanumeric()
    || c == '\''
    || (c == '.' && chars.get(index + 1).is_some_and(|next| next.is_ascii_digit()))
}

/// Helper function to check whether the character at `index` ends a sentence.
pub(crate) fn is_end_of_sentence(chars: &[char], index: usize) -> bool {
  match chars[index] {
    '!' | '?' | ':' => true,
    '.' => !chars.get(index + 1).is_some_and(|next| next.is_ascii_digit()),
    _ => false,
  }
}
