use std::collections::HashSet;

use crate::char_fold::fold_char;

/// Returns the next token in `s` at or after byte offset `pos`, advancing
/// `pos` past it, or `None` when only delimiters remain.
pub fn next_token<'a>(
  s: &'a str,
  is_delimiter: impl Fn(char) -> bool,
  pos: &mut usize,
) -> Option<&'a str> {
  while let Some(c) = s[*pos..].chars().next().filter(|&c| is_delimiter(c)) {
    *pos += c.len_utf8();
  }

  let start = *pos;
  while let Some(c) = s[*pos..].chars().next().filter(|&c| !is_delimiter(c)) {
    *pos += c.len_utf8();
  }

  (*pos > start).then(|| &s[start..*pos])
}

/// Returns the next token in `s` at or after byte offset `pos`, treating
/// every character in `delimiters` as a separator.
pub fn next_token_delimiters<'a>(
  s: &'a str,
  delimiters: &str,
  pos: &mut usize,
  ignore_case: bool,
) -> Option<&'a str> {
  let delimiters: HashSet<char> = delimiters
    .chars()
    .map(|c| fold_char(c, ignore_case))
    .collect();

  next_token(s, |c| delimiters.contains(&fold_char(c, ignore_case)), pos)
}

/// Splits `s` into tokens separated by characters matching `is_delimiter`.
pub fn tokenize(s: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut pos = 0;

  while let Some(token) = next_token(s, &is_delimiter, &mut pos) {
    tokens.push(token);
  }

  tokens
}

/// Splits `s` into tokens separated by any character in `delimiters`.
pub fn tokenize_delimiters<'a>(s: &'a str, delimiters: &str, ignore_case: bool) -> Vec<&'a str> {
  let delimiters: HashSet<char> = delimiters
    .chars()
    .map(|c| fold_char(c, ignore_case))
    .collect();

  tokenize(s, |c| delimiters.contains(&fold_char(c, ignore_case)))
}
