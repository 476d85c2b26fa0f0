use crate::case_type::CaseType;
use crate::word_boundaries::{is_end_of_sentence, is_word_character};

/// Words left lowercase by title casing unless they open a sentence.
const UNCAPITALIZED_TITLE_WORDS: [&str; 38] = [
  "a", "about", "after", "an", "and", "are", "around", "as", "at", "be", "before", "but", "by",
  "else", "for", "from", "how", "if", "in", "into", "is", "nor", "of", "on", "or", "over", "than",
  "that", "the", "then", "this", "through", "to", "under", "when", "where", "why", "with",
];

/// Rewrites `s` in the requested casing scheme.
///
/// Sentence and title casing normalize mixed-case words to lowercase before
/// deciding, so all-uppercase acronyms survive untouched.
pub fn set_case(s: &str, case: CaseType) -> String {
  match case {
    CaseType::Lower => s.to_lowercase(),
    CaseType::Upper => s.to_uppercase(),
    CaseType::CapitalizeFirst => capitalize_first(s),
    CaseType::Sentence => recase_words(s, |_, in_sentence| in_sentence),
    CaseType::Title => recase_words(s, |word, in_sentence| {
      in_sentence && is_title_minor_word(word)
    }),
  }
}

fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => {
      let mut capitalized = String::with_capacity(s.len());
      capitalized.push(upper_char(first));
      capitalized.push_str(chars.as_str());
      capitalized
    }
    None => String::new(),
  }
}

fn recase_words(s: &str, keep_lowercase: impl Fn(&str, bool) -> bool) -> String {
  let mut chars: Vec<char> = s.chars().collect();
  let mut in_sentence = false;
  let mut word_start = None;

  for index in 0..=chars.len() {
    let in_word = index < chars.len() && is_word_character(&chars, index);
    match word_start {
      None if in_word => word_start = Some(index),
      Some(start) if !in_word => {
        recase_word(&mut chars, start, index, &keep_lowercase, &mut in_sentence);
        word_start = None;
        if index < chars.len() && in_sentence && is_end_of_sentence(&chars, index) {
          in_sentence = false;
        }
      }
      _ => {}
    }
  }

  chars.into_iter().collect()
}

fn recase_word(
  chars: &mut [char],
  start: usize,
  end: usize,
  keep_lowercase: &impl Fn(&str, bool) -> bool,
  in_sentence: &mut bool,
) {
  // A word with any lowercase letter is folded to lowercase first. Fully
  // uppercase words are taken to be acronyms and keep their casing.
  if chars[start..end].iter().any(|c| c.is_lowercase()) {
    for c in &mut chars[start..end] {
      *c = lower_char(*c);
    }
  }

  let word: String = chars[start..end].iter().collect();
  if !keep_lowercase(&word, *in_sentence) {
    chars[start] = upper_char(chars[start]);
    *in_sentence = true;
  }
}

fn is_title_minor_word(word: &str) -> bool {
  UNCAPITALIZED_TITLE_WORDS
    .iter()
    .any(|minor| word.eq_ignore_ascii_case(minor))
}

fn upper_char(c: char) -> char {
  c.to_uppercase().next().unwrap_or(c)
}

fn lower_char(c: char) -> char {
  c.to_lowercase().next().unwrap_or(c)
}
