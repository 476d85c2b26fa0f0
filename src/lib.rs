pub use stringex_spell::{
  Decimal, DecimalFormat, DigitSequence, FRACTION_SCALE, SpellError, currency_suffix,
  fraction_suffix, lexicon, spell_decimal, spell_f32, spell_f64, spell_integer,
  spell_integer_signed, spell_magnitude,
};
pub use stringex_text::{
  CaseType, contains_any, count_words, distinct, except, insert_camel_case_spaces, intersect,
  next_token, next_token_delimiters, normalize_whitespace, reverse, set_case, sort_chars, tokenize,
  tokenize_delimiters, truncate, union,
};
