use proptest::prelude::*;
use stringex_spell::lexicon::{ONES, SCALES, TEENS, TENS};
use stringex_spell::{
  Decimal, DigitSequence, FRACTION_SCALE, fraction_suffix, spell_integer, spell_magnitude,
};

/// Parses spelled words back into a value using only the lexicon tables.
fn parse_words(words: &str) -> u128 {
  let mut total: u128 = 0;
  let mut group: u128 = 0;

  for token in words.split([' ', '-']) {
    let token = token.trim_end_matches(',');

    if token == "hundred" {
      group *= 100;
    } else if let Some(scale) = SCALES.iter().position(|&word| word == token) {
      total += group * 1000u128.pow(scale as u32);
      group = 0;
    } else {
      group += word_value(token);
    }
  }

  total + group
}

fn word_value(token: &str) -> u128 {
  if let Some(value) = ONES.iter().position(|&word| word == token) {
    return value as u128;
  }
  if let Some(value) = TEENS.iter().position(|&word| word == token) {
    return 10 + value as u128;
  }
  match TENS.iter().position(|&word| word == token) {
    Some(value) => 10 * value as u128,
    None => panic!("unknown word {token:?}"),
  }
}

fn checked_gcd(mut a: u64, mut b: u64) -> u64 {
  while b != 0 {
    (a, b) = (b, a % b);
  }
  a
}

proptest! {
  #[test]
  fn words_round_trip_through_the_reverse_lexicon(digits in "0|[1-9][0-9]{0,29}") {
    let parsed = DigitSequence::parse(&digits).unwrap();
    let words = spell_magnitude(&parsed).unwrap();
    prop_assert_eq!(parse_words(&words), digits.parse::<u128>().unwrap());
  }

  #[test]
  fn scale_words_match_nonzero_groups(digits in "[1-9][0-9]{0,29}") {
    let parsed = DigitSequence::parse(&digits).unwrap();
    let words = spell_magnitude(&parsed).unwrap();

    let mut expected: Vec<&str> = Vec::new();
    for (index, chunk) in digits.as_bytes().rchunks(3).enumerate() {
      if index > 0 && chunk.iter().any(|&b| b != b'0') {
        expected.push(SCALES[index]);
      }
    }

    let emitted: Vec<&str> = words
      .split([' ', '-'])
      .map(|token| token.trim_end_matches(','))
      .filter(|token| SCALES[1..].contains(token))
      .rev()
      .collect();

    prop_assert_eq!(emitted, expected);
  }

  #[test]
  fn sign_prefix_mirrors_the_positive_spelling(value in 1i64..) {
    let value = i128::from(value);
    let positive = spell_integer(value).unwrap();
    prop_assert_eq!(spell_integer(-value).unwrap(), format!("negative {positive}"));
  }

  #[test]
  fn fraction_suffixes_are_in_lowest_terms_and_exact(numerator in 1u64..1_000_000_000) {
    let remainder = Decimal::new(numerator as i64, 9);
    let suffix = fraction_suffix(remainder).unwrap();
    let (n, d) = suffix.strip_prefix("and ").and_then(|pair| pair.split_once('/')).unwrap();
    let n: u64 = n.parse().unwrap();
    let d: u64 = d.parse().unwrap();

    prop_assert_eq!(checked_gcd(n, d), 1);
    prop_assert_eq!(n * (FRACTION_SCALE / d), numerator);
  }
}
