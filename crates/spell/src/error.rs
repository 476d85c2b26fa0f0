use thiserror::Error;

use crate::lexicon::MAX_SPELLABLE_DIGITS;

/// Failures reported by the spelling entry points.
#[derive(Debug, Error, PartialEq)]
pub enum SpellError {
  #[error("number has {digits} digits; at most {MAX_SPELLABLE_DIGITS} can be named")]
  MagnitudeOverflow { digits: usize },
  #[error("the minimum representable integer has no positive counterpart; widen it before spelling")]
  SignOverflow,
  #[error("digit sequence is empty")]
  EmptyDigits,
  #[error("'{character}' at position {index} is not a decimal digit")]
  NonDigit { character: char, index: usize },
  #[error("digit sequence has a leading zero")]
  LeadingZero,
  #[error("{0} has no exact decimal representation")]
  UnrepresentableFloat(f64),
}
