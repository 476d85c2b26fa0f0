use crate::SpellError;

/// A run of decimal digits, most significant first, as rendered from the
/// absolute value of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSequence<'a>(&'a str);

impl<'a> DigitSequence<'a> {
  /// Validates that `digits` is non-empty, all ASCII digits, and carries no
  /// leading zero (other than the literal "0").
  pub fn parse(digits: &'a str) -> Result<Self, SpellError> {
    if digits.is_empty() {
      return Err(SpellError::EmptyDigits);
    }

    if let Some((index, character)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
      return Err(SpellError::NonDigit { character, index });
    }

    if digits.len() > 1 && digits.starts_with('0') {
      return Err(SpellError::LeadingZero);
    }

    Ok(Self(digits))
  }

  pub fn as_str(&self) -> &'a str {
    self.0
  }
}
