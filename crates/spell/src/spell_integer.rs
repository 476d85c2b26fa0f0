use crate::lexicon::NEGATIVE_PREFIX;
use crate::{DigitSequence, SpellError, spell_magnitude};

/// Spells an integer, prefixing "negative " when it is strictly negative.
pub fn spell_integer(value: i128) -> Result<String, SpellError> {
  let (mut words, is_negative) = spell_integer_signed(value)?;
  if is_negative {
    words.insert_str(0, NEGATIVE_PREFIX);
  }

  Ok(words)
}

/// Spells an integer's magnitude, reporting the sign out-of-band.
pub fn spell_integer_signed(value: i128) -> Result<(String, bool), SpellError> {
  if value == i128::MIN {
    return Err(SpellError::SignOverflow);
  }

  let rendered = value.unsigned_abs().to_string();
  let words = spell_magnitude(&DigitSequence::parse(&rendered)?)?;
  Ok((words, value < 0))
}
