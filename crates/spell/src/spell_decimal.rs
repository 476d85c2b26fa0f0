use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::lexicon::NEGATIVE_PREFIX;
use crate::{
  DecimalFormat, DigitSequence, SpellError, currency_suffix, fraction_suffix, spell_magnitude,
};

/// Spells a decimal value, rendering its fractional part per `format`.
pub fn spell_decimal(value: Decimal, format: DecimalFormat) -> Result<String, SpellError> {
  let is_negative = value < Decimal::ZERO;
  let magnitude = value.abs();

  let rendered = magnitude.to_string();
  let integer_digits = match rendered.split_once('.') {
    Some((integer_part, _)) => integer_part,
    None => rendered.as_str(),
  };

  let mut words = spell_magnitude(&DigitSequence::parse(integer_digits)?)?;
  if is_negative {
    words.insert_str(0, NEGATIVE_PREFIX);
  }

  match format {
    DecimalFormat::Currency => {
      words.push(' ');
      words.push_str(&currency_suffix(magnitude.fract()));
    }
    DecimalFormat::Fraction => {
      if let Some(suffix) = fraction_suffix(magnitude.fract()) {
        words.push(' ');
        words.push_str(&suffix);
      }
    }
    DecimalFormat::None => {}
  }

  Ok(words)
}

/// Spells an `f64` after widening it to an exact decimal.
pub fn spell_f64(value: f64, format: DecimalFormat) -> Result<String, SpellError> {
  let widened = Decimal::from_f64(value).ok_or(SpellError::UnrepresentableFloat(value))?;
  spell_decimal(widened, format)
}

/// Spells an `f32` after widening it to an exact decimal.
pub fn spell_f32(value: f32, format: DecimalFormat) -> Result<String, SpellError> {
  let widened =
    Decimal::from_f32(value).ok_or(SpellError::UnrepresentableFloat(f64::from(value)))?;
  spell_decimal(widened, format)
}
