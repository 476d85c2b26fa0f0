pub use rust_decimal::Decimal;

mod decimal_format;
pub use decimal_format::DecimalFormat;

mod digit_sequence;
pub use digit_sequence::DigitSequence;

mod error;
pub use error::SpellError;

mod fraction;
pub use fraction::{FRACTION_SCALE, currency_suffix, fraction_suffix};

pub mod lexicon;

mod spell_decimal;
pub use spell_decimal::{spell_decimal, spell_f32, spell_f64};

mod spell_integer;
pub use spell_integer::{spell_integer, spell_integer_signed};

mod spell_magnitude;
pub use spell_magnitude::spell_magnitude;

#[cfg(test)]
mod tests {
  use crate::{Decimal, DecimalFormat, spell_decimal, spell_integer};
  use std::str::FromStr;

  #[test]
  fn spells_through_the_public_surface() {
    assert_eq!(spell_integer(1234).unwrap(), "one thousand, two hundred thirty-four");
    assert_eq!(
      spell_decimal(Decimal::from_str("13.25").unwrap(), DecimalFormat::Fraction).unwrap(),
      "thirteen and 1/4"
    );
  }
}
