use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Denominator scale used for exact fraction suffixes.
pub const FRACTION_SCALE: u64 = 1_000_000_000;

/// Formats a fractional remainder in [0, 1) as a cents suffix, "and 05/100".
///
/// Always produces a suffix, even for a zero remainder. Ties round to even.
pub fn currency_suffix(remainder: Decimal) -> String {
  let cents = (remainder * Decimal::ONE_HUNDRED).round().to_u64().unwrap_or_default();
  format!("and {cents:02}/100")
}

/// Formats a fractional remainder in [0, 1) as a reduced fraction suffix,
/// "and 1/4".
///
/// Returns `None` for a zero remainder. Ties round to even.
pub fn fraction_suffix(remainder: Decimal) -> Option<String> {
  if remainder.is_zero() {
    return None;
  }

  let scaled = remainder * Decimal::from(FRACTION_SCALE);
  let numerator = scaled.round().to_u64().unwrap_or_default();
  let divisor = gcd(numerator, FRACTION_SCALE);
  Some(format!("and {}/{}", numerator / divisor, FRACTION_SCALE / divisor))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
  while a != 0 && b != 0 {
    if a > b {
      a %= b;
    } else {
      b %= a;
    }
  }

  a | b
}
