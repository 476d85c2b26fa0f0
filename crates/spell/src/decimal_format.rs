use strum::{Display, EnumString};

/// How `spell_decimal` renders the fractional part of a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DecimalFormat {
  /// Fractional part is ignored.
  #[default]
  None,
  /// Two rounded cent digits, "and 05/100".
  Currency,
  /// Exact reduced fraction, "and 1/4".
  Fraction,
}
