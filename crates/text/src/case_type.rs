use strum::{Display, EnumString};

/// Casing scheme applied by [`crate::set_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CaseType {
  Lower,
  Upper,
  CapitalizeFirst,
  Sentence,
  Title,
}
