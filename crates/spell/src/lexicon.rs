/// Prefix applied to strictly negative values.
pub const NEGATIVE_PREFIX: &str = "negative ";

pub const ONES: [&str; 10] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

pub const TEENS: [&str; 10] = [
  "ten",
  "eleven",
  "twelve",
  "thirteen",
  "fourteen",
  "fifteen",
  "sixteen",
  "seventeen",
  "eighteen",
  "nineteen",
];

// index 1 is shadowed by the teens pairing
pub const TENS: [&str; 10] = [
  "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// US short-scale group names, indexed by digit-group number from the right.
pub const SCALES: [&str; 10] = [
  "",
  "thousand",
  "million",
  "billion",
  "trillion",
  "quadrillion",
  "quintillion",
  "sextillion",
  "septillion",
  "octillion",
];

/// Widest digit sequence the scale table can name, three columns per group.
pub const MAX_SPELLABLE_DIGITS: usize = SCALES.len() * 3;
