use crate::lexicon::{MAX_SPELLABLE_DIGITS, ONES, SCALES, TEENS, TENS};
use crate::{DigitSequence, SpellError};

/// Spells a digit sequence as English words, e.g. "one thousand, two hundred
/// thirty-four".
pub fn spell_magnitude(digits: &DigitSequence) -> Result<String, SpellError> {
  let digits = digits.as_str();
  if digits.len() > MAX_SPELLABLE_DIGITS {
    return Err(SpellError::MagnitudeOverflow { digits: digits.len() });
  }

  // Digit values by column, ones column first.
  let columns: Vec<usize> = digits.bytes().rev().map(|b| usize::from(b - b'0')).collect();
  let leftmost = columns.len() - 1;

  let mut fragments: Vec<String> = Vec::with_capacity(columns.len());
  let mut spoken_group = false;
  let mut skip_tens = false;

  for (column, &digit) in columns.iter().enumerate() {
    match column % 3 {
      // The ones column also carries the group's scale word.
      0 => {
        let mut fragment;
        let mut spoken = true;

        if column == leftmost {
          fragment = format!("{} ", ONES[digit]);
        } else if columns[column + 1] == 1 {
          fragment = format!("{} ", TEENS[digit]);
          skip_tens = true;
        } else if digit != 0 {
          fragment = format!("{} ", ONES[digit]);
        } else {
          fragment = String::new();
          spoken =
            columns[column + 1] != 0 || (column + 2 < columns.len() && columns[column + 2] != 0);
        }

        if spoken {
          let group = column / 3;
          if group > 0 {
            fragment.push_str(SCALES[group]);
            fragment.push_str(if spoken_group { ", " } else { " " });
          }
          spoken_group = true;
        }

        fragments.push(fragment);
      }
      1 => {
        if skip_tens {
          skip_tens = false;
        } else if digit != 0 {
          let joiner = if columns[column - 1] != 0 { "-" } else { " " };
          fragments.push(format!("{}{joiner}", TENS[digit]));
        }
      }
      _ => {
        if digit != 0 {
          fragments.push(format!("{} hundred ", ONES[digit]));
        }
      }
    }
  }

  // Every fragment ends with its own separator; drop the final one.
  let mut words: String = fragments.into_iter().rev().collect();
  words.pop();
  Ok(words)
}
