/// Inserts spaces between camel-case words, keeping acronym runs together.
pub fn insert_camel_case_spaces(s: &str) -> String {
  let chars: Vec<char> = s.chars().collect();
  let mut spaced = String::with_capacity(s.len() + s.len() / 2);
  let mut last_is_upper = false;
  let mut last_is_whitespace = false;

  for (i, &c) in chars.iter().enumerate() {
    let is_upper = c.is_uppercase();
    let next_is_lower = chars.get(i + 1).is_some_and(|&next| next.is_lowercase());

    if is_upper && !spaced.is_empty() && (!last_is_upper || next_is_lower) && !last_is_whitespace {
      spaced.push(' ');
    }

    spaced.push(c);
    last_is_upper = is_upper;
    last_is_whitespace = c.is_whitespace();
  }

  spaced
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_split_at_case_changes() {
    assert_eq!(insert_camel_case_spaces("abc"), "abc");
    assert_eq!(insert_camel_case_spaces("Abc"), "Abc");
    assert_eq!(insert_camel_case_spaces("thisIsATest"), "this Is A Test");
    assert_eq!(insert_camel_case_spaces("ThisIsATest"), "This Is A Test");
  }

  #[test]
  fn acronym_runs_stay_together() {
    assert_eq!(insert_camel_case_spaces("thisIsHTML"), "this Is HTML");
    assert_eq!(insert_camel_case_spaces("ThisIsHTML"), "This Is HTML");
    assert_eq!(insert_camel_case_spaces("IBoughtAnIBMXT"), "I Bought An IBMXT");
    assert_eq!(insert_camel_case_spaces("IBoughtAnIbmXT"), "I Bought An Ibm XT");
    assert_eq!(insert_camel_case_spaces("IBoughtAnIbmXt"), "I Bought An Ibm Xt");
  }

  #[test]
  fn existing_spaces_are_not_doubled() {
    assert_eq!(insert_camel_case_spaces("this is a test"), "this is a test");
    assert_eq!(insert_camel_case_spaces("This Is A Test"), "This Is A Test");
  }
}
