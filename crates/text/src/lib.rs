mod case_type;
pub use case_type::CaseType;

mod char_fold;

mod contains_any;
pub use contains_any::contains_any;

mod count_words;
pub use count_words::count_words;

mod distinct;
pub use distinct::distinct;

mod except;
pub use except::except;

mod insert_camel_case_spaces;
pub use insert_camel_case_spaces::insert_camel_case_spaces;

mod intersect;
pub use intersect::intersect;

mod normalize_whitespace;
pub use normalize_whitespace::normalize_whitespace;

mod reverse;
pub use reverse::reverse;

mod set_case;
pub use set_case::set_case;

mod sort_chars;
pub use sort_chars::sort_chars;

mod tokenize;
pub use tokenize::{next_token, next_token_delimiters, tokenize, tokenize_delimiters};

mod truncate;
pub use truncate::truncate;

mod union;
pub use union::union;

mod word_boundaries;
