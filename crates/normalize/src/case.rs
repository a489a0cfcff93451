//! Capitalization stage.
//!
//! The string as a whole is reset to sentence case first, which lower-cases
//! proper nouns and acronyms along with everything else. The first letter
//! after each `.`, `?` or `!` is then raised again.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?!])\s+(.)").expect("sentence break pattern compiles"));

/// Lower-cases the whole string and upper-cases its first character.
///
/// ```rust
/// use normalize::sentence_case;
///
/// assert_eq!(sentence_case("hELLO NASA"), "Hello nasa");
/// ```
pub fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&rest);
            out
        }
        None => String::new(),
    }
}

/// Sentence-case reset followed by upper-casing each sentence start.
///
/// The whitespace between a sentence mark and the next character is replaced
/// by exactly one space. A newline is never taken as that next character.
pub fn fix_capitalization(text: &str) -> String {
    let text = sentence_case(text);
    SENTENCE_BREAK
        .replace_all(&text, |caps: &Captures<'_>| {
            let mut out = String::with_capacity(caps[0].len());
            out.push_str(&caps[1]);
            out.push(' ');
            out.push_str(&caps[2].to_uppercase());
            out
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_case_resets_everything() {
        assert_eq!(sentence_case("HELLO WORLD"), "Hello world");
        assert_eq!(sentence_case("i met John in NYC"), "I met john in nyc");
        assert_eq!(sentence_case(" leading"), " leading");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn sentence_starts_raised() {
        assert_eq!(fix_capitalization("HELLO WORLD. bye"), "Hello world. Bye");
        assert_eq!(fix_capitalization("one? two! three"), "One? Two! Three");
    }

    #[test]
    fn whitespace_after_mark_becomes_single_space() {
        assert_eq!(fix_capitalization("x!   y"), "X! Y");
        assert_eq!(fix_capitalization("end. \nnext"), "End. Next");
    }

    #[test]
    fn trailing_mark_without_follower_untouched() {
        assert_eq!(fix_capitalization("done. "), "Done. ");
        assert_eq!(fix_capitalization("done."), "Done.");
    }

    #[test]
    fn non_letters_after_mark_pass_through() {
        assert_eq!(fix_capitalization("v1. 2nd"), "V1. 2nd");
        assert_eq!(fix_capitalization("ok. (aside)"), "Ok. (aside)");
    }
}
