//! Spacing stages.
//!
//! Two groups live here. The insertion passes put a space after every
//! punctuation or closing mark and around every em-dash, without looking at
//! what already follows; they happily produce double spaces. The removal
//! passes then pull whitespace back out where it does not belong:
//!
//! ```text
//! "hello , world"  --insert-->  "hello ,  world"  --remove-->  "hello,  world"
//! ```
//!
//! The double space left behind is collapsed later by the duplicate stage.
//!
//! Every pass reads the full string and returns a new one. Matches are
//! non-overlapping and scanned left to right.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Marks that always get a trailing space: `, . ; : ? ! ) ] } " '`.
const SPACE_AFTER: &[char] = &[',', '.', ';', ':', '?', '!', ')', ']', '}', '"', '\''];

const EM_DASH: char = '\u{2014}';

static SPACE_BEFORE_CLOSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([,.;:?!)\]}])").expect("closer pattern compiles"));

static SPACE_AFTER_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([(\[{'"])\s+"#).expect("opener pattern compiles"));

static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']\s*([^"]*?)\s*["']"#).expect("quote pattern compiles"));

static SPACED_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(-)\s*").expect("hyphen pattern compiles"));

/// Inserts one space after every punctuation, closing bracket or quote mark.
///
/// ```rust
/// use normalize::space_after_punctuation;
///
/// assert_eq!(space_after_punctuation("a,b.c"), "a, b. c");
/// assert_eq!(space_after_punctuation("ok! "), "ok!  ");
/// ```
pub fn space_after_punctuation(text: &str) -> String {
    let extra = text.chars().filter(|ch| SPACE_AFTER.contains(ch)).count();
    let mut out = String::with_capacity(text.len() + extra);
    for ch in text.chars() {
        out.push(ch);
        if SPACE_AFTER.contains(&ch) {
            out.push(' ');
        }
    }
    out
}

/// Surrounds every em-dash with one space on each side.
pub fn space_around_em_dash(text: &str) -> String {
    if !text.contains(EM_DASH) {
        return text.to_owned();
    }
    text.replace(EM_DASH, " \u{2014} ")
}

/// Drops whitespace directly in front of `, . ; : ? ! ) ] }`.
pub fn strip_space_before_closers(text: &str) -> String {
    SPACE_BEFORE_CLOSER.replace_all(text, "${1}").into_owned()
}

/// Drops whitespace directly after `( [ { ' "`.
pub fn strip_space_after_openers(text: &str) -> String {
    SPACE_AFTER_OPENER.replace_all(text, "${1}").into_owned()
}

/// Trims padding just inside a pair of quote marks.
///
/// The quote characters are kept exactly as they appear in the input, so a
/// span opened with `"` and closed with `'` stays mismatched. The interior
/// never spans a literal `"`.
///
/// ```rust
/// use normalize::trim_inside_quotes;
///
/// assert_eq!(trim_inside_quotes("\"  abc  \""), "\"abc\"");
/// ```
pub fn trim_inside_quotes(text: &str) -> String {
    QUOTED_SPAN
        .replace_all(text, |caps: &Captures<'_>| {
            // Both delimiters are single-byte ASCII quotes.
            let whole = &caps[0];
            let open = &whole[..1];
            let close = &whole[whole.len() - 1..];
            format!("{open}{}{close}", &caps[1])
        })
        .into_owned()
}

/// Removes whitespace on either side of a hyphen: `"a - b"` becomes `"a-b"`.
pub fn join_hyphens(text: &str) -> String {
    SPACED_HYPHEN.replace_all(text, "${1}").into_owned()
}

/// Runs the four removal passes in their fixed order.
pub fn collapse_spacing(text: &str) -> String {
    let text = strip_space_before_closers(text);
    let text = strip_space_after_openers(&text);
    let text = trim_inside_quotes(&text);
    join_hyphens(&text)
}
