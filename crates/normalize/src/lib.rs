//! Textfix normalization pipeline.
//!
//! Cleans up loosely formatted text fragments before they are displayed or
//! stored: consistent spacing around punctuation, repeated marks collapsed,
//! sentence capitalization reset, and a guaranteed terminal mark.
//!
//! ## Stages
//!
//! Five rewrites run in a fixed order, each over the full output of the
//! previous one (see [`STAGES`]):
//!
//! 1. Space after `, . ; : ? ! ) ] } " '`
//! 2. Spaces around em-dashes
//! 3. Whitespace removal around closers, openers, inside quotes, at hyphens
//! 4. Runs of identical non-word characters collapsed
//! 5. Sentence-case reset, then capitals after `.`, `?` and `!`
//!
//! The finishing steps trim, capitalize the first character, append `.` when
//! no terminal mark is present, and strip every backslash.
//!
//! ## Pure function guarantee
//!
//! No I/O, no configuration, no shared state. Any number of calls may run in
//! parallel; a given input always produces the same result or the same error.
//!
//! ## Things worth knowing
//!
//! - Case is reset for the whole string, so `"NASA"` becomes `"nasa"` unless
//!   it starts a sentence.
//! - The pipeline is not idempotent for every input. Backslashes are removed
//!   after all other rules ran, so feeding the output back in can change it.
//!
//! ```rust
//! use normalize::normalize;
//!
//! assert_eq!(normalize("hello , world !!").unwrap(), "Hello, world!");
//! assert_eq!(normalize("first one. second one").unwrap(), "First one. Second one.");
//! ```

mod case;
mod dedup;
mod error;
mod finish;
mod pipeline;
mod spacing;
mod trace;

pub use crate::case::{fix_capitalization, sentence_case};
pub use crate::dedup::remove_duplicate_punctuation;
pub use crate::error::NormalizeError;
pub use crate::finish::{finish, TERMINAL_PUNCTUATION};
pub use crate::pipeline::{inspect, normalize, normalize_bytes, Stage, STAGES};
pub use crate::spacing::{
    collapse_spacing, join_hyphens, space_after_punctuation, space_around_em_dash,
    strip_space_after_openers, strip_space_before_closers, trim_inside_quotes,
};
pub use crate::trace::{NormalizationTrace, StageOutput};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn golden_outputs() {
        let cases = [
            ("hello , world !!", "Hello, world!"),
            ("Wow!!! Really??", "Wow! Really?"),
            ("\"  abc  \"", "\"abc\"."),
            ("a\u{2014}b", "A \u{2014} b."),
            ("well - known", "Well-known."),
            ("first sentence. second one? third!", "First sentence. Second one? Third!"),
            ("I met John in NYC", "I met john in nyc."),
            ("hello,world", "Hello, world."),
            ("( spaced )", "(spaced)."),
            ("end.\nnext line", "End. Next line."),
            ("done...", "Done."),
            ("what?!", "What?!"),
            ("  lead", "Lead."),
            ("one;two:three", "One; two: three."),
            ("path\\to\\file", "Pathtofile."),
            ("she said \"  hi  \" loudly", "She said \"hi\"loudly."),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn whitespace_only_input_rejected() {
        assert_eq!(normalize("   "), Err(NormalizeError::EmptyResult));
        assert_eq!(normalize(""), Err(NormalizeError::EmptyResult));
        assert_eq!(normalize("\n\t"), Err(NormalizeError::EmptyResult));
    }

    #[test]
    fn punctuation_only_input_survives() {
        assert_eq!(normalize("!!!").unwrap(), "!");
        assert_eq!(normalize("......").unwrap(), ".");
    }

    #[test]
    fn invalid_utf8_rejected_before_pipeline() {
        let res = normalize_bytes(b"ok \xff\xfe");
        assert_eq!(res, Err(NormalizeError::InvalidEncoding { valid_up_to: 3 }));
        assert_eq!(normalize_bytes(b"hi there").unwrap(), "Hi there.");
    }

    #[test]
    fn trace_records_each_stage() {
        let trace = inspect("Wow!!! Really??").unwrap();

        let texts: Vec<&str> = trace.stages.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Wow! ! ! Really? ? ",
                "Wow! ! ! Really? ? ",
                "Wow!!! Really?? ",
                "Wow! Really? ",
                "Wow! Really? ",
            ]
        );
        let order: Vec<Stage> = trace.stages.iter().map(|s| s.stage).collect();
        assert_eq!(order, STAGES.to_vec());
        assert_eq!(trace.after(Stage::DuplicatePunctuation), Some("Wow! Really? "));
        assert_eq!(trace.input, "Wow!!! Really??");
        assert_eq!(trace.output, "Wow! Really?");
    }

    #[test]
    fn trace_fails_like_normalize() {
        assert_eq!(inspect(" "), Err(NormalizeError::EmptyResult));
    }

    #[test]
    fn trace_serializes_stage_names() {
        let trace = inspect("a").unwrap();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["stages"][0]["stage"], "spacing_after");
        assert_eq!(json["stages"][4]["stage"], "capitalization");
        assert_eq!(json["output"], "A.");
    }

    #[test]
    fn stage_names_match_display() {
        for stage in STAGES {
            assert_eq!(stage.to_string(), stage.name());
        }
    }

    #[test]
    fn idempotent_for_plain_sentences() {
        for input in ["hello , world !!", "first sentence. second one? third!", "well - known"] {
            let once = normalize(input).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn not_idempotent_when_backslashes_separate_marks() {
        let once = normalize("a.\\.").unwrap();
        assert_eq!(once, "A. .");
        assert_eq!(normalize(&once).unwrap(), "A.");

        let once = normalize("!\\!").unwrap();
        assert_eq!(once, "! !");
        assert_eq!(normalize(&once).unwrap(), "!");
    }

    #[test]
    fn quoted_start_keeps_lowercase_letter() {
        assert_eq!(normalize("\"hello\"").unwrap(), "\"hello\".");
        assert_eq!(normalize("\\abc").unwrap(), "abc.");
    }

    proptest! {
        #[test]
        fn prop_no_backslash_in_output(text in r"[a-z \\.!,]{0,32}") {
            if let Ok(out) = normalize(&text) {
                prop_assert!(!out.contains('\\'));
            }
        }

        #[test]
        fn prop_terminal_mark_and_empty_policy(text in r#"[a-zA-Z0-9 ,.;:?!()'"\-]{0,48}"#) {
            match normalize(&text) {
                Ok(out) => {
                    prop_assert!(!text.trim().is_empty());
                    prop_assert!(out.ends_with(&TERMINAL_PUNCTUATION[..]));
                }
                Err(err) => {
                    prop_assert_eq!(err, NormalizeError::EmptyResult);
                    prop_assert!(text.trim().is_empty());
                }
            }
        }

        #[test]
        fn prop_leading_letter_is_uppercase(text in r"[a-zA-Z ,.;:?!-]{1,48}") {
            if let Ok(out) = normalize(&text) {
                let first = out.chars().next().unwrap();
                if first.is_ascii_alphabetic() {
                    prop_assert!(first.is_ascii_uppercase());
                }
            }
        }

        #[test]
        fn prop_trace_matches_normalize(text in r"[a-zA-Z .!?,]{0,40}") {
            let traced = inspect(&text).map(|t| t.output);
            prop_assert_eq!(traced, normalize(&text));
        }
    }
}
