use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::fix_capitalization;
use crate::dedup::remove_duplicate_punctuation;
use crate::error::NormalizeError;
use crate::finish::finish;
use crate::spacing::{collapse_spacing, space_after_punctuation, space_around_em_dash};
use crate::trace::{NormalizationTrace, StageOutput};

/// One rewrite over the full string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Space after `, . ; : ? ! ) ] } " '`.
    SpacingAfter,
    /// Spaces around em-dashes.
    SpacingNearDash,
    /// Whitespace removal around closers, openers, quotes and hyphens.
    SpacingCollapse,
    /// Runs of identical non-word characters reduced to one.
    DuplicatePunctuation,
    /// Sentence-case reset plus sentence-start capitals.
    Capitalization,
}

/// Pipeline order. Capitalization matches on whitespace after sentence
/// marks, so every spacing stage has to run before it.
pub const STAGES: [Stage; 5] = [
    Stage::SpacingAfter,
    Stage::SpacingNearDash,
    Stage::SpacingCollapse,
    Stage::DuplicatePunctuation,
    Stage::Capitalization,
];

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::SpacingAfter => "spacing_after",
            Stage::SpacingNearDash => "spacing_near_dash",
            Stage::SpacingCollapse => "spacing_collapse",
            Stage::DuplicatePunctuation => "duplicate_punctuation",
            Stage::Capitalization => "capitalization",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Stage::SpacingAfter => space_after_punctuation(text),
            Stage::SpacingNearDash => space_around_em_dash(text),
            Stage::SpacingCollapse => collapse_spacing(text),
            Stage::DuplicatePunctuation => remove_duplicate_punctuation(text),
            Stage::Capitalization => fix_capitalization(text),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main entry point. Runs every stage in [`STAGES`] order, then the
/// finishing steps.
///
/// Fails with [`NormalizeError::EmptyResult`] when nothing but whitespace is
/// left to finish. Same input, same result: the function holds no state.
pub fn normalize(text: &str) -> Result<String, NormalizeError> {
    let staged = STAGES
        .iter()
        .fold(text.to_owned(), |acc, stage| stage.apply(&acc));
    finish(&staged)
}

/// Validates raw bytes as UTF-8, then normalizes them.
pub fn normalize_bytes(bytes: &[u8]) -> Result<String, NormalizeError> {
    let text = std::str::from_utf8(bytes)?;
    normalize(text)
}

/// Like [`normalize`], but keeps every intermediate string.
pub fn inspect(text: &str) -> Result<NormalizationTrace, NormalizeError> {
    let mut stages = Vec::with_capacity(STAGES.len());
    let mut current = text.to_owned();
    for stage in STAGES {
        current = stage.apply(&current);
        stages.push(StageOutput {
            stage,
            text: current.clone(),
        });
    }
    let output = finish(&current)?;

    Ok(NormalizationTrace {
        input: text.to_owned(),
        stages,
        output,
    })
}
