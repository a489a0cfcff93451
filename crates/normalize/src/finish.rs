use crate::error::NormalizeError;

/// Marks that may end a normalized string.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Finishing steps applied after the last stage, in order: trim, fail on an
/// empty result, upper-case a lower-case first character, append `.` unless
/// the text already ends in terminal punctuation, then strip every backslash.
///
/// Backslashes are removed last, so a leading `\` can expose a lower-case
/// character at the front of the result.
pub fn finish(text: &str) -> Result<String, NormalizeError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let first = chars.next().ok_or(NormalizeError::EmptyResult)?;

    let mut out = String::with_capacity(trimmed.len() + 1);
    if first.is_lowercase() {
        out.extend(first.to_uppercase());
    } else {
        out.push(first);
    }
    out.push_str(chars.as_str());

    if !out.ends_with(&TERMINAL_PUNCTUATION[..]) {
        out.push('.');
    }

    out.retain(|ch| ch != '\\');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_terminates() {
        assert_eq!(finish("  hi  ").unwrap(), "Hi.");
        assert_eq!(finish("ok?").unwrap(), "Ok?");
        assert_eq!(finish("Stop!").unwrap(), "Stop!");
    }

    #[test]
    fn non_letter_first_character_kept() {
        assert_eq!(finish("1 item").unwrap(), "1 item.");
        assert_eq!(finish("(aside)").unwrap(), "(aside).");
    }

    #[test]
    fn empty_after_trim_is_error() {
        assert_eq!(finish(""), Err(NormalizeError::EmptyResult));
        assert_eq!(finish(" \t\n "), Err(NormalizeError::EmptyResult));
    }

    #[test]
    fn backslashes_removed_everywhere() {
        assert_eq!(finish("a\\b").unwrap(), "Ab.");
        assert_eq!(finish("\\").unwrap(), ".");
        assert_eq!(finish("end\\").unwrap(), "End.");
    }

    #[test]
    fn leading_backslash_hides_first_letter() {
        assert_eq!(finish("\\abc").unwrap(), "abc.");
    }
}
