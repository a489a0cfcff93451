/// Collapses every run of identical non-word characters to a single instance.
///
/// A character is dropped when it is not a word character and the very next
/// character is the same one, so a run keeps only its last member. Word
/// characters (alphanumerics and `_`) are never touched, which leaves doubled
/// letters in ordinary words alone. Whitespace counts as a non-word
/// character: two identical spaces become one.
///
/// ```rust
/// use normalize::remove_duplicate_punctuation;
///
/// assert_eq!(remove_duplicate_punctuation("Wow!!!"), "Wow!");
/// assert_eq!(remove_duplicate_punctuation("bookkeeper"), "bookkeeper");
/// ```
pub fn remove_duplicate_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if !is_word_char(ch) && chars.peek() == Some(&ch) {
            continue;
        }
        out.push(ch);
    }
    out
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
