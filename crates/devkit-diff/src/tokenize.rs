//! Splitting raw text into token sequences.

use crate::mode::DiffMode;

/// Split `text` into the token sequence for `mode`.
///
/// Tokens borrow from `text`. Line and word modes always produce at least one
/// token, so the empty string becomes `[""]`; character mode produces none.
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<&str> {
    match mode {
        DiffMode::Lines => text.split('\n').collect(),
        DiffMode::Words => split_whitespace_runs(text),
        DiffMode::Chars => text
            .char_indices()
            .map(|(idx, ch)| &text[idx..idx + ch.len_utf8()])
            .collect(),
    }
}

/// Split on runs of whitespace, keeping a leading and trailing empty token when
/// the text starts or ends with whitespace.
///
/// Unlike [`str::split_whitespace`], edge whitespace is significant here, so
/// `" a"` and `"a"` tokenize differently.
fn split_whitespace_runs(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !ch.is_whitespace() {
            continue;
        }
        tokens.push(&text[start..idx]);
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        start = end;
    }
    tokens.push(&text[start..]);
    tokens
}
