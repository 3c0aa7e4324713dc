//! Re-finding a word after the text around it has changed.
//!
//! Positions handed out by the speller are only valid for the exact text that
//! was analysed. An editor that keeps showing a suggestion while the user types
//! uses [`locate`] to find where the word has moved to, treating the old
//! position as a hint.
use super::word::{is_word_char, Position};

/// Finds a whole-word occurrence of `word` in `text`.
///
/// Occurrences starting within `window` chars of `hint` win, closest first.
/// Otherwise the first occurrence in the text is returned. Matching is case
/// sensitive, and an occurrence only counts when it is not part of a longer
/// word.
pub fn locate(text: &str, word: &str, hint: usize, window: usize) -> Option<Position> {
    if word.is_empty() {
        return None;
    }

    let word_chars = word.chars().count();
    let mut first = None;
    let mut best: Option<(usize, usize)> = None;

    // Byte offsets from `match_indices` come in increasing order, so the
    // char offset is accumulated rather than recounted for every match.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for (byte_start, _) in text.match_indices(word) {
        char_cursor += text[byte_cursor..byte_start].chars().count();
        byte_cursor = byte_start;

        let byte_end = byte_start + word.len();
        let before = text[..byte_start].chars().next_back();
        let after = text[byte_end..].chars().next();
        if before.map_or(false, is_word_char) || after.map_or(false, is_word_char) {
            continue;
        }

        let start = char_cursor;
        if first.is_none() {
            first = Some(start);
        }

        let distance = if start > hint { start - hint } else { hint - start };
        if distance <= window && best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, start));
        }
    }

    best.map(|(_, start)| start)
        .or(first)
        .map(|start| Position::new(start, start + word_chars))
}
