//! Word extraction with exact source offsets.
//!
//! A word is a run of ASCII letters, optionally followed by one apostrophe
//! and a further run of letters ("don't", "they're"). Both the straight `'`
//! and the typographic `’` apostrophe are accepted.
use serde::{Deserialize, Serialize};

/// Half-open range `[start, end)` in chars from the start of the text.
///
/// Offsets count Unicode scalar values, not UTF-16 code units. JavaScript
/// renderers must convert them before using `substring` on text with astral
/// chars such as emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Position {
        Position { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice of `text` this position covers, if it still lies
    /// on char boundaries within the text.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.start > self.end {
            return None;
        }
        let mut indices = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()));
        let start = indices.nth(self.start)?;
        let end = if self.is_empty() {
            start
        } else {
            indices.nth(self.len() - 1)?
        };
        text.get(start..end)
    }
}

/// A word as it appears in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// the word, with its original casing
    pub text: &'a str,
    /// char offset of the first char
    pub start: usize,
    /// char offset one past the last char
    pub end: usize,
    /// byte offset of `text` within the source
    pub byte_offset: usize,
}

impl<'a> WordToken<'a> {
    pub fn position(&self) -> Position {
        Position::new(self.start, self.end)
    }
}

#[inline(always)]
pub(crate) fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

#[inline(always)]
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_apostrophe(ch)
}

/// Length of the word at the start of `s` as `(bytes, chars)`.
///
/// `s` must start with an ASCII letter.
fn word_extent(s: &str) -> (usize, usize) {
    let letters = |s: &str| s.bytes().take_while(u8::is_ascii_alphabetic).count();

    let head = letters(s);
    let mut rest = s[head..].chars();
    if let Some(ch) = rest.next() {
        if is_apostrophe(ch) {
            let tail = letters(rest.as_str());
            if tail > 0 {
                return (head + ch.len_utf8() + tail, head + 1 + tail);
            }
        }
    }

    (head, head)
}

/// Whether `s` is exactly one word as the tokenizer would produce it.
pub(crate) fn is_word(s: &str) -> bool {
    match s.chars().next() {
        Some(ch) if ch.is_ascii_alphabetic() => word_extent(s).0 == s.len(),
        _ => false,
    }
}

/// Iterator over the words of a text, left to right.
#[derive(Debug, Clone)]
pub struct WordTokens<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
    min_len: usize,
}

impl<'a> WordTokens<'a> {
    pub fn new(text: &'a str) -> WordTokens<'a> {
        Self::new_with_min_len(text, super::DEFAULT_MIN_WORD_LEN)
    }

    pub fn new_with_min_len(text: &'a str, min_len: usize) -> WordTokens<'a> {
        WordTokens {
            text,
            byte_pos: 0,
            char_pos: 0,
            min_len,
        }
    }

    fn skip_to_word(&mut self) -> bool {
        let text = self.text;
        for ch in text[self.byte_pos..].chars() {
            if ch.is_ascii_alphabetic() {
                return true;
            }
            self.byte_pos += ch.len_utf8();
            self.char_pos += 1;
        }
        false
    }
}

impl<'a> Iterator for WordTokens<'a> {
    type Item = WordToken<'a>;

    fn next(&mut self) -> Option<WordToken<'a>> {
        while self.skip_to_word() {
            let byte_start = self.byte_pos;
            let char_start = self.char_pos;
            let (byte_len, char_len) = word_extent(&self.text[byte_start..]);

            self.byte_pos += byte_len;
            self.char_pos += char_len;

            if char_len < self.min_len {
                continue;
            }

            // A token whose offsets do not re-slice to itself is dropped.
            let text = match self.text.get(byte_start..byte_start + byte_len) {
                Some(text) if text.chars().count() == char_len => text,
                _ => {
                    log::warn!(
                        "dropping token at {}..{}: offsets do not match source",
                        char_start,
                        char_start + char_len
                    );
                    continue;
                }
            };

            return Some(WordToken {
                text,
                start: char_start,
                end: char_start + char_len,
                byte_offset: byte_start,
            });
        }

        None
    }
}

impl<'a> std::iter::FusedIterator for WordTokens<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<(usize, usize, &str)> {
        WordTokens::new(text)
            .map(|t| (t.start, t.end, t.text))
            .collect()
    }

    #[test]
    fn basic() {
        assert_eq!(
            words("I have a frend"),
            vec![(2, 6, "have"), (9, 14, "frend")]
        );
    }

    #[test]
    fn contractions() {
        assert_eq!(
            words("they're here, don't go"),
            vec![(0, 7, "they're"), (8, 12, "here"), (14, 19, "don't"), (20, 22, "go")]
        );
        assert_eq!(
            words("they\u{2019}re"),
            vec![(0, 7, "they\u{2019}re")]
        );
    }

    #[test]
    fn apostrophe_edges() {
        assert_eq!(words("'quoted'"), vec![(1, 7, "quoted")]);
        assert_eq!(words("dogs' bones"), vec![(0, 4, "dogs"), (6, 11, "bones")]);
        assert_eq!(
            words("y'all'd"),
            vec![(0, 5, "y'all")]
        );
    }

    #[test]
    fn non_ascii_splits_words() {
        let text = "café über frend";
        let tokens = WordTokens::new(text).collect::<Vec<_>>();
        assert_eq!(
            tokens.iter().map(|t| t.text).collect::<Vec<_>>(),
            vec!["caf", "ber", "frend"]
        );
        for token in tokens {
            assert_eq!(token.position().slice(text), Some(token.text));
            assert_eq!(&text[token.byte_offset..token.byte_offset + token.text.len()], token.text);
        }
    }

    #[test]
    fn reversed_position() {
        let pos = Position::new(9, 4);
        assert_eq!(pos.len(), 0);
        assert!(pos.is_empty());
        assert_eq!(pos.slice("I have a frend"), None);
    }

    #[test]
    fn offsets_count_chars() {
        let text = "😄 teh";
        assert_eq!(words(text), vec![(2, 5, "teh")]);
    }

    #[test]
    fn min_len() {
        let text = "a an ant";
        let tokens = WordTokens::new_with_min_len(text, 3)
            .map(|t| t.text)
            .collect::<Vec<_>>();
        assert_eq!(tokens, vec!["ant"]);

        let tokens = WordTokens::new_with_min_len(text, 1)
            .map(|t| t.text)
            .collect::<Vec<_>>();
        assert_eq!(tokens, vec!["a", "an", "ant"]);
    }

    #[test]
    fn digits_break_words() {
        assert_eq!(words("abc123def"), vec![(0, 3, "abc"), (6, 9, "def")]);
    }

    #[test]
    fn empty() {
        assert!(words("").is_empty());
        assert!(words("  ,.! 123").is_empty());
    }

    #[test]
    fn restartable() {
        let iter = WordTokens::new("one two three");
        let first = iter.clone().collect::<Vec<_>>();
        let second = iter.collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn word_check() {
        assert!(is_word("don't"));
        assert!(is_word("frend"));
        assert!(!is_word("'tis"));
        assert!(!is_word("two words"));
        assert!(!is_word("dogs'"));
        assert!(!is_word(""));
    }

    #[test]
    fn position_slice() {
        let text = "😄 teh";
        assert_eq!(Position::new(2, 5).slice(text), Some("teh"));
        assert_eq!(Position::new(0, 1).slice(text), Some("😄"));
        assert_eq!(Position::new(5, 5).slice(text), Some(""));
        assert_eq!(Position::new(4, 9).slice(text), None);
        assert_eq!(Position::new(3, 2).slice(text), None);
    }
}
