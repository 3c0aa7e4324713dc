/*! Phonetic spell correction for dyslexia-typical errors.

Finds words in free text that match known error patterns (phonetic
misspellings, b/d and p/q reversals, common typos, and homophones) and returns
ranked, categorised corrections anchored to exact positions in the text.

Analysis is a pure function of the text and an ignore list: no I/O, no state
kept between calls, and the same input always gives the same output.

# Usage examples

```
use dyslexispell::speller::{IgnoreList, PhoneticSpeller, Speller};

let speller = PhoneticSpeller::builtin();
let suggestions = speller.analyze("I have a frend", &IgnoreList::new());

assert_eq!(suggestions.len(), 1);
assert_eq!(suggestions[0].original, "frend");
assert_eq!(suggestions[0].best(), Some("friend"));
assert_eq!(suggestions[0].position.start, 9);
```

Suggestions from another source, such as a language model, can be combined
with local ones using [`merge::merge`].

Further examples of how to use the library can be found in the
`dyslexispell-bin` crate in the same workspace.
*/

pub mod error;
pub mod lexicon;
pub mod merge;
pub mod speller;
pub mod tokenizer;

use smol_str::SmolStr;

use crate::speller::{suggestion::Suggestion, IgnoreList, PhoneticSpeller, Speller};

pub use crate::tokenizer::case_handling::apply_case;
pub use crate::tokenizer::extract;

/// Analyses `text` against the built-in lexicon.
pub fn analyze(text: &str, ignore: &IgnoreList) -> Vec<Suggestion> {
    PhoneticSpeller::builtin().analyze(text, ignore)
}

/// The single correction for `word` from the built-in lexicon, cased like
/// `word`. Homophones have no single answer and give `None`.
pub fn instant_correction(word: &str) -> Option<SmolStr> {
    PhoneticSpeller::builtin().instant_correction(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points() {
        let out = analyze("teh cat", &IgnoreList::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].best(), Some("the"));

        assert_eq!(instant_correction("Frend").as_deref(), Some("Friend"));
        assert_eq!(instant_correction("there"), None);

        assert_eq!(apply_case("THIER", "their"), "THEIR");
        assert_eq!(extract("I have a frend").len(), 2);
    }

    #[test]
    fn analysis_across_threads() {
        let handles = (0..4)
            .map(|_| {
                std::thread::spawn(|| analyze("Thay sed there frend wos late", &IgnoreList::new()))
            })
            .collect::<Vec<_>>();

        let expected = analyze("Thay sed there frend wos late", &IgnoreList::new());
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
