//! Combining suggestions from several sources.
//!
//! Suggestions are keyed by their lowercased `original`. The first suggestion
//! seen for a key holds it; a later one replaces it only with a strictly
//! higher confidence. On replacement the incoming corrections, category, tip,
//! source and confidence are taken while `original` and `position` stay those
//! of the suggestion already held.
use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::speller::suggestion::Suggestion;

/// An insertion-ordered set of suggestions with at most one per key.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSet {
    items: Vec<Suggestion>,
    index: HashMap<SmolStr, usize>,
}

impl SuggestionSet {
    pub fn new() -> SuggestionSet {
        SuggestionSet::default()
    }

    /// Adds `incoming`, returning whether the set changed.
    pub fn insert(&mut self, incoming: Suggestion) -> bool {
        let key = incoming.key();

        match self.index.get(&key).copied() {
            Some(i) => {
                let held = &mut self.items[i];
                if incoming.confidence > held.confidence {
                    log::debug!(
                        "{:?}: {:?} {} replaces {:?} {}",
                        key,
                        incoming.source,
                        incoming.confidence,
                        held.source,
                        held.confidence
                    );
                    held.suggestions = incoming.suggestions;
                    held.confidence = incoming.confidence;
                    held.source = incoming.source;
                    held.category = incoming.category;
                    held.tip = incoming.tip;
                    held.kind = incoming.kind;
                    true
                } else {
                    false
                }
            }
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(incoming);
                true
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Suggestion> {
        self.index
            .get(crate::lexicon::normalize_key(word).as_str())
            .map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Suggestion> {
        self.items
    }
}

impl Extend<Suggestion> for SuggestionSet {
    fn extend<I: IntoIterator<Item = Suggestion>>(&mut self, iter: I) {
        for suggestion in iter {
            self.insert(suggestion);
        }
    }
}

impl FromIterator<Suggestion> for SuggestionSet {
    fn from_iter<I: IntoIterator<Item = Suggestion>>(iter: I) -> SuggestionSet {
        let mut set = SuggestionSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for SuggestionSet {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Merges `incoming` suggestions (typically from an AI source) into `local`.
///
/// Local suggestions come first in the result, in their original order,
/// followed by incoming suggestions for words the local engine did not flag.
pub fn merge<I>(local: Vec<Suggestion>, incoming: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = Suggestion>,
{
    let mut set = local.into_iter().collect::<SuggestionSet>();
    set.extend(incoming);
    set.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::policy::{Category, MatchKind, Source};
    use crate::speller::{IgnoreList, PhoneticSpeller, Speller};
    use crate::tokenizer::Position;

    fn ai(original: &str, suggestion: &str, confidence: f32, start: usize) -> Suggestion {
        Suggestion {
            original: original.into(),
            suggestions: vec![suggestion.into()],
            confidence,
            source: Source::Ai,
            position: Position::new(start, start + original.chars().count()),
            category: Category::Blue,
            tip: Some("From context.".into()),
            kind: None,
        }
    }

    fn local(text: &str) -> Vec<Suggestion> {
        PhoneticSpeller::builtin().analyze(text, &IgnoreList::new())
    }

    #[test]
    fn higher_confidence_replaces() {
        let merged = merge(local("I have a frend"), vec![ai("frend", "fiend", 0.99, 9)]);
        assert_eq!(merged.len(), 1);
        let s = &merged[0];
        assert_eq!(s.source, Source::Ai);
        assert_eq!(s.confidence, 0.99);
        assert_eq!(s.suggestions, vec![SmolStr::new("fiend")]);
        assert_eq!(s.category, Category::Blue);
        assert_eq!(s.tip.as_deref(), Some("From context."));
        assert_eq!(s.kind, None);
        assert_eq!(s.original, "frend");
        assert_eq!(s.position, Position::new(9, 14));
    }

    #[test]
    fn lower_confidence_is_dropped() {
        let merged = merge(local("I have a frend"), vec![ai("frend", "fiend", 0.80, 9)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].source, Source::Local);
        assert_eq!(merged[0].confidence, 0.95);
        assert_eq!(merged[0].suggestions, vec![SmolStr::new("friend")]);
        assert_eq!(merged[0].kind, Some(MatchKind::Phonetic));
    }

    #[test]
    fn equal_confidence_keeps_local() {
        let merged = merge(local("I have a frend"), vec![ai("frend", "fiend", 0.95, 9)]);
        assert_eq!(merged[0].source, Source::Local);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let merged = merge(local("I have a Frend"), vec![ai("FREND", "FIEND", 0.99, 9)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].original, "Frend");
        assert_eq!(merged[0].suggestions, vec![SmolStr::new("FIEND")]);
    }

    #[test]
    fn homophone_confidence_can_be_raised() {
        let text = "I saw there car";
        let mut raised = ai("there", "their", 0.92, 6);
        raised.category = Category::Yellow;
        let merged = merge(local(text), vec![raised]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].suggestions, vec![SmolStr::new("their")]);
        assert_eq!(merged[0].category, Category::Yellow);
        assert_eq!(merged[0].source, Source::Ai);
    }

    #[test]
    fn new_words_are_appended() {
        let merged = merge(
            local("teh frend"),
            vec![ai("went", "want", 0.7, 20), ai("Went", "wait", 0.6, 30)],
        );
        assert_eq!(
            merged.iter().map(|s| s.original.as_str()).collect::<Vec<_>>(),
            vec!["teh", "frend", "went"]
        );
        assert_eq!(merged[2].suggestions, vec![SmolStr::new("want")]);
    }

    #[test]
    fn repeated_local_words_collapse() {
        let merged = merge(local("teh cat and teh dog"), vec![]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].position, Position::new(0, 3));
    }

    #[test]
    fn set_lookup() {
        let set = local("frend doy").into_iter().collect::<SuggestionSet>();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("FREND").and_then(|s| s.best()), Some("friend"));
        assert!(set.get("teh").is_none());
    }

    #[test]
    fn merge_is_reproducible() {
        let text = "Thay sed there frend wos late";
        let incoming = vec![ai("there", "their", 0.9, 9), ai("late", "later", 0.4, 25)];
        let first = merge(local(text), incoming.clone());
        let second = merge(local(text), incoming);
        assert_eq!(first, second);
    }
}
