use hashbrown::HashSet;
use smol_str::SmolStr;

use crate::lexicon::normalize_key;

/// Words that must never be flagged: custom terms, names, homophones the
/// user has already confirmed. Matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList(HashSet<SmolStr>);

impl IgnoreList {
    pub fn new() -> IgnoreList {
        IgnoreList::default()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(normalize_key(word.trim()))
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.0.remove(normalize_key(word.trim()).as_str())
    }

    /// `key` must already be normalised.
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.contains_key(&normalize_key(word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> IgnoreList {
        let mut list = IgnoreList::new();
        list.extend(iter);
        list
    }
}

impl<S: AsRef<str>> Extend<S> for IgnoreList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        let list = ["Frend", "THEIR", " doy "].iter().collect::<IgnoreList>();
        assert_eq!(list.len(), 3);
        assert!(list.contains("frend"));
        assert!(list.contains("FREND"));
        assert!(list.contains("Their"));
        assert!(list.contains("doy"));
        assert!(!list.contains("teh"));
    }

    #[test]
    fn apostrophes_fold() {
        let mut list = IgnoreList::new();
        list.insert("they\u{2019}re");
        assert!(list.contains("They're"));
        assert!(list.remove("THEY'RE"));
        assert!(list.is_empty());
    }
}
