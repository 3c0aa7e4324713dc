//! Fixed category and confidence per kind of match.
//!
//! | kind      | category | confidence | suggestions      |
//! |-----------|----------|------------|------------------|
//! | phonetic  | purple   | 0.95       | 1                |
//! | reversal  | purple   | 0.90       | 1                |
//! | typo      | orange   | 0.90       | 1                |
//! | homophone | yellow   | 0.50       | all alternatives |
use serde::{Deserialize, Serialize};

pub use crate::lexicon::MatchKind;

pub const PHONETIC_CONFIDENCE: f32 = 0.95;
pub const REVERSAL_CONFIDENCE: f32 = 0.90;
pub const TYPO_CONFIDENCE: f32 = 0.90;
/// Homophones need sentence context this engine does not look at.
pub const HOMOPHONE_CONFIDENCE: f32 = 0.50;

/// Highlight category of a suggestion.
///
/// `Blue` and `Green` are never produced locally; they are reserved for
/// suggestions from other sources and survive a [`merge`](crate::merge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Purple,
    Yellow,
    Blue,
    Orange,
    Green,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Category::Purple => "purple",
            Category::Yellow => "yellow",
            Category::Blue => "blue",
            Category::Orange => "orange",
            Category::Green => "green",
        })
    }
}

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    Ai,
}

impl MatchKind {
    pub const fn category(self) -> Category {
        match self {
            MatchKind::Phonetic | MatchKind::Reversal => Category::Purple,
            MatchKind::Typo => Category::Orange,
            MatchKind::Homophone => Category::Yellow,
        }
    }

    pub const fn confidence(self) -> f32 {
        match self {
            MatchKind::Phonetic => PHONETIC_CONFIDENCE,
            MatchKind::Reversal => REVERSAL_CONFIDENCE,
            MatchKind::Typo => TYPO_CONFIDENCE,
            MatchKind::Homophone => HOMOPHONE_CONFIDENCE,
        }
    }

    /// Whether this kind has exactly one answer.
    pub const fn is_single(self) -> bool {
        !matches!(self, MatchKind::Homophone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        assert_eq!(MatchKind::Phonetic.category(), Category::Purple);
        assert_eq!(MatchKind::Reversal.category(), Category::Purple);
        assert_eq!(MatchKind::Typo.category(), Category::Orange);
        assert_eq!(MatchKind::Homophone.category(), Category::Yellow);

        assert_eq!(MatchKind::Phonetic.confidence(), 0.95);
        assert_eq!(MatchKind::Reversal.confidence(), 0.90);
        assert_eq!(MatchKind::Typo.confidence(), 0.90);
        assert_eq!(MatchKind::Homophone.confidence(), 0.5);
    }

    #[test]
    fn serialized_names() {
        assert_eq!(serde_json::to_string(&Category::Purple).unwrap(), "\"purple\"");
        assert_eq!(serde_json::to_string(&Source::Ai).unwrap(), "\"ai\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"green\"").unwrap(),
            Category::Green
        );
        assert_eq!(Category::Orange.to_string(), "orange");
    }
}
