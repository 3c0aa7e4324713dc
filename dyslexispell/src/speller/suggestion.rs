//! Suggestion for a flagged word.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::policy::{Category, MatchKind, Source};
use crate::lexicon::normalize_key;
use crate::tokenizer::locate::locate;
use crate::tokenizer::Position;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One flagged word and its proposed corrections
pub struct Suggestion {
    /// the word exactly as it appears in the text
    pub original: SmolStr,
    /// corrections, best first, cased like `original`
    pub suggestions: Vec<SmolStr>,
    /// how sure the source is, from 0 to 1
    pub confidence: f32,
    /// which engine produced the suggestion
    pub source: Source,
    /// where `original` sits in the analysed text
    pub position: Position,
    /// highlight category
    pub category: Category,
    /// rationale shown to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<SmolStr>,
    /// table the local engine matched; absent for other sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MatchKind>,
}

impl Suggestion {
    /// gets the flagged word
    pub fn original(&self) -> &str {
        &self.original
    }

    /// gets the best correction, if any
    pub fn best(&self) -> Option<&str> {
        self.suggestions.first().map(|x| x.as_str())
    }

    /// the case-insensitive identity used when merging
    pub fn key(&self) -> SmolStr {
        normalize_key(&self.original)
    }

    /// Moves `position` to where `original` now sits in `text`, using the old
    /// position as a hint. Returns false and leaves `position` alone when the
    /// word is no longer in the text.
    pub fn relocate(&mut self, text: &str, window: usize) -> bool {
        match locate(text, &self.original, self.position.start, window) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Suggestion {
        Suggestion {
            original: "Frend".into(),
            suggestions: vec!["Friend".into()],
            confidence: 0.95,
            source: Source::Local,
            position: Position::new(9, 14),
            category: Category::Purple,
            tip: None,
            kind: Some(MatchKind::Phonetic),
        }
    }

    #[test]
    fn json_shape() {
        let mut value = serde_json::to_value(sample()).unwrap();
        let confidence = value
            .as_object_mut()
            .and_then(|x| x.remove("confidence"))
            .and_then(|x| x.as_f64())
            .unwrap();
        assert!((confidence - 0.95).abs() < 1e-6);
        assert_eq!(
            value,
            serde_json::json!({
                "original": "Frend",
                "suggestions": ["Friend"],
                "source": "local",
                "position": { "start": 9, "end": 14 },
                "category": "purple",
                "kind": "phonetic"
            })
        );
    }

    #[test]
    fn accepts_foreign_records() {
        let s: Suggestion = serde_json::from_str(
            r#"{
                "original": "there",
                "suggestions": ["their"],
                "confidence": 0.92,
                "source": "ai",
                "position": { "start": 4, "end": 9 },
                "category": "yellow",
                "tip": "Possessive needed here."
            }"#,
        )
        .unwrap();
        assert_eq!(s.source, Source::Ai);
        assert_eq!(s.kind, None);
        assert_eq!(s.best(), Some("their"));
        assert_eq!(s.key(), "there");
    }

    #[test]
    fn relocate() {
        let mut s = sample();
        assert!(s.relocate("Oh, I have a Frend", 10));
        assert_eq!(s.position, Position::new(13, 18));

        assert!(!s.relocate("nothing here", 10));
        assert_eq!(s.position, Position::new(13, 18));
    }
}
