//! Categorised correction dictionaries.
//!
//! A [`Lexicon`] holds four read-only tables keyed by lowercase error token.
//! The built-in tables are shared process-wide through [`Lexicon::builtin`];
//! callers wanting extra entries build a new lexicon from an overlay with
//! [`Lexicon::with_overlay`].
use std::fmt;
use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::LexiconError;
use crate::tokenizer::case_handling::lower_case;
use crate::tokenizer::word::is_word;

pub(crate) mod tables;

/// Shown for every common typo, whatever the entry.
pub const TYPO_TIP: &str = "Common typo";

const PHONETIC_TIP: &str = "This word is often spelled the way it sounds.";
const REVERSAL_TIP: &str = "Check for letters that are easy to flip, like b/d and p/q.";
const HOMOPHONE_TIP: &str = "These words sound the same but mean different things.";

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::from_tables);

/// Which table an entry lives in. Also the kind of match a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Phonetic or dyslexia-pattern misspelling
    Phonetic,
    /// Letter reversal (b/d, p/q) or transposed letters
    Reversal,
    /// Common keyboard typo
    Typo,
    /// Member of a homophone group
    Homophone,
}

impl MatchKind {
    fn default_tip(self) -> &'static str {
        match self {
            MatchKind::Phonetic => PHONETIC_TIP,
            MatchKind::Reversal => REVERSAL_TIP,
            MatchKind::Typo => TYPO_TIP,
            MatchKind::Homophone => HOMOPHONE_TIP,
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MatchKind::Phonetic => "phonetic",
            MatchKind::Reversal => "reversal",
            MatchKind::Typo => "typo",
            MatchKind::Homophone => "homophone",
        })
    }
}

/// A single-answer correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// canonical lowercase correction
    pub correction: SmolStr,
    /// rationale shown to the user
    pub tip: SmolStr,
}

/// The other members of a homophone group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomophoneEntry {
    /// canonical lowercase alternatives, best first
    pub alternatives: Vec<SmolStr>,
    /// rationale shown to the user
    pub tip: SmolStr,
}

/// Result of probing a lexicon for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'a> {
    /// Hit in the phonetic, reversal or typo table
    Correction(MatchKind, &'a Entry),
    /// Hit in the homophone table
    Homophone(&'a HomophoneEntry),
}

impl<'a> Match<'a> {
    /// the table the match came from
    pub fn kind(&self) -> MatchKind {
        match self {
            Match::Correction(kind, _) => *kind,
            Match::Homophone(_) => MatchKind::Homophone,
        }
    }

    /// the rationale attached to the matched entry
    pub fn tip(&self) -> &'a str {
        match self {
            Match::Correction(_, entry) => &entry.tip,
            Match::Homophone(entry) => &entry.tip,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    phonetic: HashMap<SmolStr, Entry>,
    reversal: HashMap<SmolStr, Entry>,
    typo: HashMap<SmolStr, Entry>,
    homophone: HashMap<SmolStr, HomophoneEntry>,
}

impl Lexicon {
    /// The built-in tables, initialised on first use and never mutated.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    fn from_tables() -> Lexicon {
        let single = |rows: &[(&str, &str, &str)]| {
            rows.iter()
                .map(|(key, correction, tip)| {
                    (
                        SmolStr::new(key),
                        Entry {
                            correction: SmolStr::new(correction),
                            tip: SmolStr::new(tip),
                        },
                    )
                })
                .collect::<HashMap<_, _>>()
        };

        let typo = tables::TYPOS
            .iter()
            .map(|(key, correction)| {
                (
                    SmolStr::new(key),
                    Entry {
                        correction: SmolStr::new(correction),
                        tip: SmolStr::new(TYPO_TIP),
                    },
                )
            })
            .collect();

        let homophone = tables::HOMOPHONES
            .iter()
            .map(|(key, alternatives, tip)| {
                (
                    SmolStr::new(key),
                    HomophoneEntry {
                        alternatives: alternatives.iter().map(SmolStr::new).collect(),
                        tip: SmolStr::new(tip),
                    },
                )
            })
            .collect();

        Lexicon {
            phonetic: single(tables::PHONETIC),
            reversal: single(tables::REVERSAL),
            typo,
            homophone,
        }
    }

    /// Probes the tables in precedence order: phonetic, reversal, typo, homophone.
    ///
    /// `key` must already be normalised with [`normalize_key`].
    pub fn lookup(&self, key: &str) -> Option<Match<'_>> {
        self.lookup_correction(key)
            .or_else(|| self.homophone.get(key).map(Match::Homophone))
    }

    /// Like [`Lexicon::lookup`], but never consults the homophone table.
    pub fn lookup_correction(&self, key: &str) -> Option<Match<'_>> {
        if let Some(entry) = self.phonetic.get(key) {
            return Some(Match::Correction(MatchKind::Phonetic, entry));
        }
        if let Some(entry) = self.reversal.get(key) {
            return Some(Match::Correction(MatchKind::Reversal, entry));
        }
        self.typo
            .get(key)
            .map(|entry| Match::Correction(MatchKind::Typo, entry))
    }

    /// Total number of entries across all four tables.
    pub fn len(&self) -> usize {
        self.phonetic.len() + self.reversal.len() + self.typo.len() + self.homophone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries in one table.
    pub fn table_len(&self, kind: MatchKind) -> usize {
        match kind {
            MatchKind::Phonetic => self.phonetic.len(),
            MatchKind::Reversal => self.reversal.len(),
            MatchKind::Typo => self.typo.len(),
            MatchKind::Homophone => self.homophone.len(),
        }
    }

    /// Returns a new lexicon with `overlay` applied on top of `self`.
    ///
    /// Overlay entries replace base entries with the same key in the same
    /// table. Keys and corrections are lowercased on the way in.
    pub fn with_overlay(&self, overlay: LexiconOverlay) -> Result<Lexicon, LexiconError> {
        let mut out = self.clone();

        let LexiconOverlay {
            phonetic,
            reversal,
            typo,
            homophone,
        } = overlay;

        for (kind, rows) in [
            (MatchKind::Phonetic, phonetic),
            (MatchKind::Reversal, reversal),
            (MatchKind::Typo, typo),
        ] {
            let table = match kind {
                MatchKind::Phonetic => &mut out.phonetic,
                MatchKind::Reversal => &mut out.reversal,
                _ => &mut out.typo,
            };
            for (key, row) in rows {
                let key = checked_key(&key)?;
                let correction = lower_case(row.correction.trim());
                if correction.is_empty() {
                    return Err(LexiconError::EmptyCorrection(key));
                }
                let tip = match row.tip {
                    Some(tip) if !tip.trim().is_empty() => tip,
                    _ => SmolStr::new(kind.default_tip()),
                };
                log::trace!("overlay {} entry {:?} -> {:?}", kind, key, correction);
                table.insert(key, Entry { correction, tip });
            }
        }

        for (key, row) in homophone {
            let key = checked_key(&key)?;
            let alternatives = row
                .alternatives
                .iter()
                .map(|x| lower_case(x.trim()))
                .filter(|x| !x.is_empty() && x != &key)
                .collect::<Vec<_>>();
            if alternatives.is_empty() {
                return Err(LexiconError::EmptyAlternatives(key));
            }
            let tip = match row.tip {
                Some(tip) if !tip.trim().is_empty() => tip,
                _ => SmolStr::new(HOMOPHONE_TIP),
            };
            out.homophone.insert(key, HomophoneEntry { alternatives, tip });
        }

        out.validate()?;
        log::debug!("lexicon overlay applied, {} entries total", out.len());
        Ok(out)
    }

    /// Checks that no key is shared by two single-correction tables.
    pub fn validate(&self) -> Result<(), LexiconError> {
        let duplicate = |key: &SmolStr, first: MatchKind, second: MatchKind| {
            Err(LexiconError::DuplicateKey {
                key: key.clone(),
                first,
                second,
            })
        };

        for key in self.reversal.keys() {
            if self.phonetic.contains_key(key) {
                return duplicate(key, MatchKind::Phonetic, MatchKind::Reversal);
            }
        }

        for key in self.typo.keys() {
            if self.phonetic.contains_key(key) {
                return duplicate(key, MatchKind::Phonetic, MatchKind::Typo);
            }
            if self.reversal.contains_key(key) {
                return duplicate(key, MatchKind::Reversal, MatchKind::Typo);
            }
        }

        Ok(())
    }
}

/// Lowercases a word and folds typographic apostrophes, giving a lookup key.
pub fn normalize_key(word: &str) -> SmolStr {
    if word.contains('\u{2019}') {
        lower_case(&word.replace('\u{2019}', "'"))
    } else {
        lower_case(word)
    }
}

fn checked_key(key: &str) -> Result<SmolStr, LexiconError> {
    let key = normalize_key(key.trim());
    if is_word(&key) {
        Ok(key)
    } else {
        Err(LexiconError::InvalidKey(key))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub correction: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<SmolStr>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayHomophone {
    pub alternatives: Vec<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<SmolStr>,
}

/// Extra lexicon entries, as read from a JSON file.
///
/// ```json
/// {
///   "phonetic": { "sircle": { "correction": "circle", "tip": "Soft 'c'." } },
///   "typo": { "nmae": { "correction": "name" } },
///   "homophone": { "flour": { "alternatives": ["flower"] } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconOverlay {
    pub phonetic: HashMap<SmolStr, OverlayEntry>,
    pub reversal: HashMap<SmolStr, OverlayEntry>,
    pub typo: HashMap<SmolStr, OverlayEntry>,
    pub homophone: HashMap<SmolStr, OverlayHomophone>,
}

impl LexiconOverlay {
    pub fn from_reader<R: Read>(reader: R) -> Result<LexiconOverlay, LexiconError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LexiconOverlay, LexiconError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| LexiconError::Io(path.display().to_string(), e))?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl std::str::FromStr for LexiconOverlay {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<LexiconOverlay, LexiconError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        let lexicon = Lexicon::builtin();
        lexicon.validate().unwrap();

        assert_eq!(lexicon.table_len(MatchKind::Phonetic), tables::PHONETIC.len());
        assert_eq!(lexicon.table_len(MatchKind::Reversal), tables::REVERSAL.len());
        assert_eq!(lexicon.table_len(MatchKind::Typo), tables::TYPOS.len());
        assert_eq!(lexicon.table_len(MatchKind::Homophone), tables::HOMOPHONES.len());
    }

    #[test]
    fn builtin_keys_are_lowercase_words() {
        let keys = tables::PHONETIC
            .iter()
            .map(|x| x.0)
            .chain(tables::REVERSAL.iter().map(|x| x.0))
            .chain(tables::TYPOS.iter().map(|x| x.0))
            .chain(tables::HOMOPHONES.iter().map(|x| x.0));

        for key in keys {
            assert!(is_word(key), "{:?} is not a word", key);
            assert_eq!(lower_case(key), key);
        }
    }

    #[test]
    fn builtin_homophones_have_alternatives() {
        for (key, alternatives, _) in tables::HOMOPHONES {
            assert!(!alternatives.is_empty(), "{:?}", key);
            assert!(!alternatives.contains(key), "{:?}", key);
        }
    }

    #[test]
    fn precedence() {
        let lexicon = Lexicon::builtin();

        assert_eq!(lexicon.lookup("frend").map(|m| m.kind()), Some(MatchKind::Phonetic));
        assert_eq!(lexicon.lookup("doy").map(|m| m.kind()), Some(MatchKind::Reversal));
        assert_eq!(lexicon.lookup("teh").map(|m| m.kind()), Some(MatchKind::Typo));
        assert_eq!(lexicon.lookup("their").map(|m| m.kind()), Some(MatchKind::Homophone));
        assert_eq!(lexicon.lookup_correction("their"), None);
        assert_eq!(lexicon.lookup("fox"), None);
    }

    #[test]
    fn typo_tip_is_generic() {
        match Lexicon::builtin().lookup("teh") {
            Some(m) => assert_eq!(m.tip(), TYPO_TIP),
            None => panic!("teh not found"),
        }
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_key("They\u{2019}RE"), "they're");
        assert_eq!(normalize_key("Frend"), "frend");
    }

    #[test]
    fn overlay_adds_and_overrides() {
        let overlay: LexiconOverlay = r#"{
            "phonetic": {
                "Sircle": { "correction": "Circle", "tip": "A soft 'c' sounds like 's'." },
                "frend": { "correction": "friend" }
            },
            "homophone": { "flour": { "alternatives": ["flower", "flour"] } }
        }"#
        .parse()
        .unwrap();

        let lexicon = Lexicon::builtin().with_overlay(overlay).unwrap();
        assert_eq!(lexicon.len(), Lexicon::builtin().len() + 2);

        match lexicon.lookup("sircle") {
            Some(Match::Correction(MatchKind::Phonetic, entry)) => {
                assert_eq!(entry.correction, "circle");
                assert_eq!(entry.tip, "A soft 'c' sounds like 's'.");
            }
            other => panic!("unexpected {:?}", other),
        }

        match lexicon.lookup("frend") {
            Some(m) => assert_eq!(m.tip(), PHONETIC_TIP),
            None => panic!("frend not found"),
        }

        match lexicon.lookup("flour") {
            Some(Match::Homophone(entry)) => {
                assert_eq!(entry.alternatives, vec![SmolStr::new("flower")]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn overlay_rejects_cross_table_duplicate() {
        let overlay: LexiconOverlay = r#"{ "typo": { "frend": { "correction": "friend" } } }"#
            .parse()
            .unwrap();

        match Lexicon::builtin().with_overlay(overlay) {
            Err(LexiconError::DuplicateKey { key, first, second }) => {
                assert_eq!(key, "frend");
                assert_eq!(first, MatchKind::Phonetic);
                assert_eq!(second, MatchKind::Typo);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn overlay_rejects_bad_entries() {
        let bad_key: LexiconOverlay = r#"{ "typo": { "two words": { "correction": "x" } } }"#
            .parse()
            .unwrap();
        assert!(matches!(
            Lexicon::builtin().with_overlay(bad_key),
            Err(LexiconError::InvalidKey(_))
        ));

        let empty: LexiconOverlay = r#"{ "typo": { "nmae": { "correction": "  " } } }"#
            .parse()
            .unwrap();
        assert!(matches!(
            Lexicon::builtin().with_overlay(empty),
            Err(LexiconError::EmptyCorrection(_))
        ));

        let lonely: LexiconOverlay = r#"{ "homophone": { "flour": { "alternatives": [] } } }"#
            .parse()
            .unwrap();
        assert!(matches!(
            Lexicon::builtin().with_overlay(lonely),
            Err(LexiconError::EmptyAlternatives(_))
        ));
    }

    #[test]
    fn overlay_rejects_malformed_json() {
        assert!(matches!(
            "{ \"typo\": [] }".parse::<LexiconOverlay>(),
            Err(LexiconError::Json(_))
        ));
    }
}
