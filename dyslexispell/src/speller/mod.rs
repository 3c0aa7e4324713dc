use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::policy::Source;
use crate::error::ConfigError;
use crate::lexicon::{normalize_key, Lexicon, Match};
use crate::speller::suggestion::Suggestion;
use crate::tokenizer::case_handling::CaseMutation;
use crate::tokenizer::{Tokenize, WordToken, DEFAULT_MIN_WORD_LEN};

pub use self::ignore::IgnoreList;

mod ignore;
pub mod policy;
pub mod suggestion;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// words shorter than this many chars are never flagged
    pub min_word_len: usize,
    /// caps the number of homophone alternatives
    pub n_best: Option<usize>,
    /// reshape corrections to the casing of the flagged word
    pub recase: bool,
    /// flag homophones at all
    pub homophones: bool,
}

impl SpellerConfig {
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            n_best: None,
            recase: true,
            homophones: true,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SpellerConfig, ConfigError> {
        let config: SpellerConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SpellerConfig, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_len == 0 {
            return Err(ConfigError::InvalidMinWordLength(self.min_word_len));
        }
        if self.n_best == Some(0) {
            return Err(ConfigError::InvalidNBest);
        }
        Ok(())
    }
}

impl Default for SpellerConfig {
    fn default() -> SpellerConfig {
        SpellerConfig::default()
    }
}

pub trait Speller {
    fn analyze(&self, text: &str, ignore: &IgnoreList) -> Vec<Suggestion>;
    fn analyze_with_config(
        &self,
        text: &str,
        ignore: &IgnoreList,
        config: &SpellerConfig,
    ) -> Vec<Suggestion>;
    fn instant_correction(&self, word: &str) -> Option<SmolStr>;
}

/// Dictionary-driven speller over a [`Lexicon`].
///
/// Holds nothing but a shared reference to read-only tables, so one speller
/// can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct PhoneticSpeller<'l> {
    lexicon: &'l Lexicon,
}

impl PhoneticSpeller<'static> {
    pub fn builtin() -> PhoneticSpeller<'static> {
        PhoneticSpeller::new(Lexicon::builtin())
    }
}

impl Default for PhoneticSpeller<'static> {
    fn default() -> Self {
        PhoneticSpeller::builtin()
    }
}

impl<'l> PhoneticSpeller<'l> {
    pub fn new(lexicon: &'l Lexicon) -> PhoneticSpeller<'l> {
        PhoneticSpeller { lexicon }
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    fn suggestion(&self, token: &WordToken, found: Match, config: &SpellerConfig) -> Suggestion {
        let case = if config.recase {
            CaseMutation::of(token.text)
        } else {
            CaseMutation::None
        };

        let suggestions = match found {
            Match::Correction(_, entry) => vec![case.apply(&entry.correction)],
            Match::Homophone(entry) => entry
                .alternatives
                .iter()
                .map(|x| case.apply(x))
                .unique()
                .take(config.n_best.unwrap_or(usize::MAX))
                .collect(),
        };

        let kind = found.kind();

        Suggestion {
            original: SmolStr::new(token.text),
            suggestions,
            confidence: kind.confidence(),
            source: Source::Local,
            position: token.position(),
            category: kind.category(),
            tip: Some(SmolStr::new(found.tip())),
            kind: Some(kind),
        }
    }
}

impl<'l> Speller for PhoneticSpeller<'l> {
    #[inline]
    fn analyze(&self, text: &str, ignore: &IgnoreList) -> Vec<Suggestion> {
        self.analyze_with_config(text, ignore, &SpellerConfig::default())
    }

    fn analyze_with_config(
        &self,
        text: &str,
        ignore: &IgnoreList,
        config: &SpellerConfig,
    ) -> Vec<Suggestion> {
        let mut out = vec![];
        let mut words = 0;

        for token in text.word_tokens_with_min_len(config.min_word_len.max(1)) {
            words += 1;
            let key = normalize_key(token.text);

            if ignore.contains_key(&key) {
                log::trace!("{:?} is ignored", token.text);
                continue;
            }

            let found = if config.homophones {
                self.lexicon.lookup(&key)
            } else {
                self.lexicon.lookup_correction(&key)
            };

            // First matching table wins; a word is flagged at most once.
            if let Some(found) = found {
                log::trace!("{:?} at {} matched {}", token.text, token.start, found.kind());
                out.push(self.suggestion(&token, found, config));
            }
        }

        log::debug!(
            "analyzed {} words, {} suggestions",
            words,
            out.len()
        );

        out
    }

    fn instant_correction(&self, word: &str) -> Option<SmolStr> {
        let word = word.trim();
        match self.lexicon.lookup_correction(&normalize_key(word))? {
            Match::Correction(_, entry) => Some(CaseMutation::of(word).apply(&entry.correction)),
            Match::Homophone(_) => None,
        }
    }
}
