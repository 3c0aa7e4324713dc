use chrono::prelude::*;
use std::error::Error;
use std::time::Instant;

use distance::damerau_levenshtein;
use dyslexispell::lexicon::{normalize_key, Lexicon, LexiconOverlay, MatchKind};
use dyslexispell::speller::suggestion::Suggestion;
use dyslexispell::speller::{IgnoreList, PhoneticSpeller, Speller, SpellerConfig};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::clap::{App, AppSettings, Arg};

/// One `misspelling<TAB>expected` line of the word list.
#[derive(Debug, Clone)]
struct Case {
    input: String,
    expected: String,
}

fn read_cases(path: &str, limit: Option<usize>) -> Result<Vec<Case>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut cases = vec![];
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("skipping unreadable line: {}", e);
                continue;
            }
        };
        if let (Some(input), Some(expected)) = (record.get(0), record.get(1)) {
            cases.push(Case {
                input: input.trim().to_string(),
                expected: expected.trim().to_string(),
            });
        }
        if limit.map_or(false, |n| cases.len() >= n) {
            break;
        }
    }
    Ok(cases)
}

/// Wall time of a lookup, kept in microseconds.
#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
#[serde(transparent)]
struct Micros(u64);

impl Micros {
    fn since(start: Instant) -> Micros {
        Micros(start.elapsed().as_micros() as u64)
    }
}

impl std::fmt::Display for Micros {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}µs", self.0)
    }
}

#[derive(Debug, Serialize)]
struct CaseResult<'a> {
    input: &'a str,
    expected: &'a str,
    distance: usize,
    kind: Option<MatchKind>,
    suggestions: Vec<Suggestion>,
    position: Option<usize>,
    time: Micros,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    config: &'a SpellerConfig,
    summary: Summary,
    results: Vec<CaseResult<'a>>,
    started_at: String,
    total_time: Micros,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    cases: u32,
    top1: u32,
    found: u32,
    unflagged: u32,
    wrong: u32,
    by_kind: KindCounts,
    slowest: Micros,
    fastest: Micros,
}

#[derive(Serialize, Default, Debug, Clone)]
struct KindCounts {
    phonetic: u32,
    reversal: u32,
    typo: u32,
    homophone: u32,
}

impl KindCounts {
    fn count(&mut self, kind: MatchKind) {
        match kind {
            MatchKind::Phonetic => self.phonetic += 1,
            MatchKind::Reversal => self.reversal += 1,
            MatchKind::Typo => self.typo += 1,
            MatchKind::Homophone => self.homophone += 1,
        }
    }
}

impl Summary {
    fn of(results: &[CaseResult<'_>]) -> Summary {
        let mut summary = Summary::default();

        for result in results {
            summary.cases += 1;
            if let Some(kind) = result.kind {
                summary.by_kind.count(kind);
            }
            match result.position {
                Some(0) => {
                    summary.top1 += 1;
                    summary.found += 1;
                }
                Some(_) => summary.found += 1,
                None if result.suggestions.is_empty() => summary.unflagged += 1,
                None => summary.wrong += 1,
            }
        }

        let times = || results.iter().map(|x| x.time);
        summary.slowest = times().max().unwrap_or_default();
        summary.fastest = times().min().unwrap_or_default();
        summary
    }

    fn share(&self, n: u32) -> f32 {
        if self.cases == 0 {
            0.0
        } else {
            n as f32 * 100.0 / self.cases as f32
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} cases", self.cases)?;
        writeln!(f, "  correction first   {:6.2}%", self.share(self.top1))?;
        writeln!(f, "  correction offered {:6.2}%", self.share(self.found))?;
        writeln!(f, "  not flagged        {:6.2}%", self.share(self.unflagged))?;
        writeln!(f, "  flagged, wrong fix {:6.2}%", self.share(self.wrong))?;
        writeln!(
            f,
            "  matched by: phonetic {}, reversal {}, typo {}, homophone {}",
            self.by_kind.phonetic, self.by_kind.reversal, self.by_kind.typo, self.by_kind.homophone
        )?;
        write!(f, "  lookup time {} to {}", self.fastest, self.slowest)
    }
}

/// Where `expected` sits among the corrections offered for `input`.
fn rank(input: &str, expected: &str, suggestions: &[Suggestion]) -> Option<usize> {
    let key = normalize_key(input);
    let expected = normalize_key(expected);
    suggestions
        .iter()
        .find(|s| s.key() == key)
        .and_then(|s| {
            s.suggestions
                .iter()
                .position(|x| normalize_key(x) == expected)
        })
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("dyslexispell-accuracy")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Measures how often dyslexispell offers the expected correction.")
        .arg(
            Arg::with_name("cases")
                .value_name("CASES")
                .required(true)
                .help("TSV file, one 'misspelling<TAB>expected' pair per line"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .help("Speller config JSON used instead of the defaults"),
        )
        .arg(
            Arg::with_name("lexicon")
                .short("l")
                .takes_value(true)
                .help("Lexicon overlay JSON layered over the built-in tables"),
        )
        .arg(
            Arg::with_name("report")
                .short("o")
                .takes_value(true)
                .value_name("REPORT")
                .help("Write the full per-case report as JSON to this path"),
        )
        .arg(
            Arg::with_name("limit")
                .short("w")
                .takes_value(true)
                .help("Only check the first N cases"),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => SpellerConfig::from_path(path)?,
        None => SpellerConfig::default(),
    };

    let lexicon = match matches.value_of("lexicon") {
        Some(path) => Lexicon::builtin().with_overlay(LexiconOverlay::from_path(path)?)?,
        None => Lexicon::builtin().clone(),
    };
    let speller = PhoneticSpeller::new(&lexicon);
    let ignore = IgnoreList::new();

    let limit = matches.value_of("limit").and_then(|x| x.parse::<usize>().ok());
    let cases = match matches.value_of("cases") {
        Some(path) => read_cases(path, limit)?,
        None => return Err("no case list given".into()),
    };
    log::info!("checking {} cases", cases.len());

    let pb = ProgressBar::new(cases.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{wide_bar} {pos}/{len} {eta}"));

    let started_at = Local::now().to_rfc3339();
    let run = Instant::now();
    let results = cases
        .par_iter()
        .progress_with(pb)
        .map(|case| {
            let lookup = Instant::now();
            let suggestions = speller.analyze_with_config(&case.input, &ignore, &config);
            let time = Micros::since(lookup);

            CaseResult {
                input: &case.input,
                expected: &case.expected,
                distance: damerau_levenshtein(&case.input, &case.expected),
                kind: suggestions.first().and_then(|s| s.kind),
                position: rank(&case.input, &case.expected, &suggestions),
                suggestions,
                time,
            }
        })
        .collect::<Vec<_>>();
    let total_time = Micros::since(run);

    let summary = Summary::of(&results);
    println!("{}", summary);

    if let Some(path) = matches.value_of("report") {
        let report = Report {
            config: &config,
            summary,
            results,
            started_at,
            total_time,
        };
        serde_json::to_writer_pretty(std::fs::File::create(path)?, &report)?;
        println!("Report written to {}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<'a>(speller: &PhoneticSpeller, case: &'a Case) -> CaseResult<'a> {
        let suggestions = speller.analyze(&case.input, &IgnoreList::new());
        CaseResult {
            input: &case.input,
            expected: &case.expected,
            distance: damerau_levenshtein(&case.input, &case.expected),
            kind: suggestions.first().and_then(|s| s.kind),
            position: rank(&case.input, &case.expected, &suggestions),
            suggestions,
            time: Micros::default(),
        }
    }

    fn case(input: &str, expected: &str) -> Case {
        Case {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn ranks_and_summarises() {
        let speller = PhoneticSpeller::builtin();
        let cases = vec![
            case("Frend", "friend"),
            case("there", "they're"),
            case("there", "the"),
            case("table", "table"),
        ];
        let results = cases.iter().map(|c| check(&speller, c)).collect::<Vec<_>>();

        assert_eq!(results[0].position, Some(0));
        assert_eq!(results[1].position, Some(1));
        assert_eq!(results[2].position, None);
        assert!(results[3].suggestions.is_empty());

        let summary = Summary::of(&results);
        assert_eq!(summary.cases, 4);
        assert_eq!(summary.top1, 1);
        assert_eq!(summary.found, 2);
        assert_eq!(summary.wrong, 1);
        assert_eq!(summary.unflagged, 1);
        assert_eq!(summary.by_kind.phonetic, 1);
        assert_eq!(summary.by_kind.homophone, 2);
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.share(summary.top1), 0.0);
        assert_eq!(summary.fastest, Micros(0));
    }
}
