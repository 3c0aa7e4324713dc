use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use dyslexispell::lexicon::{normalize_key, Lexicon, LexiconOverlay};
use dyslexispell::merge::merge;
use dyslexispell::speller::suggestion::Suggestion;
use dyslexispell::speller::{IgnoreList, PhoneticSpeller, Speller, SpellerConfig};
use dyslexispell::tokenizer::{Tokenize, DEFAULT_MIN_WORD_LEN};

trait OutputWriter {
    fn write_suggestions(&mut self, text: &str, suggestions: &[Suggestion]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_suggestions(&mut self, _text: &str, suggestions: &[Suggestion]) {
        if suggestions.is_empty() {
            println!("No suggestions.");
        }
        for sugg in suggestions {
            println!(
                "{:>4}..{:<4} {}\t\t[{} {:.2}]\t{}",
                sugg.position.start,
                sugg.position.end,
                sugg.original,
                sugg.category,
                sugg.confidence,
                sugg.suggestions.join(", ")
            );
            if let Some(tip) = &sugg.tip {
                println!("\t\t{}", tip);
            }
        }
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct AnalysisRequest {
    text: String,
    suggestions: Vec<Suggestion>,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonWriter {
    results: Vec<AnalysisRequest>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        Self::default()
    }
}

impl OutputWriter for JsonWriter {
    fn write_suggestions(&mut self, text: &str, suggestions: &[Suggestion]) {
        self.results.push(AnalysisRequest {
            text: text.to_owned(),
            suggestions: suggestions.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("failed to serialize results: {}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "find misspellings in the provided text")]
    Analyze(AnalyzeArgs),

    #[options(help = "give the single correction for each provided word")]
    Correct(CorrectArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),

    #[options(help = "merge suggestions from another source into local ones")]
    Merge(MergeArgs),
}

#[derive(Debug, Options)]
struct AnalyzeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON lexicon overlay with extra entries")]
    lexicon: Option<PathBuf>,

    #[options(help = "uses supplied JSON config file")]
    config: Option<PathBuf>,

    #[options(short = "i", help = "word to ignore (repeatable)")]
    ignore: Vec<String>,

    #[options(short = "n", help = "maximum number of homophone alternatives")]
    nbest: Option<usize>,

    #[options(short = "m", help = "minimum word length to check")]
    min_len: Option<usize>,

    #[options(no_short, long = "no-recase", help = "emit corrections in lowercase")]
    disable_recase: bool,

    #[options(no_short, long = "no-homophones", help = "do not flag homophones")]
    disable_homophones: bool,

    #[options(short = "L", help = "analyze each input line separately")]
    lines: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be analyzed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct CorrectArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON lexicon overlay with extra entries")]
    lexicon: Option<PathBuf>,

    #[options(short = "e", help = "show which table matched and why")]
    explain: bool,

    #[options(free, help = "words to be corrected")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "m", help = "minimum word length")]
    min_len: Option<usize>,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct MergeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON array of local suggestions", required)]
    local: PathBuf,

    #[options(help = "JSON array of suggestions from another source", required)]
    incoming: PathBuf,
}

fn read_stdin() -> anyhow::Result<String> {
    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn load_lexicon(path: Option<&Path>) -> anyhow::Result<Lexicon> {
    match path {
        Some(path) => {
            let overlay = LexiconOverlay::from_path(path)
                .with_context(|| format!("loading lexicon {}", path.display()))?;
            Ok(Lexicon::builtin().with_overlay(overlay)?)
        }
        None => Ok(Lexicon::builtin().clone()),
    }
}

fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    // 1. default config
    let mut config = SpellerConfig::default();

    // 2. config from explicit config file
    if let Some(path) = &args.config {
        config = SpellerConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?;
    }

    // 3. config from other command line stuff
    if args.disable_recase {
        config.recase = false;
    }
    if args.disable_homophones {
        config.homophones = false;
    }
    if let Some(v) = args.nbest {
        config.n_best = if v == 0 { None } else { Some(v) };
    }
    if let Some(v) = args.min_len {
        config.min_word_len = v;
    }
    config.validate()?;

    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let speller = PhoneticSpeller::new(&lexicon);
    let ignore = args.ignore.iter().collect::<IgnoreList>();

    let input = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    let texts: Vec<&str> = if args.lines {
        input.lines().collect()
    } else {
        vec![input.as_str()]
    };

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    for text in texts {
        let suggestions = speller.analyze_with_config(text, &ignore, &config);
        writer.write_suggestions(text, &suggestions);
    }

    writer.finish();

    Ok(())
}

fn correct(args: CorrectArgs) -> anyhow::Result<()> {
    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let speller = PhoneticSpeller::new(&lexicon);

    let words: Vec<String> = if args.inputs.is_empty() {
        read_stdin()?
            .split_whitespace()
            .map(|x| x.to_string())
            .collect()
    } else {
        args.inputs
    };

    for word in words {
        match speller.instant_correction(&word) {
            Some(correction) => {
                println!("Input: {}\t\t-> {}", word, correction);
                if args.explain {
                    if let Some(found) = lexicon.lookup_correction(&normalize_key(&word)) {
                        println!("\t\t[{}] {}", found.kind(), found.tip());
                    }
                }
            }
            None => println!("Input: {}\t\t[NO CORRECTION]", word),
        }
    }

    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs: String = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    let min_len = args.min_len.unwrap_or(DEFAULT_MIN_WORD_LEN);
    for token in inputs.word_tokens_with_min_len(min_len) {
        println!("{:>4}..{:<4} \"{}\"", token.start, token.end, token.text);
    }

    Ok(())
}

fn read_suggestions(path: &Path) -> anyhow::Result<Vec<Suggestion>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("parsing suggestions in {}", path.display()))
}

fn merge_files(args: MergeArgs) -> anyhow::Result<()> {
    let local = read_suggestions(&args.local)?;
    let incoming = read_suggestions(&args.incoming)?;
    let merged = merge(local, incoming);
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Analyze(args)) => analyze(args),
        Some(Command::Correct(args)) => correct(args),
        Some(Command::Tokenize(args)) => tokenize(args),
        Some(Command::Merge(args)) => merge_files(args),
    }
}
