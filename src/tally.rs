//! One sequential pass over the sampled corpus, accumulating whatever the run mode asks for
use std::path::PathBuf;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;
use crate::corpus::Corpus;
use crate::crunch::{self, crunch, window};
use crate::errors::*;
use crate::exchange::exchange;
use crate::farm::Counter;
use crate::locate::{Locator, Match, Policy};
use crate::oracle::{Label, Oracle};

/// How many co-occurring words a `co` run reports
pub const CO_TOP: usize = 200;

/// What a run computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Classify every matched passage and count labels
    Classify,
    /// Classify the word argument itself
    Single,
    /// Keep passages that flip from POSITIVE to NEGATIVE when the word is exchanged
    Diff,
    /// Collect matching lines
    List,
    /// Count matching lines
    Count,
    /// Word frequencies over matching lines
    Cooccur,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Mode> {
        match name {
            "single" => Ok(Mode::Single),
            "diff" => Ok(Mode::Diff),
            "list" => Ok(Mode::List),
            "count" => Ok(Mode::Count),
            "co" => Ok(Mode::Cooccur),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl Mode {
    /// Mode from an optional `--mode` value; absent means `Classify`
    pub fn from_arg(name: Option<&str>) -> Result<Mode> {
        name.map_or(Ok(Mode::Classify), |name| name.parse())
    }
}

/// Everything a run needs to know, independent of how it was collected
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub word: String,
    pub data_dir: PathBuf,
    pub save: bool,
    pub seed: u64,
    pub num_samples: usize,
    pub exchange_word: Option<String>,
    pub mode: Mode,
    /// Only accept the word exactly as typed
    pub case_sensitive: bool,
    pub policy: Policy,
    pub max_len: usize,
}

impl RunConfig {
    pub fn new(word: &str) -> Self {
        RunConfig {
            word: word.to_string(),
            data_dir: PathBuf::from("/"),
            save: false,
            seed: 123,
            num_samples: 10,
            exchange_word: None,
            mode: Mode::Classify,
            case_sensitive: false,
            policy: Policy::Boundary,
            max_len: crunch::MAX_LEN,
        }
    }

    pub fn locator(&self) -> Result<Locator> {
        Locator::new(&self.word, self.policy, self.case_sensitive)
    }
}

/// Label counts over classified passages
///
/// Labels other than POSITIVE and NEGATIVE only raise `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentimentCounts {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: &Label) {
        match *label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Other(ref raw) => debug!("Not counting label {}", raw),
        }
        self.total += 1;
    }
}

/// A passage whose sentiment flipped when the word was exchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flip {
    pub original: String,
    pub replaced: String,
}

/// The one result a run emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Sentiment(SentimentCounts),
    Single(Label),
    Flips(Vec<Flip>),
    Lines(Vec<String>),
    Count(usize),
    Cooccur(Vec<(String, usize)>),
}

/// A finished run: which files were read and what came out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub sampled_ids: Vec<usize>,
    pub result: RunResult,
}

/// Accumulator for one pass; feed it lines in corpus order, then `finish`
pub struct Tally<'c> {
    cfg: &'c RunConfig,
    locator: Locator,
    counts: SentimentCounts,
    flips: Vec<Flip>,
    lines: Vec<String>,
    matches: usize,
    cooccur: Counter,
}

impl<'c> Tally<'c> {
    pub fn new(cfg: &'c RunConfig) -> Result<Self> {
        if cfg.mode == Mode::Diff && cfg.exchange_word.is_none() {
            warn!("Diff mode without an exchange word; no passage will be classified");
        }
        Ok(Tally {
            cfg,
            locator: cfg.locator()?,
            counts: SentimentCounts::default(),
            flips: vec![],
            lines: vec![],
            matches: 0,
            cooccur: Counter::new(),
        })
    }

    /// Account for one raw corpus line
    pub fn feed<O: Oracle + ?Sized>(&mut self, line: &str, oracle: &mut O) -> Result<()> {
        let found = match self.locator.locate(line) {
            Some(found) => found,
            None => return Ok(()),
        };
        debug!("Found {:?} at {}", found.text, found.index);
        self.matches += 1;
        match self.cfg.mode {
            Mode::Classify => {
                let passage = match self.cfg.exchange_word {
                    Some(ref exchange_word) => self.exchanged(line, &found, exchange_word),
                    None => self.passage(line, &found),
                };
                let label = oracle.classify(&passage)?;
                self.counts.record(&label);
            }
            Mode::Diff => {
                if let Some(ref exchange_word) = self.cfg.exchange_word {
                    let original = self.passage(line, &found);
                    let replaced = self.exchanged(line, &found, exchange_word);
                    let before = oracle.classify(&original)?;
                    let after = oracle.classify(&replaced)?;
                    if before == Label::Positive && after == Label::Negative {
                        self.flips.push(Flip { original, replaced });
                    }
                }
            }
            Mode::List => self.lines.push(line.to_string()),
            Mode::Count | Mode::Single => {}
            Mode::Cooccur => {
                for word in content_words(line) {
                    self.cooccur.add(&word);
                }
            }
        }
        Ok(())
    }

    pub fn finish(self) -> RunResult {
        match self.cfg.mode {
            Mode::Classify => RunResult::Sentiment(self.counts),
            Mode::Diff => RunResult::Flips(self.flips),
            Mode::List => RunResult::Lines(self.lines),
            Mode::Count | Mode::Single => RunResult::Count(self.matches),
            Mode::Cooccur => RunResult::Cooccur(self.cooccur.most_common(CO_TOP)),
        }
    }

    fn passage(&self, line: &str, found: &Match) -> String {
        crunch(line, Some(found.index), &found.text, self.cfg.max_len)
    }

    /// The crunched passage with the word exchanged, judged against the whole line
    fn exchanged(&self, line: &str, found: &Match, exchange_word: &str) -> String {
        let span = window(line.chars().count(), found.index, found.char_len(), self.cfg.max_len);
        exchange(line, span, found, exchange_word, self.locator.policy() == Policy::Boundary)
    }
}

/// Execute `cfg` against its corpus directory
pub fn run<O: Oracle + ?Sized>(cfg: &RunConfig, oracle: &mut O) -> Result<Run> {
    if cfg.mode == Mode::Single {
        let label = oracle.classify(&cfg.word)?;
        return Ok(Run { sampled_ids: vec![], result: RunResult::Single(label) });
    }

    let corpus = Corpus::open(&cfg.data_dir)?;
    let sampled_ids = corpus.sample(cfg.seed, cfg.num_samples)?;
    info!("Sampled {} of {} files with seed {}: {:?}",
        sampled_ids.len(), corpus.len(), cfg.seed, sampled_ids);

    let mut tally = Tally::new(cfg)?;
    for (i, &id) in sampled_ids.iter().enumerate() {
        if let Some(path) = corpus.path(id) {
            info!("File {}/{} (#{}): {}", i + 1, sampled_ids.len(), id, path.display());
        }
        for line in corpus.lines(id)? {
            tally.feed(&line?, oracle)?;
        }
    }
    Ok(Run { sampled_ids, result: tally.finish() })
}

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

/// Lower-cased words of `line` without punctuation or stop words
pub fn content_words(line: &str) -> Vec<String> {
    line.unicode_words()
        .map(|word| word.to_lowercase())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}
