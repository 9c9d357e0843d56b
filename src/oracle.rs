//! Sentiment oracles
//!
//! The pipeline treats a classifier as an opaque `text -> label` capability. Two are built in:
//! a small polarity lexicon that needs nothing installed, and a bridge to any external program
//! that reads one passage per line on stdin and answers one label per line on stdout.
use std::fmt;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use unicode_segmentation::UnicodeSegmentation;
use crate::errors::*;

/// Classifier output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
    /// Anything else; never counted
    Other(String),
}

impl Label {
    /// Read a raw classifier answer such as "POSITIVE (0.9981)"
    pub fn parse(raw: &str) -> Label {
        let raw = raw.trim();
        if raw.starts_with("POSITIVE") {
            Label::Positive
        } else if raw.starts_with("NEGATIVE") {
            Label::Negative
        } else {
            Label::Other(raw.to_string())
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Label::Positive => write!(f, "POSITIVE"),
            Label::Negative => write!(f, "NEGATIVE"),
            Label::Other(ref raw) => write!(f, "{}", raw),
        }
    }
}

/// Anything that can score the sentiment of a passage
pub trait Oracle {
    fn classify(&mut self, text: &str) -> Result<Label>;
}

impl<'a, O: Oracle + ?Sized> Oracle for &'a mut O {
    fn classify(&mut self, text: &str) -> Result<Label> {
        (**self).classify(text)
    }
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn classify(&mut self, text: &str) -> Result<Label> {
        (**self).classify(text)
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "best", "love", "loved", "loves",
    "like", "liked", "happy", "glad", "nice", "beautiful", "fantastic", "perfect", "enjoy",
    "enjoyed", "pleasant", "brilliant", "superb", "awesome", "fine", "kind", "win", "won",
    "success", "successful", "better", "positive", "delightful", "friendly", "fun", "helpful",
    "impressive", "recommend", "safe", "strong", "favorite", "calm", "clean", "fresh",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "hated", "hates", "dislike",
    "sad", "angry", "ugly", "poor", "boring", "disappointing", "disappointed", "fail",
    "failed", "failure", "wrong", "worse", "negative", "nasty", "painful", "problem",
    "broken", "dangerous", "weak", "annoying", "useless", "lose", "lost", "scary", "sick",
    "dirty", "cruel", "stupid", "dead", "kill", "killed", "crash", "fear", "evil",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "without", "hardly",
    "isn't", "wasn't", "aren't", "weren't", "don't", "doesn't", "didn't", "can't", "won't",
    "couldn't", "shouldn't", "wouldn't",
];

/// Bag-of-words polarity lexicon with one-word negation flipping
///
/// Answers NEUTRAL for a zero score, which the tallies skip.
#[derive(Debug, Default, Clone)]
pub struct LexiconOracle;

impl LexiconOracle {
    pub fn new() -> Self {
        LexiconOracle
    }

    pub fn score(&self, text: &str) -> i64 {
        let mut score = 0;
        let mut negated = false;
        for word in text.unicode_words() {
            let word = word.to_lowercase();
            let polarity = if POSITIVE_WORDS.contains(&word.as_str()) {
                1
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                -1
            } else {
                0
            };
            score += if negated { -polarity } else { polarity };
            negated = NEGATIONS.contains(&word.as_str());
        }
        score
    }
}

impl Oracle for LexiconOracle {
    fn classify(&mut self, text: &str) -> Result<Label> {
        let score = self.score(text);
        Ok(if score > 0 {
            Label::Positive
        } else if score < 0 {
            Label::Negative
        } else {
            Label::Other("NEUTRAL".to_string())
        })
    }
}

/// A long-lived external classifier process
///
/// The command line is run through `sh -c`. Each passage is written as one line (embedded
/// newlines become spaces) and the first line the process answers is parsed as the label.
pub struct CommandOracle {
    command: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl CommandOracle {
    pub fn spawn(command: &str) -> Result<Self> {
        info!("Starting sentiment oracle: {}", command);
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let stdin = child.stdin.take()
            .ok_or_else(|| Error::Oracle(format!("no stdin for '{}'", command)))?;
        let stdout = child.stdout.take()
            .ok_or_else(|| Error::Oracle(format!("no stdout for '{}'", command)))?;
        Ok(CommandOracle {
            command: command.to_string(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Oracle for CommandOracle {
    fn classify(&mut self, text: &str) -> Result<Label> {
        let line = text.replace(|c: char| c == '\n' || c == '\r', " ");
        writeln!(self.stdin, "{}", line)?;
        self.stdin.flush()?;
        let mut answer = String::new();
        if self.stdout.read_line(&mut answer)? == 0 {
            return Err(Error::Oracle(format!("'{}' closed its output", self.command)));
        }
        Ok(Label::parse(&answer))
    }
}

impl Drop for CommandOracle {
    fn drop(&mut self) {
        if let Err(err) = self.child.kill() {
            debug!("Oracle '{}' already exited: {}", self.command, err);
        }
        let _ = self.child.wait();
    }
}
