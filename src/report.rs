//! Render a finished run as text and optionally keep it on disk
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use crate::errors::*;
use crate::tally::{Mode, Run, RunConfig, RunResult};

const RULE: &str = "---------------------";
const FLIP_RULE: &str = "----------------------------------------------";

/// The text a run prints, without a trailing newline
pub fn render(cfg: &RunConfig, run: &Run) -> String {
    match run.result {
        RunResult::Sentiment(counts) => {
            let ids = run.sampled_ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("WORD : {}\n\
                EXCHANGE WORD : {}\n\
                SAMPLED IDS : [{}]\n\
                SEED : {}\n\
                {}\n\
                TOTAL COUNT : {}\n\
                POSITIVE COUNT : {}\n\
                NEGATIVE COUNT : {}",
                cfg.word,
                cfg.exchange_word.as_ref().map_or("None", |w| w.as_str()),
                ids,
                cfg.seed,
                RULE,
                counts.total,
                counts.positive,
                counts.negative)
        }
        RunResult::Single(ref label) => {
            label.to_string().split_whitespace().next().unwrap_or("").to_string()
        }
        RunResult::Flips(ref flips) => {
            flips.iter()
                .map(|flip| format!("ORIGINAL POSITIVE{}\nREPLACED NEGATE{}\n{}",
                    flip.original, flip.replaced, FLIP_RULE))
                .collect::<Vec<_>>()
                .join("\n")
        }
        RunResult::Lines(ref lines) => lines.join("\n"),
        RunResult::Count(count) => count.to_string(),
        RunResult::Cooccur(ref top) => {
            top.iter()
                .map(|&(ref word, count)| format!("{} : {}", word, count))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Prefix that tells saved reports of different modes apart
pub fn save_prefix(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Classify => Some(""),
        Mode::Diff => Some("REPLACED_"),
        Mode::List => Some("LIST_"),
        Mode::Count => Some("COUNT_"),
        Mode::Cooccur => Some("CO_"),
        Mode::Single => None,
    }
}

/// `<unix_time><prefix>sentiment_count_for_<word>_seed_<seed>.txt`
pub fn file_name(cfg: &RunConfig, unix_time: f64) -> Option<String> {
    save_prefix(cfg.mode).map(|prefix| format!("{}{}sentiment_count_for_{}_seed_{}.txt",
        unix_time, prefix, cfg.word, cfg.seed))
}

fn now() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

/// Append `text` to a freshly named report file in `dir`
///
/// Returns `None` for modes that never save.
pub fn save_in<P: AsRef<Path>>(dir: P, cfg: &RunConfig, text: &str) -> Result<Option<PathBuf>> {
    let name = match file_name(cfg, now()) {
        Some(name) => name,
        None => return Ok(None),
    };
    let path = dir.as_ref().join(name);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(text.as_bytes())?;
    info!("Saved report to {}", path.display());
    Ok(Some(path))
}

/// Save into the working directory
pub fn save(cfg: &RunConfig, text: &str) -> Result<Option<PathBuf>> {
    save_in(".", cfg, text)
}
