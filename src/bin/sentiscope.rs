//! Sample sentences containing a word from an LZMA corpus and count their sentiment
//!
//! Files are drawn reproducibly from `--data_dir` with `--random_seed`. Every line holding the
//! word is cut to a window around it, the word is optionally exchanged for another, and the
//! passage goes to a sentiment oracle. `--mode` switches to listing, counting, co-occurrence, or
//! finding passages that turn negative once the word is exchanged.
//!
//! The default oracle is a small built-in lexicon. Pass `--oracle 'command'` to use a real model:
//! the command gets one passage per line on stdin and answers one label per line on stdout.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate sentiscope;

use std::path::PathBuf;
use clap::Arg;

use sentiscope::errors::*;
use sentiscope::locate::Policy;
use sentiscope::oracle::{CommandOracle, LexiconOracle, Oracle};
use sentiscope::tally::{self, Mode, RunConfig};
use sentiscope::report;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<word> 'The word to be searched for in the dataset'")
        .arg_from_usage("-c, --case_sensitive 'Only search for exact matches of the given word'")
        .arg(Arg::from_usage("-d, --data_dir=[DIR] 'Specify the data directory'")
            .default_value("/"))
        .arg_from_usage("-s, --save 'Save the report to an output file in the current directory'")
        .arg(Arg::from_usage("-r, --random_seed=[SEED] 'Specify a seed for the random selection of files'")
            .default_value("123"))
        .arg(Arg::from_usage("-n, --num_samples=[N] 'Amount of files to sample'")
            .default_value("10"))
        .arg_from_usage("-e, --exchange_word=[WORD] 'Switch the word with an alternative before classification'")
        .arg(Arg::from_usage("-m, --mode=[MODE] 'Specifies the mode of operation (default: count sentiment)'")
            .possible_values(&["single", "diff", "list", "count", "co"]))
        .arg(Arg::from_usage("-l, --max_len=[CHARS] 'Characters of context kept around the word'")
            .default_value("100"))
        .arg_from_usage("--substring 'Also match the word inside longer tokens'")
        .arg_from_usage("-o, --oracle=[COMMAND] 'External sentiment classifier, one passage per line'")
        .get_matches();

    let cfg = RunConfig {
        word: args.value_of("word").unwrap().to_string(),
        data_dir: PathBuf::from(args.value_of("data_dir").unwrap()),
        save: args.is_present("save"),
        seed: value_t!(args, "random_seed", u64).unwrap_or_else(|e| e.exit()),
        num_samples: value_t!(args, "num_samples", usize).unwrap_or_else(|e| e.exit()),
        exchange_word: args.value_of("exchange_word").map(|w| w.to_string()),
        mode: Mode::from_arg(args.value_of("mode"))?,
        case_sensitive: args.is_present("case_sensitive"),
        policy: if args.is_present("substring") { Policy::Substring } else { Policy::Boundary },
        max_len: value_t!(args, "max_len", usize).unwrap_or_else(|e| e.exit()),
    };
    info!("Running {:?}", cfg);

    let mut oracle: Box<dyn Oracle> = match args.value_of("oracle") {
        Some(command) => Box::new(CommandOracle::spawn(command)?),
        None => Box::new(LexiconOracle::new()),
    };

    let run = tally::run(&cfg, &mut oracle)?;
    let text = report::render(&cfg, &run);
    println!("{}", text);

    if cfg.save {
        if report::save(&cfg, &text)?.is_none() {
            warn!("Mode {:?} has nothing to save", cfg.mode);
        }
    }
    Ok(())
}
