//! Sample sentences containing a word from a compressed corpus and score their sentiment
//!
//! The binaries are thin; everything that touches the corpus lives here so it can be tested
//! without a real classifier. A run is one sequential pass: sample files, stream lines, locate
//! the word, crunch a passage around it, optionally exchange the word, ask an oracle, tally.


#[macro_use] extern crate log;
extern crate farmhash;
extern crate rand;
extern crate unicode_segmentation;
extern crate xz2;
pub mod errors;
pub mod farm;
pub mod corpus;
pub mod locate;
pub mod crunch;
pub mod exchange;
pub mod oracle;
pub mod tally;
pub mod report;
