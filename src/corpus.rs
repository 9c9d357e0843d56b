//! Corpus listing, seeded sampling and LZMA line streaming
//!
//! A corpus is a directory of LZMA-compressed UTF-8 text files, one sentence per line.
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use xz2::read::XzDecoder;
use xz2::stream::{Stream, CONCATENATED};
use crate::errors::*;

/// Draw `count` distinct indices from `[0, population)`, reproducibly
///
/// The result is a pure function of the three arguments and is returned in draw order.
pub fn sample(population: usize, seed: u64, count: usize) -> Result<Vec<usize>> {
    if count > population {
        return Err(Error::SampleTooLarge { requested: count, available: population });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(index::sample(&mut rng, population, count).into_vec())
}

/// The files of one corpus directory, in a stable order
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl Corpus {
    /// List the regular files in `root`, sorted by name
    ///
    /// Symlinks are followed; a dangling link is an error.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let mut files = vec![];
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if fs::metadata(entry.path())?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        debug!("Corpus {} has {} files", root.display(), files.len());
        Ok(Corpus { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn path(&self, id: usize) -> Option<&Path> {
        self.files.get(id).map(|p| p.as_path())
    }

    /// Sample `count` file ids with `seed`
    pub fn sample(&self, seed: u64, count: usize) -> Result<Vec<usize>> {
        sample(self.files.len(), seed, count)
    }

    /// Stream the lines of file `id`
    pub fn lines(&self, id: usize) -> Result<CorpusLines> {
        match self.path(id) {
            Some(path) => CorpusLines::open(path),
            None => Err(Error::Other(format!(
                "File id {} is out of range for a corpus of {} files", id, self.files.len()))),
        }
    }
}

/// Lines of one compressed corpus file, terminators stripped
///
/// The file handle lives exactly as long as this iterator.
pub struct CorpusLines {
    inner: std::io::Lines<BufReader<XzDecoder<File>>>,
}

impl CorpusLines {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        // The auto decoder takes both .xz and legacy .lzma containers
        let stream = Stream::new_auto_decoder(u64::max_value(), CONCATENATED)
            .map_err(|e| Error::IOError(e.into()))?;
        let reader = BufReader::new(XzDecoder::new_stream(file, stream));
        Ok(CorpusLines { inner: reader.lines() })
    }
}

impl Iterator for CorpusLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|line| line.map_err(Error::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sample() {
        assert_eq!(sample(50, 123, 10).unwrap(), sample(50, 123, 10).unwrap());
    }

    #[test]
    fn sample_is_distinct_and_in_range() {
        let ids = sample(20, 7, 20).unwrap();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_sample_fails() {
        match sample(3, 123, 4) {
            Err(Error::SampleTooLarge { requested: 4, available: 3 }) => {}
            other => panic!("expected SampleTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn empty_sample_of_empty_corpus() {
        assert!(sample(0, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        match Corpus::open("/definitely/not/a/corpus/dir") {
            Err(Error::IOError(_)) => {}
            other => panic!("expected IOError, got {:?}", other),
        }
    }
}
