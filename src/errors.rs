//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;

/// Type alias for sentiscope errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors that can end a run
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    SampleTooLarge { requested: usize, available: usize },
    EmptyWord,
    Oracle(String),
    InvalidMode(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::SampleTooLarge { requested, available } => write!(f,
                "Asked for {} sampled files but the corpus directory only has {}",
                requested, available),
            Error::EmptyWord => write!(f, "The word to search for must not be empty"),
            Error::Oracle(ref info) => write!(f, "Sentiment oracle failed: {}", info),
            Error::InvalidMode(ref mode) => write!(f,
                "Unknown mode '{}', expected one of single, diff, list, count, co",
                mode),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            _ => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::IOError(err) => err,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
