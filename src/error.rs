//! Error enum
use std::num::ParseIntError;

use crate::annotation::Category;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    ParseInt(ParseIntError),
    /// span/text count mismatch for a category inside one annotation document.
    MalformedAnnotation {
        category: Category,
        spans: usize,
        texts: usize,
    },
    /// a frequency table ran out of distinct words before reaching n.
    InsufficientVocabulary {
        category: Category,
        needed: usize,
    },
    /// a built record diverges from the provided sample on one key.
    SampleMismatch {
        id: usize,
        key: String,
    },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Error {
        Error::ParseInt(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
