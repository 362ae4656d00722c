/*! Dataset sources.

Readers for the heterogeneous files a unified corpus is merged from:
raw essay text, span-annotation documents, essay-level bias labels and
paragraph-level sufficiency labels.

All readers key their results by essay file stem (`essay001`, ...).
!*/
use std::path::{Path, PathBuf};

use crate::error::Error;

pub mod annotations;
pub mod bias;
pub mod essays;
pub mod sufficiency;

pub use annotations::read_annotations;
pub use bias::read_bias;
pub use essays::read_essays;
pub use sufficiency::{read_sufficiency, Paragraph};

/// Recursively list `essay*.<extension>` files under `src`.
fn essay_files(src: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let pattern = src.join("**").join(format!("essay*.{}", extension));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non-utf8 source path: {:?}", src)))?;

    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry?);
    }

    Ok(paths)
}

/// File stem as an owned string.
fn stem(path: &Path) -> Result<String, Error> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(String::from)
        .ok_or_else(|| Error::Custom(format!("invalid file name: {:?}", path)))
}
