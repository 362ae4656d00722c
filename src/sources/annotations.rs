//! Annotation document reading.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rayon::prelude::*;

use crate::annotation::{self, EssayAnnotations};
use crate::error::Error;

/// Recursively read and parse `essay*.ann` files under `src`.
///
/// Documents are independent, so parsing runs in parallel. A
/// malformed document aborts the whole read.
pub fn read_annotations(src: &Path) -> Result<HashMap<String, EssayAnnotations>, Error> {
    info!("reading annotations from {:?}", src);

    let paths: Vec<PathBuf> = super::essay_files(src, "ann")?;
    let annotations = paths
        .into_par_iter()
        .map(|path| -> Result<(String, EssayAnnotations), Error> {
            let document = fs::read_to_string(&path)?;
            let parsed = annotation::parse(&document)?;

            Ok((super::stem(&path)?, parsed))
        })
        .collect::<Result<HashMap<_, _>, Error>>()?;

    info!("{} annotation documents parsed", annotations.len());
    Ok(annotations)
}
