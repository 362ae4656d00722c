//! Unified corpus construction.
//!
//! Merges the four dataset sources into one JSON corpus:
//! 1. read the raw essay texts
//! 1. read and parse the annotation documents
//! 1. read the bias labels
//! 1. read the sufficiency labels
//! 1. merge everything by essay stem into per-essay records
//! 1. sort records by essay id
//! 1. optionally compare against a provided sample record
//! 1. write the records as one JSON array
use std::collections::HashMap;
use std::path::PathBuf;

use log::info;

use crate::annotation::EssayAnnotations;
use crate::error::Error;
use crate::io::CorpusWriter;
use crate::processing::check_sample;
use crate::sources::{self, Paragraph};

use super::document::{essay_id, EssayRecord};
use crate::pipelines::Pipeline;

pub struct UnifiedCorpus {
    src: PathBuf,
    bias: PathBuf,
    sufficiency: PathBuf,
    dst: PathBuf,
    sample: Option<PathBuf>,
}

impl UnifiedCorpus {
    pub fn new(
        src: PathBuf,
        bias: PathBuf,
        sufficiency: PathBuf,
        dst: PathBuf,
        sample: Option<PathBuf>,
    ) -> Self {
        Self {
            src,
            bias,
            sufficiency,
            dst,
            sample,
        }
    }

    /// Merge the per-source maps into records sorted by essay id.
    ///
    /// Every discovered essay must have annotations, a bias label and
    /// sufficiency labels; a missing entry aborts the build.
    fn merge(
        essays: HashMap<String, String>,
        mut annotations: HashMap<String, EssayAnnotations>,
        bias: HashMap<String, bool>,
        mut sufficiency: HashMap<String, Vec<Paragraph>>,
    ) -> Result<Vec<EssayRecord>, Error> {
        let mut records = Vec::with_capacity(essays.len());
        for (name, text) in essays {
            let essay_annotations = annotations
                .remove(&name)
                .ok_or_else(|| Error::Custom(format!("no annotations for {}", name)))?;
            let confirmation_bias = *bias
                .get(&name)
                .ok_or_else(|| Error::Custom(format!("no bias label for {}", name)))?;
            let paragraphs = sufficiency
                .remove(&name)
                .ok_or_else(|| Error::Custom(format!("no sufficiency labels for {}", name)))?;

            records.push(EssayRecord::new(
                essay_id(&name)?,
                text,
                essay_annotations,
                confirmation_bias,
                paragraphs,
            ));
        }

        records.sort_by_key(EssayRecord::id);
        Ok(records)
    }
}

impl Pipeline<()> for UnifiedCorpus {
    fn run(&self) -> Result<(), Error> {
        let essays = sources::read_essays(&self.src)?;
        let annotations = sources::read_annotations(&self.src)?;
        let bias = sources::read_bias(&self.bias)?;
        let sufficiency = sources::read_sufficiency(&self.sufficiency)?;

        let records = Self::merge(essays, annotations, bias, sufficiency)?;
        info!("{} records merged", records.len());

        if let Some(sample) = &self.sample {
            check_sample(&records, sample)?;
        }

        CorpusWriter::new(self.dst.clone()).write(&records)?;
        info!("unified corpus written to {:?}", self.dst);

        Ok(())
    }
}
