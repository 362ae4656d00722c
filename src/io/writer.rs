//! JSON corpus writing.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::Error;
use crate::pipelines::unified::EssayRecord;

/// Writes merged records to `dst` as a single JSON array.
pub struct CorpusWriter {
    dst: PathBuf,
}

impl CorpusWriter {
    pub fn new(dst: PathBuf) -> Self {
        Self { dst }
    }

    pub fn write(&self, records: &[EssayRecord]) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(&self.dst)?);
        serde_json::to_writer(&mut writer, records)?;
        writer.flush()?;

        Ok(())
    }
}
